//! 原文快照存储
//!
//! 记录每个可翻译位置（文本节点或白名单属性）的原始字符串。
//! 每个位置只捕获一次，之后无论翻译多少轮都不会被覆盖，
//! 这保证了切回原文语言时能够逐字节还原。

use std::collections::HashSet;
use std::rc::Rc;

use markup5ever_rcdom::Handle;

use crate::collector::TextUnit;
use crate::dom::{is_attached, set_node_attr, set_node_text};

/// 单个快照条目：一个文本位置及其原始字符串
///
/// `attr_name` 为 `Some` 时表示属性位置，否则为文本节点。
#[derive(Debug, Clone)]
pub struct SnapshotEntry {
    pub node: Handle,
    pub attr_name: Option<String>,
    /// 捕获时的原始字符串，未做任何修剪
    pub original: String,
}

/// 快照键：节点指针身份 + 属性名
type SnapshotKey = (usize, Option<String>);

/// 原文快照存储
#[derive(Debug, Default)]
pub struct SnapshotStore {
    entries: Vec<SnapshotEntry>,
    seen: HashSet<SnapshotKey>,
}

impl SnapshotStore {
    /// 创建空的快照存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否尚未捕获任何快照
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 快照条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 首次捕获：仅当存储为空时记录全部位置，幂等
    pub fn capture_if_empty(&mut self, units: &[TextUnit]) {
        if !self.entries.is_empty() {
            return;
        }
        let captured = self.record_units(units);
        tracing::debug!("首次快照捕获 {} 处原文", captured);
    }

    /// 记录一组位置，已捕获过的位置保持原值不动
    ///
    /// 观察者发现新内容时也走这里：新位置当前的字符串被当作原文记录。
    pub fn record_units(&mut self, units: &[TextUnit]) -> usize {
        let mut captured = 0;

        for unit in units {
            let key = (Rc::as_ptr(&unit.node) as usize, unit.attr_name.clone());
            if self.seen.insert(key) {
                self.entries.push(SnapshotEntry {
                    node: unit.node.clone(),
                    attr_name: unit.attr_name.clone(),
                    original: unit.text.clone(),
                });
                captured += 1;
            }
        }

        captured
    }

    /// 把全部原文写回对应位置，返回实际恢复的条数
    ///
    /// 已从树上移除的位置静默跳过；快照本身保留，供下次切换使用。
    pub fn restore_all(&self) -> usize {
        let mut restored = 0;

        for entry in &self.entries {
            if !is_attached(&entry.node) {
                continue;
            }

            match &entry.attr_name {
                Some(attr) => {
                    set_node_attr(&entry.node, attr, Some(entry.original.clone()));
                }
                None => {
                    set_node_text(&entry.node, &entry.original);
                }
            }
            restored += 1;
        }

        restored
    }

    /// 全部条目（译文回写时遍历）
    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    /// 按捕获顺序去重后的原文列表（修剪后），即重新翻译时的输入
    pub fn unique_originals(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut originals = Vec::new();

        for entry in &self.entries {
            let trimmed = entry.original.trim();
            if seen.insert(trimmed.to_string()) {
                originals.push(trimmed.to_string());
            }
        }

        originals
    }
}
