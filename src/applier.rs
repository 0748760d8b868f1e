//! 译文回写
//!
//! 把翻译映射写回快照记录的各个位置。只有当映射值与当前渲染值
//! 不同的位置才会被写入，避免无谓的树变动触发宿主的内容通知。

use std::collections::HashMap;

use crate::dom::{get_node_attr, get_node_text, is_attached, set_node_attr, set_node_text};
use crate::snapshot::SnapshotStore;

/// 按快照位置应用翻译映射，返回实际写入的位置数
pub fn apply(snapshots: &SnapshotStore, translations: &HashMap<String, String>) -> usize {
    let mut applied = 0;

    for entry in snapshots.entries() {
        let key = entry.original.trim();
        let Some(translated) = translations.get(key) else {
            continue;
        };

        if !is_attached(&entry.node) {
            continue;
        }

        match &entry.attr_name {
            Some(attr) => {
                let current = get_node_attr(&entry.node, attr);
                if current.as_deref().map(str::trim) != Some(translated.as_str()) {
                    set_node_attr(&entry.node, attr, Some(translated.clone()));
                    applied += 1;
                }
            }
            None => {
                let current = get_node_text(&entry.node);
                if current.as_deref().map(str::trim) != Some(translated.as_str()) {
                    set_node_text(&entry.node, translated);
                    applied += 1;
                }
            }
        }
    }

    tracing::debug!("译文回写 {} 处", applied);
    applied
}
