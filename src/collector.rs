//! 可翻译文本收集器
//!
//! 深度优先遍历渲染树，收集全部可翻译位置：非空文本节点，
//! 以及白名单属性（placeholder、title、alt、aria-label）。
//! 同一棵未变动的树多次收集得到完全相同的结果，批处理器的
//! 缓存正确性依赖这一点。

use std::collections::HashSet;

use markup5ever_rcdom::{Handle, NodeData};

use crate::config::EngineConfig;
use crate::dom::get_node_attr;

/// 一个可翻译位置及其当前字符串
#[derive(Debug, Clone)]
pub struct TextUnit {
    /// 位置当前的字符串，保留原始空白
    pub text: String,
    /// 所在节点（属性位置为元素节点，否则为文本节点）
    pub node: Handle,
    /// 属性名，`None` 表示文本节点
    pub attr_name: Option<String>,
}

impl TextUnit {
    /// 是否为属性位置
    pub fn is_attribute(&self) -> bool {
        self.attr_name.is_some()
    }

    /// 参与翻译与查表的键（修剪首尾空白）
    pub fn key(&self) -> &str {
        self.text.trim()
    }
}

/// 文本收集器
#[derive(Debug, Clone)]
pub struct TextCollector {
    skip_elements: Vec<String>,
    translatable_attrs: Vec<String>,
}

impl TextCollector {
    /// 根据引擎配置创建收集器
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            skip_elements: config.skip_elements.clone(),
            translatable_attrs: config.translatable_attrs.clone(),
        }
    }

    /// 收集根节点可达的全部可翻译位置，按文档顺序返回
    pub fn collect(&self, root: &Handle) -> Vec<TextUnit> {
        let mut units = Vec::new();
        self.walk(root, &mut units);
        units
    }

    fn walk(&self, node: &Handle, units: &mut Vec<TextUnit>) {
        match node.data {
            NodeData::Text { ref contents } => {
                let text = contents.borrow().to_string();
                if !text.trim().is_empty() {
                    units.push(TextUnit {
                        text,
                        node: node.clone(),
                        attr_name: None,
                    });
                }
            }
            NodeData::Element { ref name, .. } => {
                let tag_name = name.local.as_ref();
                if self.should_skip_element(tag_name) {
                    return;
                }

                self.collect_attributes(node, units);

                for child in node.children.borrow().iter() {
                    self.walk(child, units);
                }
            }
            _ => {
                for child in node.children.borrow().iter() {
                    self.walk(child, units);
                }
            }
        }
    }

    /// 收集元素上白名单属性的值
    fn collect_attributes(&self, node: &Handle, units: &mut Vec<TextUnit>) {
        for attr_name in &self.translatable_attrs {
            if let Some(attr_value) = get_node_attr(node, attr_name) {
                if !attr_value.trim().is_empty() {
                    units.push(TextUnit {
                        text: attr_value,
                        node: node.clone(),
                        attr_name: Some(attr_name.clone()),
                    });
                }
            }
        }
    }

    fn should_skip_element(&self, tag_name: &str) -> bool {
        self.skip_elements
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(tag_name))
    }

    /// 按首次出现顺序对修剪后的字符串去重，作为批处理器的输入
    pub fn unique_strings(units: &[TextUnit]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut strings = Vec::new();

        for unit in units {
            let key = unit.key();
            if seen.insert(key.to_string()) {
                strings.push(key.to_string());
            }
        }

        strings
    }
}
