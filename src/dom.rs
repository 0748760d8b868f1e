//! 文本树的解析与读写工具
//!
//! 引擎对宿主渲染层的唯一假设是一棵可读可写的 DOM 树，
//! 这里提供解析、序列化以及节点文本/属性的读写函数。

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8]) -> RcDom {
    let s = String::from_utf8_lossy(data).to_string();

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// 将 DOM 序列化为 HTML 字符串
pub fn dom_to_string(document: &Handle) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");
    String::from_utf8_lossy(&buf).to_string()
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// 设置节点属性
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    use html5ever::interface::{Attribute, QualName};
    use html5ever::tendril::format_tendril;
    use html5ever::{namespace_url, ns, LocalName};

    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.clone() {
                    let _ = &attrs_mut[i].value.clear();
                    let _ = &attrs_mut[i].value.push_slice(attr_value.as_str());
                } else {
                    // Remove attr completely if attr_value is not defined
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            // Add new attribute (since originally the target node didn't have it)
            if let Some(attr_value) = attr_value.clone() {
                let name = LocalName::from(attr_name);

                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), name),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}

/// 获取文本节点内容
pub fn get_node_text(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// 设置文本节点内容
pub fn set_node_text(node: &Handle, value: &str) {
    if let NodeData::Text { ref contents } = node.data {
        let mut tendril = contents.borrow_mut();
        tendril.clear();
        tendril.push_slice(value);
    }
}

/// 判断节点是否仍然挂在文档树上
///
/// 沿父链上溯到 Document 节点；已被宿主移除的节点没有这条链。
pub fn is_attached(node: &Handle) -> bool {
    let mut current = node.clone();

    loop {
        if matches!(current.data, NodeData::Document) {
            return true;
        }

        let parent = current.parent.take();
        current.parent.set(parent.clone());

        match parent.and_then(|weak| weak.upgrade()) {
            Some(parent_node) => current = parent_node,
            None => return false,
        }
    }
}
