//! 集成测试公共模块
//!
//! 提供 DOM 构造、树变动模拟和可编程的假翻译服务商。

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use html5ever::interface::QualName;
use html5ever::tendril::StrTendril;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

use polyglot::provider::{ProviderRequest, ProviderResponse, TranslationProvider};
use polyglot::{EngineError, EngineResult};

/// 初始化测试日志（重复调用安全）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// 解析测试页面
pub fn page(html: &str) -> RcDom {
    polyglot::dom::html_to_dom(html.as_bytes())
}

/// 两个导航项的最小页面（规范场景用例）
pub fn nav_page() -> RcDom {
    page("<html><head></head><body><nav><a href=\"/\">Home</a><a href=\"/settings\">Settings</a></nav></body></html>")
}

/// 收集树上全部可见文本（修剪后），按文档顺序
pub fn visible_strings(root: &Handle) -> Vec<String> {
    let mut strings = Vec::new();
    walk_texts(root, &mut strings);
    strings
}

fn walk_texts(node: &Handle, out: &mut Vec<String>) {
    if let NodeData::Text { ref contents } = node.data {
        let text = contents.borrow().to_string();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    for child in node.children.borrow().iter() {
        walk_texts(child, out);
    }
}

/// 查找第一个指定标签的元素
pub fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if polyglot::dom::get_node_name(node) == Some(tag) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// 模拟宿主插入一段新渲染内容：`<tag>text</tag>` 追加到 parent 下
pub fn append_text_element(parent: &Handle, tag: &str, text: &str) -> Handle {
    let element = Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), LocalName::from(tag)),
        attrs: RefCell::new(Vec::new()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    });
    let text_node = Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    });

    text_node.parent.set(Some(Rc::downgrade(&element)));
    element.children.borrow_mut().push(text_node);

    element.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(element.clone());
    element
}

/// 模拟宿主移除节点
pub fn remove_node(node: &Handle) {
    if let Some(parent) = node.parent.take().and_then(|weak| weak.upgrade()) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
}

/// 可编程的假翻译服务商
///
/// 字典里有的词条按字典翻译，其余译成 "[语言] 原文"。
/// 可指定第 N 次请求失败（1 起数），并记录收到的每次请求。
pub struct FakeProvider {
    dictionary: HashMap<(String, String), String>,
    requests: Cell<usize>,
    fail_requests: RefCell<HashSet<usize>>,
    received: RefCell<Vec<ProviderRequest>>,
}

impl FakeProvider {
    /// 无字典的回声服务商
    pub fn echo() -> Arc<Self> {
        Arc::new(Self {
            dictionary: HashMap::new(),
            requests: Cell::new(0),
            fail_requests: RefCell::new(HashSet::new()),
            received: RefCell::new(Vec::new()),
        })
    }

    /// 带字典的服务商
    pub fn with_dictionary(lang: &str, pairs: &[(&str, &str)]) -> Arc<Self> {
        let mut dictionary = HashMap::new();
        for (original, translated) in pairs {
            dictionary.insert(
                (lang.to_string(), original.to_string()),
                translated.to_string(),
            );
        }
        Arc::new(Self {
            dictionary,
            requests: Cell::new(0),
            fail_requests: RefCell::new(HashSet::new()),
            received: RefCell::new(Vec::new()),
        })
    }

    /// 让第 N 次请求失败（1 起数）
    pub fn fail_on(&self, request_index: usize) {
        self.fail_requests.borrow_mut().insert(request_index);
    }

    /// 累计收到的请求数
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    /// 第 N 次请求的文本条数（1 起数）
    pub fn request_len(&self, request_index: usize) -> usize {
        self.received.borrow()[request_index - 1].texts.len()
    }

    fn lookup(&self, lang: &str, text: &str) -> String {
        self.dictionary
            .get(&(lang.to_string(), text.to_string()))
            .cloned()
            .unwrap_or_else(|| format!("[{lang}] {text}"))
    }
}

#[async_trait::async_trait(?Send)]
impl TranslationProvider for FakeProvider {
    async fn translate_chunk(&self, request: &ProviderRequest) -> EngineResult<ProviderResponse> {
        let index = self.requests.get() + 1;
        self.requests.set(index);
        self.received.borrow_mut().push(request.clone());

        if self.fail_requests.borrow().contains(&index) {
            return Err(EngineError::Network("模拟网络故障".to_string()));
        }

        Ok(ProviderResponse {
            success: true,
            translations: request
                .texts
                .iter()
                .map(|text| self.lookup(&request.target_lang, text))
                .collect(),
        })
    }
}

/// 永远不响应的服务商，用于验证超时回退
pub struct HangingProvider;

#[async_trait::async_trait(?Send)]
impl TranslationProvider for HangingProvider {
    async fn translate_chunk(&self, _request: &ProviderRequest) -> EngineResult<ProviderResponse> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

/// 永远返回畸形响应（译文条数与请求不齐）的服务商
pub struct MisalignedProvider;

#[async_trait::async_trait(?Send)]
impl TranslationProvider for MisalignedProvider {
    async fn translate_chunk(&self, _request: &ProviderRequest) -> EngineResult<ProviderResponse> {
        Ok(ProviderResponse {
            success: true,
            translations: vec!["仅此一条".to_string()],
        })
    }
}
