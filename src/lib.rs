//! # Polyglot Library
//!
//! 界面实时翻译引擎：把宿主渲染层产出的文本树一次性快照，
//! 按目标语言批量翻译并原地替换，随时可逐字节恢复原文。
//!
//! ## 模块组织
//!
//! - `dom` - 文本树的解析与读写工具
//! - `snapshot` - 原文快照存储（一次捕获，永不覆盖）
//! - `collector` - 可翻译文本收集器
//! - `cache` - 翻译结果缓存
//! - `provider` - 翻译服务商接口协议
//! - `batch` - 分块批量翻译
//! - `applier` - 译文回写
//! - `observer` - 实时内容观察者状态机
//! - `storage` - 语言偏好持久化
//! - `service` - 语言状态控制器（顶层编排）
//!
//! ## 基本用法
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use polyglot::{EngineConfig, HttpProvider, LanguageService, MemoryPreferenceStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dom = polyglot::dom::html_to_dom(b"<p>Hello</p>");
//!
//! let provider = Arc::new(HttpProvider::new("http://localhost:1188/translate"));
//! let store = Box::new(MemoryPreferenceStore::default());
//! let mut service = LanguageService::new(EngineConfig::default(), provider, store);
//!
//! service.set_language(&dom.document, "zh").await?;
//! service.set_language(&dom.document, "original").await?;
//! # Ok(())
//! # }
//! ```

pub mod applier;
pub mod batch;
pub mod cache;
pub mod collector;
pub mod config;
pub mod dom;
pub mod error;
pub mod observer;
pub mod provider;
pub mod service;
pub mod snapshot;
pub mod storage;

// Re-export commonly used items for convenience
pub use batch::TranslationBatcher;
pub use cache::{CacheStats, TranslationCache};
pub use collector::{TextCollector, TextUnit};
pub use config::{constants, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use observer::{LiveObserver, ObserverState};
pub use provider::{HttpProvider, ProviderRequest, ProviderResponse, TranslationProvider};
pub use service::{LanguageService, ServiceStats};
pub use snapshot::SnapshotStore;
pub use storage::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
