//! 引擎配置
//!
//! 提供翻译引擎的配置项和常量定义。

use std::time::Duration;

/// 配置常量
pub mod constants {
    /// 原文语言代码，切换回该语言时执行纯恢复，不发起任何网络请求
    pub const ORIGINAL_LANG: &str = "original";

    /// 单次请求的最大文本条数
    pub const DEFAULT_CHUNK_SIZE: usize = 50;

    /// 单块请求的超时秒数
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

    /// 语言偏好的持久化键名
    pub const PREFERENCE_KEY: &str = "polyglot.language";

    /// 可翻译的属性白名单
    pub const TRANSLATABLE_ATTRS: [&str; 4] = ["placeholder", "title", "alt", "aria-label"];

    /// 跳过的非可视元素
    pub const SKIP_ELEMENTS: [&str; 9] = [
        "script", "style", "noscript", "template", "svg", "math", "iframe", "canvas", "object",
    ];
}

/// 翻译引擎配置
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 单次请求的最大文本条数
    pub chunk_size: usize,
    /// 单块请求超时，超时按块失败处理并回退原文
    pub request_timeout: Duration,
    /// 收集时跳过的元素标签
    pub skip_elements: Vec<String>,
    /// 收集的属性白名单
    pub translatable_attrs: Vec<String>,
    /// 语言偏好的持久化键名
    pub preference_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: constants::DEFAULT_CHUNK_SIZE,
            request_timeout: Duration::from_secs(constants::DEFAULT_REQUEST_TIMEOUT_SECS),
            skip_elements: constants::SKIP_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            translatable_attrs: constants::TRANSLATABLE_ATTRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preference_key: constants::PREFERENCE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// 使用指定分块大小的配置（主要用于测试）
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Default::default()
        }
    }
}
