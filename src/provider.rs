//! 翻译服务商接口协议
//!
//! 引擎只按请求/响应契约消费外部翻译服务：
//! 请求携带一块文本和目标语言，响应按位置对齐返回译文数组。
//! `success` 字段缺失或为假都按块失败处理。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::constants::ORIGINAL_LANG;
use crate::error::{EngineError, EngineResult};

/// 单块翻译请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    /// 待翻译文本，长度不超过配置的块大小
    pub texts: Vec<String>,
    pub target_lang: String,
    /// 恒为 "original"，表示源语言是界面原文
    pub source_lang: String,
}

impl ProviderRequest {
    /// 构造一块请求
    pub fn new(texts: Vec<String>, target_lang: &str) -> Self {
        Self {
            texts,
            target_lang: target_lang.to_string(),
            source_lang: ORIGINAL_LANG.to_string(),
        }
    }
}

/// 单块翻译响应
///
/// `translations[i]` 与请求的 `texts[i]` 按位置对应。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub translations: Vec<String>,
}

/// 翻译服务商接口
///
/// 测试中用字典假实现替换，生产中用 [`HttpProvider`]。
#[async_trait(?Send)]
pub trait TranslationProvider {
    /// 翻译一块文本
    async fn translate_chunk(&self, request: &ProviderRequest) -> EngineResult<ProviderResponse>;
}

/// 基于 HTTP JSON 接口的服务商实现
#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpProvider {
    /// 指向给定翻译接口地址
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl TranslationProvider for HttpProvider {
    async fn translate_chunk(&self, request: &ProviderRequest) -> EngineResult<ProviderResponse> {
        let body = serde_json::to_string(request)
            .map_err(|e| EngineError::MalformedResponse(format!("请求序列化失败: {e}")))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| EngineError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EngineError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                self.endpoint
            )));
        }

        let payload = response
            .text()
            .await
            .map_err(|e| EngineError::Network(e.to_string()))?;

        serde_json::from_str::<ProviderResponse>(&payload)
            .map_err(|e| EngineError::MalformedResponse(e.to_string()))
    }
}
