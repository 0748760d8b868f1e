//! 分块批量翻译
//!
//! 把去重后的字符串按固定大小分块发给服务商，结果写入缓存。
//! 返回的映射永远是全量的：翻译失败的块按原文回退，调用方
//! 不会丢失任何内容。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::cache::{CacheStats, TranslationCache};
use crate::config::constants::ORIGINAL_LANG;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::provider::{ProviderRequest, TranslationProvider};

/// 翻译批处理器，持有缓存与服务商
pub struct TranslationBatcher {
    provider: Arc<dyn TranslationProvider>,
    cache: TranslationCache,
    chunk_size: usize,
    request_timeout: Duration,
}

impl TranslationBatcher {
    /// 创建批处理器
    pub fn new(provider: Arc<dyn TranslationProvider>, config: &EngineConfig) -> Self {
        Self {
            provider,
            cache: TranslationCache::new(),
            chunk_size: config.chunk_size.max(1),
            request_timeout: config.request_timeout,
        }
    }

    /// 翻译一组字符串，返回原文到译文的全量映射
    ///
    /// 1. 已缓存的条目直接取缓存；
    /// 2. 未缓存的按块大小分组，逐块请求；
    /// 3. 成功的块写入缓存，失败的块映射到原文自身并继续后续块。
    ///
    /// 对已全部缓存的输入重复调用不会发出任何网络请求。
    pub async fn translate(
        &mut self,
        texts: &[String],
        target_lang: &str,
    ) -> HashMap<String, String> {
        let mut result = HashMap::with_capacity(texts.len());

        // 切回原文不走网络，也永不进缓存
        if target_lang == ORIGINAL_LANG {
            for text in texts {
                result.insert(text.clone(), text.clone());
            }
            return result;
        }

        let mut pending: Vec<String> = Vec::new();
        for text in texts {
            match self.cache.get(target_lang, text) {
                Some(cached) => {
                    result.insert(text.clone(), cached);
                }
                None => pending.push(text.clone()),
            }
        }

        if pending.is_empty() {
            tracing::debug!("全部 {} 条文本命中缓存", texts.len());
            return result;
        }

        let chunk_count = pending.len().div_ceil(self.chunk_size);
        tracing::info!(
            "翻译 {} 条未缓存文本（目标语言 {}），共 {} 块",
            pending.len(),
            target_lang,
            chunk_count
        );

        for (index, chunk) in pending.chunks(self.chunk_size).enumerate() {
            let request = ProviderRequest::new(chunk.to_vec(), target_lang);

            match self.request_chunk(&request).await {
                Ok(translations) => {
                    for (original, translated) in chunk.iter().zip(translations) {
                        self.cache.insert(target_lang, original, &translated);
                        result.insert(original.clone(), translated);
                    }
                }
                Err(err) => {
                    // 本块回退原文，不进缓存，继续处理后续块
                    tracing::warn!("第 {}/{} 块翻译失败，回退原文: {}", index + 1, chunk_count, err);
                    for original in chunk {
                        result.insert(original.clone(), original.clone());
                    }
                }
            }
        }

        result
    }

    /// 发出一块请求并校验响应
    async fn request_chunk(&self, request: &ProviderRequest) -> EngineResult<Vec<String>> {
        let response = match timeout(self.request_timeout, self.provider.translate_chunk(request))
            .await
        {
            Ok(outcome) => outcome?,
            Err(_) => {
                return Err(EngineError::Timeout(format!(
                    "{} 秒内未收到响应",
                    self.request_timeout.as_secs()
                )))
            }
        };

        if !response.success {
            return Err(EngineError::MalformedResponse(
                "响应缺少 success 或 success=false".to_string(),
            ));
        }

        // 译文必须与请求按位置对齐
        if response.translations.len() != request.texts.len() {
            return Err(EngineError::MalformedResponse(format!(
                "译文条数 {} 与请求条数 {} 不一致",
                response.translations.len(),
                request.texts.len()
            )));
        }

        Ok(response.translations)
    }

    /// 缓存统计
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// 只读访问缓存
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}
