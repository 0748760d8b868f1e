//! 翻译结果缓存
//!
//! 以（目标语言，原文）为键记忆翻译结果，进程存活期间不过期、
//! 不淘汰。界面文案的字符串宇宙很小，无界增长是已接受的限制。
//! 原文语言永远不会产生缓存条目：切回原文是纯恢复操作。

use std::collections::HashMap;

use crate::config::constants::ORIGINAL_LANG;

/// 缓存统计信息
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl CacheStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64
        }
    }
}

/// 翻译缓存
///
/// 引擎运行在单一逻辑线程上（见忙碌标志的并发模型），
/// 因此这里不需要任何锁。
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<(String, String), String>,
    stats: CacheStats,
}

impl TranslationCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询译文，并计入统计
    pub fn get(&mut self, target_lang: &str, original: &str) -> Option<String> {
        self.stats.total_requests += 1;

        let hit = self
            .entries
            .get(&(target_lang.to_string(), original.to_string()))
            .cloned();

        if hit.is_some() {
            self.stats.cache_hits += 1;
        } else {
            self.stats.cache_misses += 1;
        }
        hit
    }

    /// 不计统计地检查是否已缓存
    pub fn contains(&self, target_lang: &str, original: &str) -> bool {
        self.entries
            .contains_key(&(target_lang.to_string(), original.to_string()))
    }

    /// 写入译文；目标语言为原文语言时静默忽略
    pub fn insert(&mut self, target_lang: &str, original: &str, translated: &str) {
        if target_lang == ORIGINAL_LANG {
            return;
        }
        self.entries.insert(
            (target_lang.to_string(), original.to_string()),
            translated.to_string(),
        );
    }

    /// 缓存条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取统计信息
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
