//! 语言状态控制器
//!
//! 顶层编排：对宿主暴露 `set_language` / `current_language` / `is_busy`，
//! 持有忙碌标志（单飞并发控制）、快照存储、批处理器和观察者，
//! 并负责语言偏好的启动加载与成功后持久化。
//!
//! 引擎是显式构造的服务对象，服务商与偏好存储从外部注入；
//! 如需全局单例，由宿主应用的组装层自行用薄封装持有。
//!
//! 一趟翻译的控制流：进入忙碌 → 解除观察者 → 快照（仅首次）→
//! 收集 → 分块翻译 → 回写 → 重新武装观察者 → 持久化 → 退出忙碌。
//! 服务商故障不会作为硬错误抛给调用方：受影响的字符串回退为
//! 原文，趟照常结束——残缺的翻译好过卡死的界面。

use std::sync::Arc;
use std::time::Instant;

use markup5ever_rcdom::Handle;

use crate::applier;
use crate::batch::TranslationBatcher;
use crate::cache::CacheStats;
use crate::collector::TextCollector;
use crate::config::constants::ORIGINAL_LANG;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::observer::LiveObserver;
use crate::provider::TranslationProvider;
use crate::snapshot::SnapshotStore;
use crate::storage::PreferenceStore;

/// 控制器统计信息
///
/// 引擎运行在单一逻辑线程上，普通计数即可。
#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceStats {
    /// 全量翻译趟累计收集的去重文本条数
    pub texts_collected: usize,
    /// 完成的翻译趟数（含恢复趟）
    pub passes_completed: usize,
    /// 观察者触发的增量翻译次数
    pub live_updates: usize,
    /// 因忙碌被拒绝的切换请求数
    pub requests_rejected: usize,
}

/// 语言状态控制器
pub struct LanguageService {
    collector: TextCollector,
    snapshots: SnapshotStore,
    batcher: TranslationBatcher,
    observer: LiveObserver,
    store: Box<dyn PreferenceStore>,
    current_language: String,
    busy: bool,
    stats: ServiceStats,
}

impl LanguageService {
    /// 用注入的服务商和偏好存储构造控制器
    pub fn new(
        config: EngineConfig,
        provider: Arc<dyn TranslationProvider>,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            collector: TextCollector::new(&config),
            snapshots: SnapshotStore::new(),
            batcher: TranslationBatcher::new(provider, &config),
            observer: LiveObserver::new(),
            store,
            current_language: ORIGINAL_LANG.to_string(),
            busy: false,
            stats: ServiceStats::default(),
        }
    }

    /// 当前语言（纯内存读取）
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// 是否有翻译趟在途（宿主用它禁用语言控件）
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// 启动加载：偏好存储里有非原文语言时立即执行一趟翻译
    pub async fn startup(&mut self, root: &Handle) -> EngineResult<()> {
        match self.store.load() {
            Some(code) if code != ORIGINAL_LANG => {
                tracing::info!("启动时恢复语言偏好: {}", code);
                self.set_language(root, &code).await
            }
            _ => Ok(()),
        }
    }

    /// 切换界面语言
    ///
    /// 忙碌期间的调用被直接拒绝（不排队、不取消在途趟），
    /// 且不改变 `current_language`。
    pub async fn set_language(&mut self, root: &Handle, code: &str) -> EngineResult<()> {
        if self.busy {
            self.stats.requests_rejected += 1;
            tracing::warn!("翻译趟在途，拒绝切换到 {}", code);
            return Err(EngineError::Busy);
        }

        self.busy = true;
        self.observer.disarm();
        let started = Instant::now();

        if code == ORIGINAL_LANG {
            let restored = self.snapshots.restore_all();
            tracing::info!("恢复原文 {} 处，耗时 {:?}", restored, started.elapsed());
        } else {
            let units = self.collector.collect(root);
            self.snapshots.capture_if_empty(&units);

            // 重新翻译以快照里的原文为准，而不是树上当前（可能已翻译）的文本
            let originals = self.snapshots.unique_originals();
            self.stats.texts_collected += originals.len();

            let translations = self.batcher.translate(&originals, code).await;
            let applied = applier::apply(&self.snapshots, &translations);
            self.observer.arm();

            tracing::info!(
                "翻译趟完成: 语言 {}，{} 条文本，写入 {} 处，耗时 {:?}",
                code,
                originals.len(),
                applied,
                started.elapsed()
            );
        }

        if let Err(err) = self.store.save(code) {
            tracing::warn!("语言偏好保存失败: {}", err);
        }
        self.current_language = code.to_string();
        self.stats.passes_completed += 1;
        self.busy = false;

        Ok(())
    }

    /// 宿主插入新渲染内容后的通知入口
    ///
    /// 仅在观察者武装且无趟在途时生效：新内容以出现时的字符串记为
    /// 原文快照，随后翻译成当前语言。趟在途或原文语言下的通知被忽略。
    pub async fn content_added(&mut self, node: &Handle) {
        if self.busy || !self.observer.is_armed() || self.current_language == ORIGINAL_LANG {
            return;
        }

        let units = self.collector.collect(node);
        if units.is_empty() {
            return;
        }

        self.busy = true;
        let target = self.current_language.clone();

        let captured = self.snapshots.record_units(&units);
        let strings = TextCollector::unique_strings(&units);
        let translations = self.batcher.translate(&strings, &target).await;
        let applied = applier::apply(&self.snapshots, &translations);

        self.stats.live_updates += 1;
        self.busy = false;

        tracing::debug!(
            "增量翻译: 新快照 {} 处，{} 条文本，写入 {} 处",
            captured,
            strings.len(),
            applied
        );
    }

    /// 控制器统计
    pub fn stats(&self) -> ServiceStats {
        self.stats
    }

    /// 缓存统计
    pub fn cache_stats(&self) -> CacheStats {
        self.batcher.cache_stats()
    }

    /// 快照条目数
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}
