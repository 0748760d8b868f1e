//! 统一错误处理
//!
//! 引擎的设计原则是永远给宿主留下可读的界面：单块翻译失败只回退原文，
//! 不会中断整个翻译流程。真正向调用方暴露的错误只有并发拒绝和存储失败。

use thiserror::Error;

/// 翻译引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 已有翻译任务进行中，本次请求被拒绝（不排队，由调用方自行重试）
    #[error("翻译任务进行中，请求被拒绝")]
    Busy,

    /// 网络错误
    #[error("网络错误: {0}")]
    Network(String),

    /// 请求超时
    #[error("请求超时: {0}")]
    Timeout(String),

    /// 服务商响应格式无效
    #[error("响应格式无效: {0}")]
    MalformedResponse(String),

    /// 偏好存储错误
    #[error("偏好存储错误: {0}")]
    Storage(String),
}

/// 翻译操作的结果类型
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// 是否属于单块可恢复的错误（回退原文后流程继续）
    pub fn is_chunk_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::Network(_) | EngineError::Timeout(_) | EngineError::MalformedResponse(_)
        )
    }
}
