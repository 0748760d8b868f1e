//! 实时内容观察者状态机
//!
//! 非原文语言激活期间，宿主渲染层每插入一段新内容就调用
//! [`crate::service::LanguageService::content_added`]，让新内容
//! 走 收集 → 翻译 → 回写 的管道后再呈现给用户。
//!
//! 状态机很小：初始为 `Disarmed`；一次非原文翻译趟成功结束后进入
//! `Armed`；切回原文或新的全量翻译趟开始时回到 `Disarmed`——趟内
//! 的回写不应被误认为是用户内容，所以趟进行期间观察者必须解除。
//!
//! 已知风险：新发现的内容会以其出现时刻的字符串被记为原文。
//! 如果宿主送来的内容已经是目标语言（例如服务端本地化的字符串），
//! 快照会被错误填充，之后恢复原文时该内容无法还原。上游行为
//! 如此，这里不做防护。

/// 观察者状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverState {
    /// 未武装：忽略一切内容通知
    #[default]
    Disarmed,
    /// 已武装：新内容进入翻译管道
    Armed,
}

/// 实时内容观察者
#[derive(Debug, Default)]
pub struct LiveObserver {
    state: ObserverState,
}

impl LiveObserver {
    /// 创建处于未武装状态的观察者
    pub fn new() -> Self {
        Self::default()
    }

    /// 武装观察者（翻译趟成功结束时调用）
    pub fn arm(&mut self) {
        if self.state != ObserverState::Armed {
            tracing::debug!("观察者已武装");
        }
        self.state = ObserverState::Armed;
    }

    /// 解除观察者（切回原文或新趟开始时调用）
    pub fn disarm(&mut self) {
        if self.state != ObserverState::Disarmed {
            tracing::debug!("观察者已解除");
        }
        self.state = ObserverState::Disarmed;
    }

    /// 当前是否武装
    pub fn is_armed(&self) -> bool {
        self.state == ObserverState::Armed
    }

    /// 当前状态
    pub fn state(&self) -> ObserverState {
        self.state
    }
}
