//! 应用主消息枚举

use rdgtt_portal_core::types::DashboardFeed;
use rdgtt_portal_core::CoreResult;

use super::{ContentMessage, NavigationMessage, OverlayMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 左侧菜单
    Navigation(NavigationMessage),

    /// 内容区
    Content(ContentMessage),

    /// 弹出菜单 / 输入框 / 帮助
    Overlay(OverlayMessage),

    /// 历史后退
    HistoryBack,

    /// 历史前进
    HistoryForward,

    /// 刷新看板数据
    Refresh,

    /// 后台刷新完成
    FeedLoaded(CoreResult<DashboardFeed>),

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
