//! 覆盖层消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMessage {
    OpenProfile,
    OpenLanguage,
    OpenGoTo,

    SelectPrevious,
    SelectNext,
    /// 弹出菜单选中当前项，或提交跳转输入
    Confirm,
    /// 关闭一切覆盖层
    Close,

    // 跳转输入框
    Input(char),
    Backspace,
}
