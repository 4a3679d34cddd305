//! 内容区消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    Confirm,

    // 设置页面：切换选项值
    TogglePrev,
    ToggleNext,
}
