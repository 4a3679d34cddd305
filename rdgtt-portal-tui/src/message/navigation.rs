//! 左侧菜单消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 打开光标所在的菜单项
    Confirm,
}
