//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧菜单
    #[default]
    Menu,
    /// 右侧内容区
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Menu => Self::Content,
            Self::Content => Self::Menu,
        }
    }

    pub fn is_menu(self) -> bool {
        matches!(self, Self::Menu)
    }

    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}
