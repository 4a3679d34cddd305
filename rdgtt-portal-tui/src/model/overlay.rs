//! 覆盖在页面之上的输入层
//!
//! 顶栏弹出菜单由 `Shell` 的状态机管理，不在这里。

/// 当前覆盖层
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// "跳转到" 路径输入框
    GoTo { input: String },
    /// 快捷键帮助
    Help,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
