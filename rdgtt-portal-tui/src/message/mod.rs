//! Message 层：事件被翻译成的消息
//!
//! - `AppMessage`: 顶层消息
//! - `NavigationMessage`: 左侧菜单
//! - `ContentMessage`: 内容区（按当前页面解释）
//! - `OverlayMessage`: 顶栏弹出菜单、跳转输入框、帮助

mod app;
mod content;
mod navigation;
mod overlay;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
pub use overlay::OverlayMessage;
