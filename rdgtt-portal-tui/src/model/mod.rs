//! Model 层：应用状态
//!
//! 导航与语言两个状态单元由核心库的 `Shell` 持有，
//! 这里只保存纯界面状态（焦点、光标、弹层、看板数据、设置页）。

mod app;
mod dashboard;
mod focus;
mod overlay;
mod settings;

pub use app::App;
pub use dashboard::{DashboardState, QuickAction};
pub use focus::FocusPanel;
pub use overlay::Overlay;
pub use settings::{SettingItem, SettingsState};

#[cfg(test)]
pub use app::test_app;
