//! Event 层：终端事件 → 消息
//!
//! handler.rs 按优先级分发：跳转输入框 > 帮助 > 弹出菜单 > 全局快捷键 > 焦点面板。
//! keymap.rs 集中定义快捷键。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
