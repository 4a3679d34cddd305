//! 挂载在内容区的页面

pub mod dashboard;
pub mod not_found;
pub mod placeholder;
pub mod settings;
