//! View 层：根据 `App` 绘制一帧
//!
//! layout.rs 固定外壳布局（顶栏 / 菜单 / 内容 / 状态栏），
//! components/ 是外壳的各个部件，pages/ 是挂载在内容区的视图。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
