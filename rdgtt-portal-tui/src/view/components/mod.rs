//! 外壳部件

pub mod footer;
pub mod help;
pub mod popover;
pub mod prompt;
pub mod sidemenu;
pub mod topbar;
