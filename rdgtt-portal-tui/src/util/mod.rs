//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与门户业务无关的代码：
//!     terminal.rs     // 终端初始化、恢复，以及 panic 时的兜底恢复
//!     logging.rs      // 日志写入文件（备用屏幕占用了 stdout）
//!
//! main.rs 中的顺序：
//!     init_logging()  →  init_terminal()  →  app::run()  →  restore_terminal()
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
