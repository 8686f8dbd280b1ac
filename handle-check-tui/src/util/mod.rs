//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     mod terminal;       // 终端初始化和恢复（raw mode + 备用屏幕）
//!     mod logging;        // 日志写入文件（TUI 占用了 stdout，日志不能打印到终端）
//!

mod logging;
mod terminal;

pub use logging::{init_logging, LoggingGuard};
pub use terminal::{init_terminal, restore_terminal, Term};
