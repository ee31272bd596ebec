//! # folio_cli - Folio Terminal Hosts
//!
//! 把键盘事件接到命令引擎上的两种终端外壳 (Linux 全屏终端与 macOS 窗口终端),
//! 以及基于 crossterm 的控制台事件循环。

pub mod capability;
pub mod console;
pub mod host;
pub mod screen;
pub mod session;

pub use host::{Host, HostKind};
pub use screen::{Line, LineStyle, ScreenOp};
pub use session::{Key, Session};
