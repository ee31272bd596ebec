//! # folio_shell - Folio Command Engine
//!
//! 作品集终端的命令引擎: 固定命令表的分发、区块渲染、`cd` 目录切换、
//! Tab 补全与命令历史。引擎只返回文本, 从不直接操作显示。

pub mod builtin;
pub mod capability;
pub mod completion;
pub mod directory;
pub mod history;
pub mod registry;
pub mod render;
pub mod response;
pub mod shell;
pub mod suggest;
pub mod terminal;

pub use capability::{ResumeDownloader, ResumeViewer};
pub use completion::Completion;
pub use directory::DIRECTORIES;
pub use history::History;
pub use registry::{Arity, CommandSpec, Handler, Registry};
pub use response::{Response, CLEAR_SENTINEL};
pub use shell::Shell;
pub use terminal::Terminal;
