//! # folio_core - Folio Core Primitives
//!
//! 核心原语层，定义内容文档、终端配置与全局错误处理机制。
//! 此 crate 是整个项目的基础依赖，不依赖其他业务 crate。

pub mod config;
pub mod content;
pub mod error;

pub use config::ShellConfig;
pub use content::{ContentDocument, Education, Experience};
pub use error::{FolioError, Result};
