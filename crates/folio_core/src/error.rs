//! 全局错误处理机制

use thiserror::Error;

/// Folio 统一错误类型
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Viewer error: {0}")]
    Viewer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 统一 Result 类型别名
pub type Result<T> = std::result::Result<T, FolioError>;
