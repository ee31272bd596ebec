//! 命令响应

use std::fmt;

/// 清屏哨兵的文本形式
pub const CLEAR_SENTINEL: &str = "CLEAR_TERMINAL";

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// 多行文本输出
    Text(String),
    /// 清屏哨兵, 由宿主负责擦除已有输出
    Clear,
    /// 未识别的命令, 保存原始输入
    Unknown(String),
}

impl Response {
    pub fn text(text: impl Into<String>) -> Self {
        Response::Text(text.into())
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Response::Clear)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Response::Unknown(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Text(text) => f.write_str(text),
            Response::Clear => f.write_str(CLEAR_SENTINEL),
            Response::Unknown(input) => write!(
                f,
                "Command not found: {input}. Type 'help' for available commands."
            ),
        }
    }
}
