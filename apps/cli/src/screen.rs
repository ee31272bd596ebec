//! 显示操作
//!
//! 宿主不直接写终端, 而是产出一串显示操作交给控制台执行。

/// 行样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Prompt,
    Success,
    Error,
    Info,
}

/// 一行输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Plain)
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Prompt)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Error)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Info)
    }
}

/// 显示操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOp {
    /// 追加一行
    Print(Line),
    /// 擦除全部已有输出
    Clear,
    /// 替换输入行内容
    SetInput(String),
}

/// 按换行拆分命令输出, 丢弃空白行
pub fn output_lines(text: &str, style: LineStyle) -> Vec<ScreenOp> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| ScreenOp::Print(Line::new(line, style)))
        .collect()
}
