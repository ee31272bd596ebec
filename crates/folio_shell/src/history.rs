//! 命令历史
//!
//! 只与上一条去重。游标取值 `[0, len]`, `len` 表示未在浏览历史。

/// 历史缓冲区
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// 创建空历史
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条命令; 空白命令或与上一条相同的命令不入列, 游标总是回到末尾
    pub fn record(&mut self, command: &str) {
        let is_repeat = self.entries.last().is_some_and(|last| last == command);
        if !command.trim().is_empty() && !is_repeat {
            self.entries.push(command.to_string());
        }
        self.cursor = self.entries.len();
    }

    /// 向更早的命令移动
    pub fn previous(&mut self) -> &str {
        if self.cursor > 0 {
            self.cursor -= 1;
            tracing::trace!(cursor = self.cursor, "history previous");
            return &self.entries[self.cursor];
        }
        ""
    }

    /// 向更新的命令移动, 越过最新一条后回到空白输入
    pub fn next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            tracing::trace!(cursor = self.cursor, "history next");
            return &self.entries[self.cursor];
        }
        self.cursor = self.entries.len();
        ""
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
