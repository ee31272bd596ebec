//! 终端会话: 宿主、引擎实例与当前输入行

use folio_shell::Terminal;

use crate::host::Host;
use crate::screen::ScreenOp;

/// 会话关心的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    Up,
    Down,
    Backspace,
    Char(char),
}

/// 终端会话
pub struct Session {
    terminal: Terminal,
    host: Box<dyn Host>,
    input: String,
}

impl Session {
    pub fn new(terminal: Terminal, host: Box<dyn Host>) -> Self {
        Self {
            terminal,
            host,
            input: String::new(),
        }
    }

    /// 启动时的欢迎输出
    pub fn banner(&self) -> Vec<ScreenOp> {
        self.host.banner(&self.terminal)
    }

    /// 处理一次按键, 返回需要执行的显示操作
    pub fn handle(&mut self, key: Key) -> Vec<ScreenOp> {
        let ops = match key {
            Key::Enter => {
                let raw = std::mem::take(&mut self.input);
                let mut ops = self.host.submit(&mut self.terminal, &raw);
                ops.push(ScreenOp::SetInput(String::new()));
                ops
            }
            Key::Tab => self.host.complete(&self.terminal, &self.input),
            Key::Up => {
                let previous = self.terminal.previous();
                if previous.is_empty() {
                    Vec::new()
                } else {
                    vec![ScreenOp::SetInput(previous)]
                }
            }
            Key::Down => vec![ScreenOp::SetInput(self.terminal.next())],
            Key::Backspace => {
                let mut input = self.input.clone();
                input.pop();
                vec![ScreenOp::SetInput(input)]
            }
            Key::Char(c) => vec![ScreenOp::SetInput(format!("{}{c}", self.input))],
        };

        for op in &ops {
            if let ScreenOp::SetInput(input) = op {
                self.input.clone_from(input);
            }
        }
        ops
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// 当前输入行的提示符
    pub fn prompt(&self) -> String {
        self.host.input_prompt(self.terminal.shell().config())
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }
}
