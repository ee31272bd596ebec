//! 终端引擎实例: 分发器加上各自独立的命令历史

use crate::completion::Completion;
use crate::history::History;
use crate::response::Response;
use crate::shell::Shell;

/// 每个宿主持有一个终端实例, 历史互不共享
pub struct Terminal {
    shell: Shell,
    history: History,
}

impl Terminal {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            history: History::new(),
        }
    }

    /// 记录并执行
    pub fn submit(&mut self, command: &str) -> Response {
        self.history.record(command);
        self.shell.execute(command)
    }

    pub fn complete(&self, input: &str) -> Completion {
        self.shell.complete(input)
    }

    /// 上一条历史
    pub fn previous(&mut self) -> String {
        self.history.previous().to_string()
    }

    /// 下一条历史
    pub fn next(&mut self) -> String {
        self.history.next().to_string()
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ContentDocument, ShellConfig};

    fn terminal() -> Terminal {
        Terminal::new(Shell::new(ContentDocument::sample(), ShellConfig::default()))
    }

    #[test]
    fn test_submit_records_history() {
        let mut terminal = terminal();

        assert!(terminal.submit("ABOUT").to_string().starts_with("About Alex Morgan"));
        assert!(terminal.submit("nope").is_unknown());
        assert_eq!(terminal.history().len(), 2);
        assert_eq!(terminal.previous(), "nope");
        assert_eq!(terminal.previous(), "ABOUT");
        assert_eq!(terminal.next(), "nope");
        assert_eq!(terminal.next(), "");
    }

    #[test]
    fn test_instances_have_isolated_history() {
        let mut first = terminal();
        let mut second = terminal();

        first.submit("skills");
        assert_eq!(second.previous(), "");
        assert!(second.history().is_empty());
        assert_eq!(first.previous(), "skills");
    }
}
