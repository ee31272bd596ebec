//! macOS 窗口终端

use folio_core::ShellConfig;
use folio_shell::{Response, Terminal};

use crate::host::Host;
use crate::screen::{output_lines, Line, LineStyle, ScreenOp};

/// macOS 窗口终端, 只使用共享命令集
#[derive(Debug, Clone, Copy, Default)]
pub struct MacosHost;

impl MacosHost {
    fn echo(config: &ShellConfig, line: &str) -> ScreenOp {
        ScreenOp::Print(Line::prompt(format!(
            "{}@{} ~ % {line}",
            config.user, config.hostname
        )))
    }
}

impl Host for MacosHost {
    fn input_prompt(&self, config: &ShellConfig) -> String {
        format!("{}@{} ~ % ", config.user, config.hostname)
    }

    fn banner(&self, _: &Terminal) -> Vec<ScreenOp> {
        let today = chrono::Local::now().format("%a %b %d %Y");
        vec![ScreenOp::Print(Line::plain(format!(
            "Last login: {today} on console"
        )))]
    }

    fn submit(&self, terminal: &mut Terminal, raw: &str) -> Vec<ScreenOp> {
        let command = raw.trim();
        let mut ops = vec![Self::echo(terminal.shell().config(), command)];
        if command.is_empty() {
            return ops;
        }

        match terminal.submit(command) {
            Response::Clear => ops.push(ScreenOp::Clear),
            response => ops.extend(output_lines(&response.to_string(), LineStyle::Success)),
        }
        ops
    }

    fn complete(&self, terminal: &Terminal, raw: &str) -> Vec<ScreenOp> {
        let completion = terminal.complete(raw);
        let mut ops = vec![ScreenOp::SetInput(completion.completed)];

        if let (true, Some(suggestions)) = (completion.show_suggestions, completion.suggestions) {
            ops.push(Self::echo(terminal.shell().config(), raw));
            ops.push(ScreenOp::Print(Line::success(suggestions.join("  "))));
        }
        ops
    }
}
