//! Linux 全屏终端
//!
//! 在共享命令集之上增加 `main`、`neofetch`、`download`、`certificates`、
//! `achievements`、`help [command]` 与不带参数的 `cd`, 未知命令时给出相近命令提示。

use chrono::Datelike;
use folio_core::ShellConfig;
use folio_shell::{directory, render};
use folio_shell::suggest::suggestions;
use folio_shell::{CommandSpec, Response, Shell, Terminal};

use crate::host::Host;
use crate::screen::{output_lines, Line, LineStyle, ScreenOp};

const RESUME_MISSING: &str = "Resume file not found. Please add resume.pdf to the project folder.";

/// Linux 宿主的扩展命令
pub const EXTENSIONS: [CommandSpec; 7] = [
    CommandSpec::new("certificates", "Certificates and courses", certificates),
    CommandSpec::new("achievements", "Awards and achievements", achievements),
    CommandSpec::new("main", "Show main menu", main_menu),
    CommandSpec::new("neofetch", "System information", neofetch),
    CommandSpec::new("download", "Download resume PDF", download),
    CommandSpec::new("help", "Show help for a specific command", manual).with_args("help [command]"),
    // 不带参数的 `cd` 回到主目录
    CommandSpec::new("cd", "Change to home directory", home),
];

/// 相近命令提示的候选顺序
const SUGGESTION_ORDER: [&str; 19] = [
    "help",
    "about",
    "experience",
    "education",
    "skills",
    "projects",
    "contact",
    "certificates",
    "achievements",
    "clear",
    "main",
    "ls",
    "whoami",
    "pwd",
    "date",
    "neofetch",
    "cd",
    "resume",
    "download",
];

const LOGO: [&str; 19] = [
    "                     .,,.",
    "                   .,;;;;;,.",
    "                 .,;;;;;;;;,.",
    "               .;;;;;;;;;;;;;,",
    "              ;;;;;;;;;;;;;;;;,",
    "             ;;;;;;;;;;;;;;;;;",
    "            .;;;;;;;;;;;;;;;;;",
    "           .;;;;;;;;;;;;;;;;;.",
    "          .;;;;;;;;;;;;;;;;;",
    "         .;;;;;;;;;;;;;;;;",
    "        .;;;;;;;;;;;;;;;",
    "       .;;;;;;;;;;;;;;",
    "      .;;;;;;;;;;;;;",
    "     .;;;;;;;;;;;",
    "    .;;;;;;;;;",
    "   .;;;;;;;",
    "  .;;;;;",
    " .;;;",
    ".;",
];

fn certificates(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::certificates(shell.content(), shell.rule_width()))
}

fn achievements(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::achievements(shell.content(), shell.rule_width()))
}

fn main_menu(_: &Shell, _: &[&str]) -> Response {
    Response::Text(
        [
            "=== MAIN MENU ===",
            "",
            "Welcome to my interactive portfolio!",
            "",
            "Quick Navigation:",
            "  → Type 'about' to learn about me",
            "  → Type 'experience' for work history",
            "  → Type 'education' for academic background",
            "  → Type 'skills' for technical expertise",
            "  → Type 'projects' to see my work",
            "  → Type 'contact' to get in touch",
            "",
            "Type any command to explore!",
        ]
        .join("\n"),
    )
}

fn display_name(shell: &Shell) -> &str {
    shell
        .content()
        .name
        .as_deref()
        .unwrap_or(shell.config().user.as_str())
}

fn neofetch(shell: &Shell, _: &[&str]) -> Response {
    let mut lines: Vec<String> = LOGO.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());
    lines.push(format!("OS: Parrot Security {}", chrono::Local::now().year()));
    lines.push("Host: Portfolio Terminal".to_string());
    lines.push(format!("User: {}", display_name(shell)));
    lines.push("Shell: portfolio-shell".to_string());
    lines.push("Terminal: folio".to_string());
    lines.push("CPU: Rust Engine".to_string());
    lines.push("Memory: Unlimited".to_string());
    Response::Text(lines.join("\n"))
}

fn download(shell: &Shell, _: &[&str]) -> Response {
    let Some(resume) = shell.resume_path() else {
        return Response::text(RESUME_MISSING);
    };
    let Some(downloader) = shell.downloader() else {
        return Response::text("Resume download is not available in this terminal.");
    };

    let name = display_name(shell);
    let file_name = format!("{}_Resume.pdf", name.replacen(' ', "_", 1));
    match downloader.download(&resume, &file_name) {
        Ok(saved) => Response::Text(format!(
            "Downloading {name}'s resume...\nSaved to {}",
            saved.display()
        )),
        Err(e) => {
            tracing::warn!("Resume download failed for {}: {e}", resume.display());
            Response::Text(format!("Failed to download resume: {e}"))
        }
    }
}

fn home(shell: &Shell, _: &[&str]) -> Response {
    directory::change_directory(shell, &[])
}

fn manual(shell: &Shell, args: &[&str]) -> Response {
    let topic = args.first().map(|a| a.to_lowercase()).unwrap_or_default();
    match shell.registry().get(&topic) {
        Some(spec) => Response::Text(format!("{} - {}", spec.token, spec.summary)),
        None => Response::Text(format!("No manual entry for {topic}")),
    }
}

/// Linux 全屏终端
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxHost;

impl LinuxHost {
    fn title(config: &ShellConfig) -> String {
        format!("┌──(user㉿{})-[~/{}]", config.user, config.directory)
    }

    /// 标题行常驻在输入行上方, 回显只补上 `└─$` 这一行
    fn echo(line: &str) -> ScreenOp {
        ScreenOp::Print(Line::prompt(format!("└─$ {line}")))
    }

    fn next_title(terminal: &Terminal) -> ScreenOp {
        ScreenOp::Print(Line::prompt(Self::title(terminal.shell().config())))
    }

    fn not_found(raw: &str) -> Vec<ScreenOp> {
        let first = raw
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let similar = suggestions(&SUGGESTION_ORDER, &first);

        let mut ops = vec![ScreenOp::Print(Line::error(format!("Command not found: {raw}")))];
        if !similar.is_empty() {
            ops.push(ScreenOp::Print(Line::info(format!(
                "Did you mean: {}?",
                similar.join(", ")
            ))));
        }
        ops.push(ScreenOp::Print(Line::info("Type 'help' for available commands.")));
        ops.push(ScreenOp::Print(Line::plain("")));
        ops
    }
}

impl Host for LinuxHost {
    fn input_prompt(&self, _: &ShellConfig) -> String {
        "└─$ ".to_string()
    }

    fn banner(&self, terminal: &Terminal) -> Vec<ScreenOp> {
        vec![
            ScreenOp::Print(Line::info(
                "Type 'help' to see available commands or 'main' for the menu.",
            )),
            Self::next_title(terminal),
        ]
    }

    fn submit(&self, terminal: &mut Terminal, raw: &str) -> Vec<ScreenOp> {
        let mut ops = vec![Self::echo(raw)];

        if !raw.trim().is_empty() {
            match terminal.submit(raw) {
                Response::Clear => ops.push(ScreenOp::Clear),
                Response::Text(text) => ops.extend(output_lines(&text, LineStyle::Success)),
                Response::Unknown(input) => ops.extend(Self::not_found(&input)),
            }
        }
        ops.push(Self::next_title(terminal));
        ops
    }

    /// 整行转小写后补全, 未能补全时保留原输入
    fn complete(&self, terminal: &Terminal, raw: &str) -> Vec<ScreenOp> {
        let lowered = raw.to_lowercase();
        let completion = terminal.complete(&lowered);
        let extended = completion.completed != lowered;
        let input = if extended {
            completion.completed
        } else {
            raw.to_string()
        };
        let mut ops = vec![ScreenOp::SetInput(input)];

        if let (true, false, Some(suggestions)) =
            (completion.show_suggestions, extended, completion.suggestions)
        {
            ops.push(Self::echo(&lowered));
            ops.push(ScreenOp::Print(Line::info(suggestions.join("  "))));
            ops.push(ScreenOp::Print(Line::plain("")));
            ops.push(Self::next_title(terminal));
        }
        ops
    }
}
