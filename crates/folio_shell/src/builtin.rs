//! 共享命令集

use crate::directory;
use crate::registry::CommandSpec;
use crate::render;
use crate::response::Response;
use crate::shell::Shell;

/// JavaScript `Date.toString()` 风格的时间格式
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// 两种宿主共享的命令, 按注册顺序参与补全
pub const SHARED: [CommandSpec; 15] = [
    CommandSpec::new("help", "Show this help message", help),
    CommandSpec::new("about", "About me", about),
    CommandSpec::new("skills", "Technical skills", skills),
    CommandSpec::new("experience", "Work experience", experience),
    CommandSpec::new("education", "Educational background", education),
    CommandSpec::new("projects", "Portfolio projects", projects),
    CommandSpec::new("contact", "Contact information", contact),
    CommandSpec::new("resume", "View/download resume", resume),
    CommandSpec::new("clear", "Clear terminal", clear),
    CommandSpec::new("ls", "List directory contents", ls),
    CommandSpec::new("pwd", "Print working directory", pwd),
    CommandSpec::new("whoami", "Current user", whoami),
    CommandSpec::new("date", "Current date and time", date),
    CommandSpec::new("theme", "Theme information", theme),
    CommandSpec::new("cd", "Change directory", cd).with_args("cd <dir>"),
];

fn help(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::help(shell.registry()))
}

fn about(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::about(shell.content(), shell.rule_width()))
}

fn skills(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::skills(shell.content(), shell.rule_width()))
}

fn experience(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::experience(shell.content(), shell.rule_width()))
}

fn education(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::education(shell.content(), shell.rule_width()))
}

fn projects(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::projects(shell.content(), shell.rule_width()))
}

fn contact(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::contact(shell.content(), shell.rule_width()))
}

fn resume(shell: &Shell, _: &[&str]) -> Response {
    if let (Some(viewer), Some(path)) = (shell.viewer(), shell.resume_path()) {
        match viewer.show(&path) {
            Ok(()) => return Response::text("Opening resume viewer..."),
            Err(e) => tracing::warn!("Resume viewer failed for {}: {e}", path.display()),
        }
    }
    Response::Text(render::resume_fallback(shell.rule_width()))
}

fn clear(_: &Shell, _: &[&str]) -> Response {
    Response::Clear
}

fn ls(_: &Shell, _: &[&str]) -> Response {
    Response::Text(render::directory_listing())
}

fn pwd(shell: &Shell, _: &[&str]) -> Response {
    Response::text(shell.config().home.clone())
}

fn whoami(shell: &Shell, _: &[&str]) -> Response {
    Response::text(shell.config().user.clone())
}

fn date(_: &Shell, _: &[&str]) -> Response {
    Response::Text(chrono::Local::now().format(DATE_FORMAT).to_string())
}

fn theme(shell: &Shell, _: &[&str]) -> Response {
    Response::Text(render::theme(shell.rule_width()))
}

fn cd(shell: &Shell, args: &[&str]) -> Response {
    directory::change_directory(shell, args)
}
