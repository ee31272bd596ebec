//! `cd` 目录切换
//!
//! 没有真实文件系统: 目标只能是固定的区块名, 切换即展示该区块。

use crate::response::Response;
use crate::shell::Shell;

/// 可作为 `cd` 目标的区块名
pub const DIRECTORIES: [&str; 8] = [
    "about",
    "experience",
    "education",
    "skills",
    "projects",
    "contact",
    "certificates",
    "achievements",
];

const HOME_MESSAGE: &str = "Changed to home directory";

/// 按顺序应用目录切换规则, 只看第一个参数
pub fn change_directory(shell: &Shell, args: &[&str]) -> Response {
    let Some(&original) = args.first() else {
        return Response::text(HOME_MESSAGE);
    };

    let target = original.strip_suffix('/').unwrap_or(original);

    if target == ".." || target == "~" {
        return Response::text(HOME_MESSAGE);
    }

    if DIRECTORIES.contains(&target) {
        let body = shell.execute(target);
        return Response::Text(format!("Changed to {target} directory\n\n{body}"));
    }

    Response::Text(format!(
        "cd: {original}: No such directory\nAvailable directories: {}",
        DIRECTORIES.join(", ")
    ))
}
