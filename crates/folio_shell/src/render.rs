//! 区块渲染器
//!
//! 每个区块固定为 `标题 \n 分隔线 \n 空行 \n 正文 \n 分隔线`。
//! 多条记录之间插入细分隔线, 最后一条之后不插。
//! 所有渲染器都是内容文档的纯函数。

use folio_core::{ContentDocument, Education, Experience};

use crate::registry::{CommandSpec, Registry};

/// 粗分隔线
pub fn heavy_rule(width: usize) -> String {
    "═".repeat(width)
}

/// 记录之间的细分隔线
pub fn light_rule(width: usize) -> String {
    "-".repeat(width)
}

fn frame(title: &str, body: &str, width: usize) -> String {
    let rule = heavy_rule(width);
    format!("{title}\n{rule}\n\n{body}\n{rule}")
}

fn bulleted(items: &[String], icon: &str) -> String {
    items.iter().map(|item| format!("{icon} {item}\n")).collect()
}

fn records<T>(items: &[T], width: usize, render: impl Fn(&T) -> String) -> String {
    let separator = format!("\n{}\n\n", light_rule(width));
    items.iter().map(render).collect::<Vec<_>>().join(&separator)
}

/// 帮助表, 由注册表派生
///
/// 同一命令词注册了多次时只保留一行, 位置取第一次出现处, 内容优先取带参数的记录。
pub fn help(registry: &Registry) -> String {
    let mut entries: Vec<&CommandSpec> = Vec::new();
    for spec in registry.iter() {
        match entries.iter_mut().find(|kept| kept.token == spec.token) {
            Some(kept) if spec.takes_args() && !kept.takes_args() => *kept = spec,
            Some(_) => {}
            None => entries.push(spec),
        }
    }
    let rows: Vec<(&str, &str)> = entries
        .iter()
        .map(|spec| (spec.usage(), spec.summary))
        .collect();

    let left = rows
        .iter()
        .map(|(usage, _)| usage.chars().count())
        .chain(["Command".len(), 11])
        .max()
        .unwrap_or(11);
    let right = rows
        .iter()
        .map(|(_, summary)| summary.chars().count())
        .chain(["Description".len(), 32])
        .max()
        .unwrap_or(32);

    let bar = |l: &str, m: &str, r: &str| {
        format!("{l}{}{m}{}{r}", "─".repeat(left + 2), "─".repeat(right + 2))
    };

    let mut lines = vec![
        "Available commands:".to_string(),
        bar("┌", "┬", "┐"),
        format!("│ {:<left$} │ {:<right$} │", "Command", "Description"),
        bar("├", "┼", "┤"),
    ];
    for (usage, summary) in rows {
        lines.push(format!("│ {usage:<left$} │ {summary:<right$} │"));
    }
    lines.push(bar("└", "┴", "┘"));
    lines.join("\n")
}

pub fn about(doc: &ContentDocument, width: usize) -> String {
    let Some(name) = doc.name.as_deref() else {
        return "About information not available".to_string();
    };
    let title = doc.title.as_deref().unwrap_or_default();
    let bio = doc.bio.as_deref().unwrap_or_default();
    frame(
        &format!("About {name}"),
        &format!("👨‍💻 {title}\n\n{bio}\n"),
        width,
    )
}

pub fn skills(doc: &ContentDocument, width: usize) -> String {
    match &doc.skills {
        Some(skills) => frame("Technical Skills", &bulleted(skills, "🔧"), width),
        None => "Skills data not available".to_string(),
    }
}

fn experience_record(exp: &Experience) -> String {
    let mut out = format!(
        "💼 {} | {}\n📅 {} | 📍 {}\n\n",
        exp.company, exp.position, exp.period, exp.location
    );
    for line in &exp.description {
        out.push_str(&format!("   • {line}\n"));
    }
    out
}

pub fn experience(doc: &ContentDocument, width: usize) -> String {
    match &doc.experience {
        Some(items) => frame(
            "Work Experience",
            &records(items, width, experience_record),
            width,
        ),
        None => "Experience data not available".to_string(),
    }
}

fn education_record(edu: &Education) -> String {
    format!(
        "🎓 {}\n📚 {}\n📅 {} | 🏛️ {}\n📊 {}\n",
        edu.institution, edu.degree, edu.period, edu.university, edu.grade
    )
}

pub fn education(doc: &ContentDocument, width: usize) -> String {
    match &doc.education {
        Some(items) => frame("Education", &records(items, width, education_record), width),
        None => "Education data not available".to_string(),
    }
}

pub fn projects(doc: &ContentDocument, width: usize) -> String {
    match &doc.projects {
        Some(projects) => frame("Portfolio Projects", &bulleted(projects, "🚀"), width),
        None => "Projects data not available".to_string(),
    }
}

pub fn contact(doc: &ContentDocument, width: usize) -> String {
    match &doc.contact {
        Some(lines) => {
            let body = format!(
                "{}\n💬 Let's connect and discuss opportunities!",
                bulleted(lines, "📞")
            );
            frame("Contact Information", &body, width)
        }
        None => "Contact data not available".to_string(),
    }
}

pub fn certificates(doc: &ContentDocument, width: usize) -> String {
    match &doc.certificates {
        Some(items) => frame("Certificates", &bulleted(items, "🏆"), width),
        None => "Certificates data not available".to_string(),
    }
}

pub fn achievements(doc: &ContentDocument, width: usize) -> String {
    match &doc.achievements {
        Some(items) => frame("Achievements", &bulleted(items, "🏅"), width),
        None => "Achievements data not available".to_string(),
    }
}

/// 无查看器时的简历说明
pub fn resume_fallback(width: usize) -> String {
    frame(
        "Resume",
        "📄 Resume is available for viewing and download.\n\
         \n\
         Commands:\n\
         • Type 'experience' to view work history\n\
         • Type 'education' to view educational background  \n\
         • Type 'skills' to view technical skills\n\
         • Type 'contact' to view contact information\n\
         \n\
         💡 Tip: Click on Resume.pdf icon to open in viewer",
        width,
    )
}

pub fn directory_listing() -> String {
    [
        "Available sections:",
        "about/         education/      projects/",
        "contact/       experience/     skills/",
        "certificates/  achievements/   resume.pdf",
    ]
    .join("\n")
}

pub fn theme(width: usize) -> String {
    frame(
        "Theme System",
        "🌙 Current theme: Auto-detected based on system preference\n\
         🔄 Synchronized across Linux and macOS interfaces\n\
         🎨 Supports both dark and light modes\n\
         \n\
         Toggle theme using the theme button in the menu bar.",
        width,
    )
}
