use folio_core::{ContentDocument, ShellConfig};
use folio_shell::builtin::DATE_FORMAT;
use folio_shell::render;
use folio_shell::{Response, Shell, Terminal, DIRECTORIES};
use pretty_assertions::assert_eq;

fn shell() -> Shell {
    Shell::new(ContentDocument::sample(), ShellConfig::default())
}

const SECTIONS: [&str; 12] = [
    "help",
    "about",
    "skills",
    "experience",
    "education",
    "projects",
    "contact",
    "resume",
    "ls",
    "pwd",
    "whoami",
    "theme",
];

#[test]
fn test_every_shared_command_is_case_insensitive() {
    let shell = shell();

    for command in SECTIONS.iter().chain(["clear", "date"].iter()) {
        let lower = shell.execute(command);
        assert!(!lower.is_unknown(), "{command} should be recognized");

        let upper = shell.execute(&format!("  {}  ", command.to_uppercase()));
        if *command == "date" {
            assert!(matches!(upper, Response::Text(_)));
        } else {
            assert_eq!(upper, lower, "{command}");
        }
    }
}

#[test]
fn test_renderers_are_pure() {
    let shell = shell();

    for command in SECTIONS {
        assert_eq!(shell.execute(command), shell.execute(command), "{command}");
    }
}

#[test]
fn test_date_matches_structurally() {
    let shell = shell();

    let first = shell.execute("date").to_string();
    let second = shell.execute("date").to_string();
    assert_eq!(first.lines().count(), 1);
    assert_eq!(first.lines().count(), second.lines().count());
    assert!(first.contains(" GMT"));
    assert!(chrono::DateTime::parse_from_str(&first, DATE_FORMAT).is_ok());
}

#[test]
fn test_cd_shows_section_body() {
    let shell = shell();

    let direct = shell.execute("education").to_string();
    let via_cd = shell.execute("cd education").to_string();
    assert_eq!(via_cd, format!("Changed to education directory\n\n{direct}"));

    let via_slash = shell.execute("cd education/").to_string();
    assert_eq!(via_slash, via_cd);
}

#[test]
fn test_cd_unknown_enumerates_directories() {
    let out = shell().execute("cd nosuchdir").to_string();

    assert!(out.contains("cd: nosuchdir: No such directory"));
    for dir in DIRECTORIES {
        assert!(out.contains(dir), "{dir} missing from {out}");
    }
}

#[test]
fn test_unknown_command_message() {
    assert_eq!(
        shell().execute("Hello World").to_string(),
        "Command not found: Hello World. Type 'help' for available commands."
    );
}

#[test]
fn test_experience_matches_sample() {
    let shell = shell();
    let out = shell.execute("experience").to_string();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Work Experience");
    assert_eq!(lines[1], render::heavy_rule(80));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "💼 Northwind Mapping | Software Engineer II");
    assert_eq!(lines[4], "📅 Oct 2024 – Present | 📍 Lisbon, PT");
    assert_eq!(lines.last(), Some(&render::heavy_rule(80).as_str()));
    // 三条记录之间两条细分隔线
    assert_eq!(
        lines.iter().filter(|l| **l == render::light_rule(80)).count(),
        2
    );
}

#[test]
fn test_sparse_document_degrades_per_section() {
    let content = ContentDocument::from_json(r#"{"name": "Sam", "skills": "oops"}"#).unwrap();
    let shell = Shell::new(content, ShellConfig::default());

    assert!(shell.execute("about").to_string().starts_with("About Sam"));
    assert_eq!(shell.execute("skills"), Response::text("Skills data not available"));
    assert_eq!(
        shell.execute("cd projects").to_string(),
        "Changed to projects directory\n\nProjects data not available"
    );
}

#[test]
fn test_history_walks_like_a_shell() {
    let mut terminal = Terminal::new(shell());
    for command in ["about", "skills", "about"] {
        terminal.submit(command);
    }

    assert_eq!(terminal.previous(), "about");
    assert_eq!(terminal.previous(), "skills");
    assert_eq!(terminal.previous(), "about");
    assert_eq!(terminal.previous(), "");

    let mut terminal = Terminal::new(shell());
    terminal.submit("about");
    terminal.submit("about");
    assert_eq!(terminal.history().len(), 1);
    assert_eq!(terminal.next(), "");
    assert_eq!(terminal.history().cursor(), 1);
}

#[test]
fn test_completion_examples() {
    let shell = shell();

    let single = shell.complete("hel");
    assert_eq!(single.completed, "help");
    assert!(!single.show_suggestions);

    let multi = shell.complete("e");
    assert_eq!(multi.completed, "e");
    assert!(multi.show_suggestions);
    assert_eq!(
        multi.suggestions,
        Some(vec!["experience".to_string(), "education".to_string()])
    );

    assert_eq!(shell.complete("cd pro").completed, "cd projects");
}
