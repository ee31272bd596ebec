//! Tab 补全
//!
//! 单个词时在命令词中按前缀补全, `cd <前缀>` 时在目录名中补全。
//! 多个候选时补到最长公共前缀, 并把全部候选交给宿主展示。

/// 补全结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// 补全后的输入行
    pub completed: String,
    /// 是否需要展示候选
    pub show_suggestions: bool,
    /// 全部候选, 保持注册顺序
    pub suggestions: Option<Vec<String>>,
}

impl Completion {
    /// 输入保持不变
    pub fn unchanged(input: &str) -> Self {
        Self {
            completed: input.to_string(),
            show_suggestions: false,
            suggestions: None,
        }
    }
}

/// 对输入行做补全
pub fn complete(commands: &[&str], directories: &[&str], input: &str) -> Completion {
    let parts: Vec<&str> = input.split(' ').collect();

    match parts.as_slice() {
        [_] => {
            let needle = input.to_lowercase();
            resolve(commands, &needle, input, "")
        }
        ["cd", dir] => resolve(directories, dir, input, "cd "),
        _ => Completion::unchanged(input),
    }
}

fn resolve(candidates: &[&str], needle: &str, input: &str, lead: &str) -> Completion {
    let matches: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.starts_with(needle))
        .collect();

    tracing::trace!(input, matches = matches.len(), "completion");

    match matches.as_slice() {
        [] => Completion::unchanged(input),
        [only] => Completion {
            completed: format!("{lead}{only}"),
            show_suggestions: false,
            suggestions: None,
        },
        _ => {
            let prefix = common_prefix(&matches);
            let completed = if prefix.chars().count() > needle.chars().count() {
                format!("{lead}{prefix}")
            } else {
                input.to_string()
            };
            Completion {
                completed,
                show_suggestions: true,
                suggestions: Some(matches.iter().map(|m| m.to_string()).collect()),
            }
        }
    }
}

/// 最长公共前缀, 从第一个候选逐字符收缩; 可能为空
pub fn common_prefix(strings: &[&str]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix = first.to_string();
    for s in rest {
        while !s.starts_with(prefix.as_str()) {
            prefix.pop();
            if prefix.is_empty() {
                return prefix;
            }
        }
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DIRECTORIES;

    const COMMANDS: [&str; 6] = ["help", "about", "experience", "education", "clear", "cd"];

    #[test]
    fn test_single_match_completes() {
        let c = complete(&COMMANDS, &DIRECTORIES, "hel");

        assert_eq!(c.completed, "help");
        assert!(!c.show_suggestions);
        assert!(c.suggestions.is_none());
    }

    #[test]
    fn test_input_is_lowercased_for_matching() {
        assert_eq!(complete(&COMMANDS, &DIRECTORIES, "ABO").completed, "about");
    }

    #[test]
    fn test_multi_match_without_longer_prefix() {
        let c = complete(&COMMANDS, &DIRECTORIES, "e");

        assert_eq!(c.completed, "e");
        assert!(c.show_suggestions);
        assert_eq!(
            c.suggestions,
            Some(vec!["experience".to_string(), "education".to_string()])
        );
    }

    #[test]
    fn test_multi_match_extends_to_prefix() {
        let commands = ["theme", "thesis"];
        let c = complete(&commands, &DIRECTORIES, "t");

        assert_eq!(c.completed, "the");
        assert!(c.show_suggestions);
    }

    #[test]
    fn test_no_match_is_unchanged() {
        assert_eq!(
            complete(&COMMANDS, &DIRECTORIES, "zzz"),
            Completion::unchanged("zzz")
        );
    }

    #[test]
    fn test_cd_directory_completion() {
        let c = complete(&COMMANDS, &DIRECTORIES, "cd sk");
        assert_eq!(c.completed, "cd skills");
        assert!(!c.show_suggestions);

        let c = complete(&COMMANDS, &DIRECTORIES, "cd e");
        assert_eq!(c.completed, "cd e");
        assert_eq!(
            c.suggestions,
            Some(vec!["experience".to_string(), "education".to_string()])
        );

        let c = complete(&COMMANDS, &DIRECTORIES, "cd a");
        assert_eq!(c.completed, "cd a");
        assert_eq!(
            c.suggestions,
            Some(vec!["about".to_string(), "achievements".to_string()])
        );

        let c = complete(&COMMANDS, &DIRECTORIES, "cd ce");
        assert_eq!(c.completed, "cd certificates");
    }

    #[test]
    fn test_other_shapes_are_unchanged() {
        for input in ["cd about extra", "ls about", "cd  ab"] {
            assert_eq!(
                complete(&COMMANDS, &DIRECTORIES, input),
                Completion::unchanged(input)
            );
        }
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix(&["education", "experience"]), "e");
        assert_eq!(common_prefix(&["clear", "contact", "cd"]), "c");
        assert_eq!(common_prefix(&["about", "skills"]), "");
        assert_eq!(common_prefix(&["whoami"]), "whoami");
        assert_eq!(common_prefix(&[]), "");
    }
}
