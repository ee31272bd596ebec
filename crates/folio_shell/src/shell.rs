//! 命令分发器
//!
//! 每个宿主构造一个 `Shell`: 内容文档、配置、命令表与可选能力在构造时注入,
//! 之后只读。

use std::path::PathBuf;

use folio_core::{ContentDocument, ShellConfig};

use crate::capability::{ResumeDownloader, ResumeViewer};
use crate::completion::{self, Completion};
use crate::directory::DIRECTORIES;
use crate::registry::{CommandSpec, Registry};
use crate::response::Response;

/// 命令分发器
pub struct Shell {
    registry: Registry,
    content: ContentDocument,
    config: ShellConfig,
    viewer: Option<Box<dyn ResumeViewer>>,
    downloader: Option<Box<dyn ResumeDownloader>>,
}

impl Shell {
    /// 以共享命令集创建
    pub fn new(content: ContentDocument, config: ShellConfig) -> Self {
        Self {
            registry: Registry::shared(),
            content,
            config,
            viewer: None,
            downloader: None,
        }
    }

    /// 追加宿主扩展命令
    pub fn with_extensions(mut self, extensions: impl IntoIterator<Item = CommandSpec>) -> Self {
        self.registry.extend(extensions);
        self
    }

    /// 注入简历查看器
    pub fn with_viewer(mut self, viewer: impl ResumeViewer + 'static) -> Self {
        self.viewer = Some(Box::new(viewer));
        self
    }

    /// 注入简历下载器
    pub fn with_downloader(mut self, downloader: impl ResumeDownloader + 'static) -> Self {
        self.downloader = Some(Box::new(downloader));
        self
    }

    /// 执行一行输入
    ///
    /// 无参数命令按去空白、转小写后的整行精确匹配; 带参数命令按 `<token> ` 前缀匹配,
    /// 参数取自原始大小写的输入。其余输入 (包括空行) 都是未知命令。
    pub fn execute(&self, input: &str) -> Response {
        let trimmed = input.trim();
        let line = trimmed.to_lowercase();

        if let Some(spec) = self.registry.exact(&line) {
            tracing::debug!(command = spec.token, "dispatch");
            return (spec.handler)(self, &[]);
        }

        if let Some(spec) = self.registry.prefixed(&line) {
            let args: Vec<&str> = trimmed.split_whitespace().skip(1).collect();
            tracing::debug!(command = spec.token, args = args.len(), "dispatch");
            return (spec.handler)(self, &args);
        }

        tracing::debug!(input, "command not found");
        Response::Unknown(input.to_string())
    }

    /// 对输入行做 Tab 补全
    pub fn complete(&self, input: &str) -> Completion {
        completion::complete(&self.registry.tokens(), &DIRECTORIES, input)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn content(&self) -> &ContentDocument {
        &self.content
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn rule_width(&self) -> usize {
        self.config.rule_width
    }

    pub fn viewer(&self) -> Option<&dyn ResumeViewer> {
        self.viewer.as_deref()
    }

    pub fn downloader(&self) -> Option<&dyn ResumeDownloader> {
        self.downloader.as_deref()
    }

    /// 简历文件的完整路径
    pub fn resume_path(&self) -> Option<PathBuf> {
        self.content
            .resume_file
            .as_deref()
            .map(|file| self.config.asset_path(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use folio_core::FolioError;

    fn shell() -> Shell {
        Shell::new(ContentDocument::sample(), ShellConfig::default())
    }

    #[derive(Clone, Default)]
    struct CountingViewer(Arc<AtomicUsize>);

    impl ResumeViewer for CountingViewer {
        fn show(&self, _: &Path) -> folio_core::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct BrokenViewer;

    impl ResumeViewer for BrokenViewer {
        fn show(&self, _: &Path) -> folio_core::Result<()> {
            Err(FolioError::Viewer("no display".to_string()))
        }
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let shell = shell();
        let expected = shell.execute("about");

        for input in ["About", "ABOUT", " about ", "\tabout\n"] {
            assert_eq!(shell.execute(input), expected);
        }
    }

    #[test]
    fn test_clear_returns_sentinel() {
        let shell = shell();

        for input in ["clear", " CLEAR ", "Clear"] {
            assert!(shell.execute(input).is_clear());
        }
    }

    #[test]
    fn test_unknown_and_empty_input() {
        let shell = shell();

        assert_eq!(shell.execute(""), Response::Unknown(String::new()));
        assert_eq!(shell.execute("about me"), Response::Unknown("about me".to_string()));
        assert_eq!(shell.execute("cd"), Response::Unknown("cd".to_string()));
        assert_eq!(shell.execute("Sudo ls"), Response::Unknown("Sudo ls".to_string()));
    }

    #[test]
    fn test_cd_args_keep_original_case() {
        let shell = shell();

        assert!(shell
            .execute("CD skills")
            .to_string()
            .starts_with("Changed to skills directory"));
        assert!(shell
            .execute("cd Skills")
            .to_string()
            .starts_with("cd: Skills: No such directory"));
    }

    #[test]
    fn test_fixed_identity_commands() {
        let shell = shell();

        assert_eq!(shell.execute("pwd"), Response::text("/Users/alex/portfolio"));
        assert_eq!(shell.execute("whoami"), Response::text("alex"));
    }

    #[test]
    fn test_resume_without_viewer_falls_back() {
        let out = shell().execute("resume").to_string();

        assert!(out.starts_with("Resume\n"));
        assert!(out.contains("📄 Resume is available for viewing and download."));
    }

    #[test]
    fn test_resume_with_viewer_opens_it() {
        let viewer = CountingViewer::default();
        let shell = shell().with_viewer(viewer.clone());

        assert_eq!(shell.execute("resume"), Response::text("Opening resume viewer..."));
        assert_eq!(viewer.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resume_viewer_failure_falls_back() {
        let shell = shell().with_viewer(BrokenViewer);
        assert!(shell.execute("resume").to_string().starts_with("Resume\n"));
    }

    #[test]
    fn test_resume_path_uses_asset_dir() {
        assert_eq!(
            shell().resume_path(),
            Some(Path::new("assets").join("Alex Morgan.pdf"))
        );
    }

    #[test]
    fn test_completion_covers_registry() {
        let shell = shell();

        assert_eq!(shell.complete("hel").completed, "help");
        assert_eq!(shell.complete("wh").completed, "whoami");

        let c = shell.complete("c");
        assert_eq!(
            c.suggestions,
            Some(vec!["contact".to_string(), "clear".to_string(), "cd".to_string()])
        );
    }
}
