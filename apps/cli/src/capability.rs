//! 系统侧的简历能力: 用系统默认程序打开, 复制到下载目录

use std::path::{Path, PathBuf};

use folio_core::FolioError;
use folio_shell::{ResumeDownloader, ResumeViewer};

/// 调用系统默认程序打开简历
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl ResumeViewer for SystemViewer {
    fn show(&self, resume: &Path) -> folio_core::Result<()> {
        if !resume.is_file() {
            return Err(FolioError::Viewer(format!(
                "{} does not exist",
                resume.display()
            )));
        }
        open::that(resume).map_err(|e| FolioError::Viewer(e.to_string()))
    }
}

/// 复制简历到指定目录
#[derive(Debug, Clone)]
pub struct DownloadDirectory {
    target: PathBuf,
}

impl DownloadDirectory {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// 用户下载目录, 取不到时退回主目录, 再退回当前目录
    pub fn user_default() -> Self {
        let target = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(target)
    }
}

impl ResumeDownloader for DownloadDirectory {
    fn download(&self, resume: &Path, file_name: &str) -> folio_core::Result<PathBuf> {
        std::fs::create_dir_all(&self.target)?;
        let destination = self.target.join(file_name);
        std::fs::copy(resume, &destination)?;
        tracing::info!("Resume copied to {}", destination.display());
        Ok(destination)
    }
}
