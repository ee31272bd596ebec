//! 宿主注入的可选能力
//!
//! 引擎只通过这些接口触发副作用; 未注入时命令退化为纯文本输出。

use std::path::{Path, PathBuf};

/// 简历查看器
pub trait ResumeViewer: Send + Sync {
    /// 打开简历
    fn show(&self, resume: &Path) -> folio_core::Result<()>;
}

/// 简历下载器
pub trait ResumeDownloader: Send + Sync {
    /// 以 `file_name` 保存一份简历副本, 返回保存路径
    fn download(&self, resume: &Path, file_name: &str) -> folio_core::Result<PathBuf>;
}
