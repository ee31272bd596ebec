//! Folio CLI - 作品集终端

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use folio_cli::capability::{DownloadDirectory, SystemViewer};
use folio_cli::{console, HostKind, Session};
use folio_core::{ContentDocument, ShellConfig};
use folio_shell::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio desktop terminal")]
struct Cli {
    /// 终端外壳
    #[arg(long, value_enum, default_value_t = HostKind::Linux)]
    host: HostKind,

    /// 内容文档 (JSON), 缺省使用内置示例
    #[arg(long, env = "FOLIO_CONTENT")]
    content: Option<PathBuf>,

    /// 终端配置 (JSON)
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// 日志文件, 缺省写到 stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let content = match &cli.content {
        Some(path) => ContentDocument::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => ContentDocument::sample(),
    };
    let config = match &cli.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ShellConfig::default(),
    };

    tracing::info!(host = ?cli.host, "Folio terminal starting");

    // macOS 窗口终端没有简历查看器
    let shell = match cli.host {
        HostKind::Linux => cli
            .host
            .shell(content, config)
            .with_viewer(SystemViewer)
            .with_downloader(DownloadDirectory::user_default()),
        HostKind::Macos => cli.host.shell(content, config),
    };

    let session = Session::new(Terminal::new(shell), cli.host.adapter());
    console::run(session).await
}
