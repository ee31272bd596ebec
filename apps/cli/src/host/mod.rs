//! 终端宿主
//!
//! 两种外壳共享同一套命令引擎, 各自决定提示符、输出样式和扩展命令。

pub mod linux;
pub mod macos;

use folio_core::{ContentDocument, ShellConfig};
use folio_shell::{CommandSpec, Shell, Terminal};

use crate::screen::ScreenOp;

pub use linux::LinuxHost;
pub use macos::MacosHost;

/// 终端宿主接口
pub trait Host: Send {
    /// 输入行前显示的提示符
    fn input_prompt(&self, config: &ShellConfig) -> String;

    /// 启动时的欢迎输出
    fn banner(&self, terminal: &Terminal) -> Vec<ScreenOp>;

    /// 回车提交一行输入
    fn submit(&self, terminal: &mut Terminal, raw: &str) -> Vec<ScreenOp>;

    /// Tab 补全
    fn complete(&self, terminal: &Terminal, raw: &str) -> Vec<ScreenOp>;
}

/// 宿主类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HostKind {
    /// 全屏 Linux 终端
    Linux,
    /// macOS 窗口终端
    Macos,
}

impl HostKind {
    /// 追加在共享命令集之后的扩展命令
    pub fn extensions(self) -> Vec<CommandSpec> {
        match self {
            HostKind::Linux => linux::EXTENSIONS.to_vec(),
            HostKind::Macos => Vec::new(),
        }
    }

    /// 构造该宿主的分发器 (不含外部能力)
    pub fn shell(self, content: ContentDocument, config: ShellConfig) -> Shell {
        Shell::new(content, config).with_extensions(self.extensions())
    }

    /// 创建宿主
    pub fn adapter(self) -> Box<dyn Host> {
        match self {
            HostKind::Linux => Box::new(LinuxHost),
            HostKind::Macos => Box::new(MacosHost),
        }
    }
}
