//! 命令注册表
//!
//! 一张 `{token, summary, handler}` 记录表，分发、补全与帮助文本都由它派生。
//! 构造完成后不再增删条目。

use std::fmt;

use crate::response::Response;
use crate::shell::Shell;

/// 命令处理函数, 参数为 `cd <target>` 这类命令在命令词之后的空白分隔词
pub type Handler = fn(&Shell, &[&str]) -> Response;

/// 命令参数形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// 整行 (去空白, 转小写) 与命令词精确匹配
    None,
    /// 整行以 `<token> ` 开头, 后续词作为参数
    Args {
        /// 帮助表中的用法展示, 如 `cd <dir>`
        usage: &'static str,
    },
}

/// 命令记录
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// 小写命令词
    pub token: &'static str,
    /// 单行说明
    pub summary: &'static str,
    /// 参数形式
    pub arity: Arity,
    /// 处理函数
    pub handler: Handler,
}

impl CommandSpec {
    /// 创建无参数命令
    pub const fn new(token: &'static str, summary: &'static str, handler: Handler) -> Self {
        Self {
            token,
            summary,
            arity: Arity::None,
            handler,
        }
    }

    /// 改为带参数命令
    pub const fn with_args(mut self, usage: &'static str) -> Self {
        self.arity = Arity::Args { usage };
        self
    }

    pub fn takes_args(&self) -> bool {
        matches!(self.arity, Arity::Args { .. })
    }

    /// 帮助表中的展示形式
    pub fn usage(&self) -> &'static str {
        match self.arity {
            Arity::None => self.token,
            Arity::Args { usage } => usage,
        }
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("token", &self.token)
            .field("summary", &self.summary)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// 命令注册表
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// 两种宿主共享的基础命令集
    pub fn shared() -> Self {
        Self {
            commands: crate::builtin::SHARED.to_vec(),
        }
    }

    /// 追加宿主扩展命令, 排在已有命令之后
    pub fn extend(&mut self, specs: impl IntoIterator<Item = CommandSpec>) {
        for spec in specs {
            debug_assert_eq!(spec.token, spec.token.to_lowercase());
            self.commands.push(spec);
        }
    }

    /// 查找与整行精确匹配的无参数命令
    pub fn exact(&self, line: &str) -> Option<&CommandSpec> {
        self.commands
            .iter()
            .find(|spec| !spec.takes_args() && spec.token == line)
    }

    /// 查找以 `<token> ` 为前缀的带参数命令
    pub fn prefixed(&self, line: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| {
            spec.takes_args()
                && line
                    .strip_prefix(spec.token)
                    .is_some_and(|rest| rest.starts_with(' '))
        })
    }

    /// 按命令词查找第一条记录
    pub fn get(&self, token: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| spec.token == token)
    }

    /// 去重后的命令词, 保持注册顺序
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = Vec::with_capacity(self.commands.len());
        for spec in &self.commands {
            if !tokens.contains(&spec.token) {
                tokens.push(spec.token);
            }
        }
        tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
