//! crossterm 控制台
//!
//! 原始模式下逐个读取按键事件, 每个事件处理完毕后才读取下一个。

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use futures::StreamExt;

use crate::screen::{Line, LineStyle, ScreenOp};
use crate::session::{Key, Session};

/// 原始模式守卫, 离开作用域时恢复终端
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    }
}

/// 控制台输入的解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Quit,
}

/// 把 crossterm 按键映射为会话按键
pub fn translate(event: KeyEvent) -> Option<Input> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Input::Quit),
            _ => None,
        };
    }

    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(Input::Key(key))
}

fn print_line(out: &mut impl Write, line: &Line) -> io::Result<()> {
    let text = line.text.as_str();
    let styled = match line.style {
        LineStyle::Plain => text.stylize(),
        LineStyle::Prompt => text.bold(),
        LineStyle::Success => text.green(),
        LineStyle::Error => text.red(),
        LineStyle::Info => text.cyan(),
    };
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        PrintStyledContent(styled),
        Print("\r\n")
    )
}

/// 执行显示操作并重绘输入行
pub fn render(out: &mut impl Write, session: &Session, ops: &[ScreenOp]) -> io::Result<()> {
    for op in ops {
        match op {
            ScreenOp::Print(line) => print_line(out, line)?,
            ScreenOp::Clear => queue!(out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?,
            ScreenOp::SetInput(_) => {}
        }
    }
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        PrintStyledContent(session.prompt().bold()),
        Print(session.input())
    )?;
    out.flush()
}

/// 运行控制台直到 Ctrl+C / Ctrl+D 或输入流结束
pub async fn run(mut session: Session) -> anyhow::Result<()> {
    let _raw = RawMode::enable()?;
    let mut stdout = io::stdout();

    let banner = session.banner();
    render(&mut stdout, &session, &banner)?;

    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        let Event::Key(key) = event? else {
            continue;
        };
        match translate(key) {
            Some(Input::Quit) => break,
            Some(Input::Key(key)) => {
                let ops = session.handle(key);
                render(&mut stdout, &session, &ops)?;
            }
            None => {}
        }
    }

    execute!(stdout, Print("\r\n"))?;
    tracing::debug!(commands = session.terminal().history().len(), "console closed");
    Ok(())
}
