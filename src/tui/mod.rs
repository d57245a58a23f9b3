mod app;
mod event;
mod render;

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::Show;
use crossterm::event::{self as ct_event, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

use crate::store::TaskList;
pub use app::{App, Focus, Row};
pub use event::{handle_key, KeyAction};

/// Puts the terminal into raw mode on the alternate screen and restores it
/// on drop, so every exit path leaves the shell usable.
struct TerminalGuard<W: Write> {
    out: W,
}

impl TerminalGuard<io::Stdout> {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = TerminalGuard { out: io::stdout() };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

/// Run the interactive screen until the user quits. Returns the final list.
pub fn run(list: TaskList) -> Result<TaskList> {
    let mut app = App::new(list);

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_loop(&mut terminal, &mut app)?;
    Ok(app.list)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if let Event::Key(key) = ct_event::read()? {
            if key.kind == KeyEventKind::Press && handle_key(app, key) == KeyAction::Quit {
                log::debug!("screen: quit with {} tasks", app.list.tasks().len());
                return Ok(());
            }
        }
    }
}
