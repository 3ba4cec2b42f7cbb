//! Terminal setup and the interactive event loop

use std::io;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::info;

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::{render, UiLayout};
use crate::error::AppResult;

/// Runs the interactive calculator until the user quits
///
/// Once raw mode is on the terminal is restored on every path, including a
/// failed setup.
pub fn run() -> AppResult<()> {
    enable_raw_mode()?;
    with_restore(session, restore)
}

/// Runs `body`, then `restore` whatever `body` returned
///
/// An error from `body` takes precedence over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> AppResult<T>,
    restore: impl FnOnce() -> AppResult<()>,
) -> AppResult<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn session() -> AppResult<()> {
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("interactive session started");
    let result = run_app(&mut terminal);
    info!("interactive session ended");
    result
}

fn restore() -> AppResult<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> AppResult<()> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let area = terminal.draw(|f| render(&app, f))?.area;

        match event::read()? {
            Event::Key(key) => app.handle_key_action(input_handler.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.click(UiLayout::new(area).keypad, column, row),
            _ => {}
        }
    }

    Ok(())
}
