//! Terminal session and event loop for dr.
//!
//! Handles setup/teardown of raw mode and the alternate screen, redraws,
//! and dispatch of key events to the app state.

use crate::app::{AppState, KeypressResult};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use std::io;

/// Scoped ownership of the terminal's raw mode and alternate screen.
///
/// Acquiring suspends line-buffered/echoing input and takes over the screen.
/// Dropping unconditionally restores the original mode, so every exit path
/// out of the session (quit, propagated error, unwind) releases the terminal.
pub struct TerminalSession;

impl TerminalSession {
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(TerminalSession)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Runs the interactive session: initial paint, then the blocking input loop.
///
/// Blocks until quit. The read is the sole suspension point; nothing else
/// can change state between key presses, so there is no poll timer.
///
/// Returns an std::io::Error if terminal setup or a redraw fails.
pub fn run_terminal(app: &mut AppState) -> io::Result<()> {
    let _session = TerminalSession::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    terminal.draw(|frame| ui::render(frame, app))?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_keypress(key) {
                    KeypressResult::Quit => break,
                    KeypressResult::Consumed => {
                        terminal.draw(|frame| ui::render(frame, app))?;
                    }
                    KeypressResult::Continue => {}
                }
            }

            Event::Resize(_, _) => {
                terminal.draw(|frame| ui::render(frame, app))?;
            }

            // Key releases and any unrecognized input event are no-ops.
            _ => {}
        }
    }
    Ok(())
}
