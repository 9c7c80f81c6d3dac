//! Application state and keypress handling for dr.
//!
//! Holds the loaded [Snapshot](crate::core::Snapshot) and the cursor over it,
//! and maps key events to navigation or termination.

pub mod nav;

use crate::app::nav::NavState;
use crate::core::Snapshot;

use crossterm::event::{KeyCode, KeyEvent};

/// Outcome of a single processed keypress.
pub enum KeypressResult {
    /// Nothing changed; no redraw needed.
    Continue,
    /// State changed; the caller redraws.
    Consumed,
    Quit,
}

/// Every action the browser can perform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Quit,
}

/// Looks up the action for a key event.
///
/// Fixed bindings: arrow keys plus `k`/`j` for movement, `q`/`Q`/`esc` to
/// quit. Every other key maps to nothing.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Application state of the directory browser.
///
/// Owns the snapshot for the life of the session; the cursor is mutated only
/// through [AppState::handle_keypress], never by rendering.
pub struct AppState {
    nav: NavState,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            nav: NavState::new(snapshot),
        }
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Cursor index, or `None` while the snapshot is empty.
    pub fn visible_selected(&self) -> Option<usize> {
        if self.nav.snapshot().is_empty() {
            None
        } else {
            Some(self.nav.selected_idx())
        }
    }

    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(action) = action_for(key) else {
            return KeypressResult::Continue;
        };

        match action {
            Action::MoveUp => {
                if self.nav.move_up() {
                    KeypressResult::Consumed
                } else {
                    KeypressResult::Continue
                }
            }
            Action::MoveDown => {
                if self.nav.move_down() {
                    KeypressResult::Consumed
                } else {
                    KeypressResult::Continue
                }
            }
            Action::Quit => KeypressResult::Quit,
        }
    }
}
