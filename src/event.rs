//! Event polling and key bindings for the live viewer.
//!
//! | Key | Action |
//! |-----|--------|
//! | `q`, `Esc`, `Ctrl+C` | Quit |
//! | `f` | Flip the board |

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termgrid_protocol::Dimensions;

/// How long to wait for an event before the loop gets a chance to tick.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What the live viewer should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the viewer.
    Quit,
    /// Show the board from the other side.
    Flip,
    /// The terminal now has this size.
    Resize(Dimensions),
}

/// Waits up to [`POLL_INTERVAL`] for a terminal event.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_INTERVAL)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Maps a terminal event to an action.
#[must_use]
pub fn event_to_action(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_to_action(*key),
        Event::Resize(cols, rows) => Some(Action::Resize(Dimensions::new(*cols, *rows))),
        _ => None,
    }
}

/// Maps a key press to an action.
#[must_use]
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('f') => Some(Action::Flip),
        _ => None,
    }
}
