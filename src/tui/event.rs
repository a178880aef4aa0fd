//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.

use crate::tui::app::{App, Focus};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Copy a diagram to the system clipboard.
    CopyDiagram {
        /// Which diagram, for the status message ("placement"/"promotion").
        label: &'static str,
        /// The diagram text.
        text: String,
    },
}

/// Handles a key event by dispatching to the appropriate app method or action.
///
/// When an editor pane is focused, keys are routed to the editor; otherwise
/// panel-level navigation applies.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: Ctrl-C quits even from an editor pane
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Action::Quit;
    }

    // Focus cycling commits the editor being left
    match key.code {
        KeyCode::Tab => {
            app.cycle_focus_forward();
            return Action::None;
        }
        KeyCode::BackTab => {
            app.cycle_focus_backward();
            return Action::None;
        }
        _ => {}
    }

    if app.focus == Focus::Layouts {
        return handle_selector_key(app, key);
    }
    handle_editor_key(app, key)
}

/// Handles key events when the layout selector is focused.
fn handle_selector_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            Action::None
        }
        KeyCode::Enter => {
            app.focus_placement();
            Action::None
        }
        KeyCode::Char('s') => {
            app.toggle_side();
            Action::None
        }
        KeyCode::Char('r') => {
            app.request_restart();
            Action::None
        }
        KeyCode::Char('y') => Action::CopyDiagram {
            label: "placement",
            text: app.placement_editor.text(),
        },
        KeyCode::Char('Y') => Action::CopyDiagram {
            label: "promotion",
            text: app.promotion_editor.text(),
        },
        _ => Action::None,
    }
}

/// Handles key events when an editor pane is focused.
///
/// Text edits push the live buffer to the panel immediately; leaving the
/// pane (Esc here, Tab/BackTab above) commits it.
fn handle_editor_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => {
            app.leave_editor();
            return Action::None;
        }
        KeyCode::Char(c) => {
            app.focused_editor_mut().insert_char(c);
        }
        KeyCode::Enter => {
            app.focused_editor_mut().insert_newline();
        }
        KeyCode::Backspace => {
            app.focused_editor_mut().backspace();
        }
        KeyCode::Delete => {
            app.focused_editor_mut().delete();
        }
        KeyCode::Left => {
            app.focused_editor_mut().move_left();
            return Action::None;
        }
        KeyCode::Right => {
            app.focused_editor_mut().move_right();
            return Action::None;
        }
        KeyCode::Up => {
            app.focused_editor_mut().move_up();
            return Action::None;
        }
        KeyCode::Down => {
            app.focused_editor_mut().move_down();
            return Action::None;
        }
        KeyCode::Home => {
            app.focused_editor_mut().move_line_start();
            return Action::None;
        }
        KeyCode::End => {
            app.focused_editor_mut().move_line_end();
            return Action::None;
        }
        _ => return Action::None,
    }
    // A text-modifying key fell through: publish the live buffer
    app.push_focused_input();
    Action::None
}

/// Returns true if the key event should trigger application quit.
pub fn should_quit(app: &App, key: KeyEvent) -> bool {
    (key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')))
        || (app.focus == Focus::Layouts && matches!(key.code, KeyCode::Char('q')))
}
