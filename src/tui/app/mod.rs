//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, focus, and the editor-to-
//! panel synchronization protocol: edits publish the live buffer on every
//! keystroke, leaving an editor pane commits it under the selected layout.

use crate::driver::DriverHandle;
use crate::panel::{PanelEvent, SharedPanel};
use crate::tui::editor::EditorBuffer;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_panel;
use crate::LayoutName;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};
use tokio::time::interval;

/// How long footer status messages stay visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The layout selector list.
    Layouts,
    /// The placement diagram editor.
    Placement,
    /// The promotion diagram editor.
    Promotion,
}

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Shared panel state, also visible to the driver poller.
    pub panel: SharedPanel,
    /// Currently focused pane.
    pub focus: Focus,
    /// Index into [`LayoutName::ALL`] for the selector list.
    pub list_index: usize,
    /// Placement diagram editor.
    pub placement_editor: EditorBuffer,
    /// Promotion diagram editor.
    pub promotion_editor: EditorBuffer,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Render tick rate.
    tick_rate: Duration,
    /// Driver poller cadence, `None` when the poller is disabled.
    driver_poll: Option<Duration>,
}

impl App {
    /// Creates a new App around a shared panel.
    ///
    /// Editors load from the panel's current buffers (the panel constructor
    /// already applied the initial selection eagerly).
    pub fn new(panel: SharedPanel, tick_rate: Duration, driver_poll: Option<Duration>) -> Self {
        let snap = panel.snapshot();
        let list_index = LayoutName::ALL
            .iter()
            .position(|&n| n == snap.selected)
            .unwrap_or(0);
        Self {
            should_quit: false,
            panel,
            focus: Focus::Layouts,
            list_index,
            placement_editor: EditorBuffer::from_text(&snap.placement),
            promotion_editor: EditorBuffer::from_text(&snap.promotion),
            status_message: None,
            tick_count: 0,
            tick_rate,
            driver_poll,
        }
    }

    /// The layout name under the selector cursor.
    pub fn selected_name(&self) -> LayoutName {
        LayoutName::ALL[self.list_index]
    }

    /// Moves the selection down by one, clamped to the last layout.
    pub fn select_next(&mut self) {
        let last = LayoutName::ALL.len() - 1;
        let new_idx = (self.list_index + 1).min(last);
        if new_idx != self.list_index {
            self.list_index = new_idx;
            self.apply_selection();
        }
    }

    /// Moves the selection up by one, clamped to index 0.
    pub fn select_previous(&mut self) {
        let new_idx = self.list_index.saturating_sub(1);
        if new_idx != self.list_index {
            self.list_index = new_idx;
            self.apply_selection();
        }
    }

    /// Fires a Select event and reloads both editors from the panel.
    fn apply_selection(&mut self) {
        self.panel.apply(PanelEvent::Select(self.selected_name()));
        let snap = self.panel.snapshot();
        self.placement_editor = EditorBuffer::from_text(&snap.placement);
        self.promotion_editor = EditorBuffer::from_text(&snap.promotion);
    }

    /// Cycles focus Layouts → Placement → Promotion → Layouts.
    pub fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            Focus::Layouts => Focus::Placement,
            Focus::Placement => {
                self.commit_placement();
                Focus::Promotion
            }
            Focus::Promotion => {
                self.commit_promotion();
                Focus::Layouts
            }
        };
    }

    /// Cycles focus in the reverse direction.
    pub fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            Focus::Layouts => Focus::Promotion,
            Focus::Placement => {
                self.commit_placement();
                Focus::Layouts
            }
            Focus::Promotion => {
                self.commit_promotion();
                Focus::Placement
            }
        };
    }

    /// Focuses the placement editor (Enter from the selector).
    pub fn focus_placement(&mut self) {
        self.focus = Focus::Placement;
    }

    /// Leaves the focused editor, committing it (Esc).
    pub fn leave_editor(&mut self) {
        match self.focus {
            Focus::Placement => self.commit_placement(),
            Focus::Promotion => self.commit_promotion(),
            Focus::Layouts => {}
        }
        self.focus = Focus::Layouts;
    }

    /// The editor belonging to the focused pane.
    ///
    /// Falls back to the placement editor when the selector is focused;
    /// callers only use this while an editor pane has focus.
    pub fn focused_editor_mut(&mut self) -> &mut EditorBuffer {
        match self.focus {
            Focus::Promotion => &mut self.promotion_editor,
            _ => &mut self.placement_editor,
        }
    }

    /// Publishes the focused editor's live content to the panel.
    pub fn push_focused_input(&mut self) {
        match self.focus {
            Focus::Placement | Focus::Layouts => {
                self.panel
                    .apply(PanelEvent::PlacementInput(self.placement_editor.text()));
            }
            Focus::Promotion => {
                self.panel
                    .apply(PanelEvent::PromotionInput(self.promotion_editor.text()));
            }
        }
    }

    fn commit_placement(&mut self) {
        self.panel
            .apply(PanelEvent::PlacementInput(self.placement_editor.text()));
        self.panel.apply(PanelEvent::CommitPlacement);
    }

    fn commit_promotion(&mut self) {
        self.panel
            .apply(PanelEvent::PromotionInput(self.promotion_editor.text()));
        self.panel.apply(PanelEvent::CommitPromotion);
    }

    /// Flips the bottom side and shows a status message.
    pub fn toggle_side(&mut self) {
        let side = self.panel.snapshot().side.flipped();
        self.panel.apply(PanelEvent::SetSide(side));
        self.set_status(format!("Bottom side: {}", side));
    }

    /// Arms the restart latch and shows a status message.
    pub fn request_restart(&mut self) {
        self.panel.request_restart();
        self.set_status("Restart requested".to_string());
    }

    /// Sets a footer status message with the standard expiry.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Copies a diagram to the system clipboard, reporting via status message.
    fn copy_diagram(&mut self, label: &'static str, text: String) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => {
                    tracing::debug!("copied {} diagram to clipboard", label);
                    self.set_status(format!("Copied {} diagram", label));
                }
                Err(e) => {
                    tracing::warn!("failed to copy to clipboard: {}", e);
                    self.set_status(format!("Copy failed: {}", e));
                }
            },
            Err(e) => {
                tracing::warn!("failed to initialize clipboard: {}", e);
                self.set_status(format!("Clipboard init failed: {}", e));
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).expect("failed to create ratatui terminal instance");
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        // Run the driver poller the way an embedding game driver would
        if let Some(period) = self.driver_poll {
            let driver = self.panel.driver();
            tokio::spawn(async move {
                run_driver_poller(driver, period).await;
            });
        }

        loop {
            terminal.draw(|frame| {
                render_panel(frame, self);
            })?;

            match event_handler.next(&mut reader).await? {
                Event::Key(key) => match handle_key_event(self, key) {
                    Action::Quit => {
                        self.should_quit = true;
                        return Ok(());
                    }
                    Action::CopyDiagram { label, text } => {
                        self.copy_diagram(label, text);
                    }
                    Action::None => {}
                },
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                }
                Event::Resize(_, _) => {}
            }
        }
    }
}

/// Polls the driver handle on a fixed cadence, consuming restart requests.
///
/// Stands in for the external game driver, which polls these accessors once
/// per frame and rebuilds its board when a restart fires.
pub(crate) async fn run_driver_poller(driver: DriverHandle, period: Duration) {
    let mut ticker = interval(period);
    let mut last_side = driver.bottom_side();
    loop {
        ticker.tick().await;

        let side = driver.bottom_side();
        if side != last_side {
            tracing::debug!("bottom side changed to {}", side);
            last_side = side;
        }

        if driver.poll_restart() {
            let pieces = driver.pieces_string();
            let promotions = driver.promotions_string();
            tracing::info!(
                "restart requested: {} placement ranks, {} promotion ranks, {} at bottom",
                pieces.lines().count(),
                promotions.lines().count(),
                side,
            );
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
