//! Main rendering orchestration for the TUI panel.
//!
//! Composes the header, layout selector, the two diagram editor panes, and
//! the footer into a cohesive layout.

use crate::tui::app::{App, Focus};
use crate::tui::editor::EditorBuffer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Instant;

/// Header text displayed at the top of the panel.
const HEADER_TEXT: &str = "Board Layout Panel";

/// Footer text when the layout selector is focused.
const SELECTOR_FOOTER: &str =
    "[j/k] Select  [Tab] Editors  [s] Side  [r] Restart  [y/Y] Copy  [q] Quit";

/// Footer text when an editor pane is focused.
const EDITOR_FOOTER: &str = "[Esc] Done  [Tab] Next pane  edits commit when you leave the pane";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Minimum width reserved for the layout selector column.
const SELECTOR_WIDTH: u16 = 20;

/// Renders the full panel layout: header, selector, editors, footer.
pub fn render_panel(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(5),    // selector + editors
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(12)])
        .split(chunks[1]);

    render_selector(frame, columns[0], app);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let selected = app.selected_name();
    render_editor_pane(
        frame,
        panes[0],
        format!("Placement ({selected})"),
        &app.placement_editor,
        app.focus == Focus::Placement,
    );
    render_editor_pane(
        frame,
        panes[1],
        format!("Promotion ({selected})"),
        &app.promotion_editor,
        app.focus == Focus::Promotion,
    );

    render_footer(frame, chunks[2], app);
}

/// Header with title (left) and version (right-aligned).
fn render_header(frame: &mut Frame, area: Rect) {
    let header_width = area.width as usize;
    let available_space = header_width.saturating_sub(HEADER_TEXT.len());
    let padding_len = available_space.saturating_sub(VERSION_TEXT.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(VERSION_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Layout selector list with the active selection highlighted.
fn render_selector(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = crate::LayoutName::ALL
        .iter()
        .map(|name| ListItem::new(name.to_string()))
        .collect();

    let focused = app.focus == Focus::Layouts;
    let list = List::new(items)
        .block(pane_block("Layouts".to_string(), focused))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.list_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One diagram editor pane; draws the terminal cursor when focused.
fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    title: String,
    editor: &EditorBuffer,
    focused: bool,
) {
    let block = pane_block(title, focused);
    let inner = block.inner(area);

    let (row, col) = editor.cursor();
    let scroll = (row as u16 + 1).saturating_sub(inner.height);

    let paragraph = Paragraph::new(editor.text())
        .block(block)
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    if focused && inner.height > 0 {
        let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + row as u16 - scroll;
        frame.set_cursor_position((x, y));
    }
}

/// Footer with keybindings (or transient status message) and panel state.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    let left = match &app.status_message {
        Some((message, expiry)) if *expiry > now => {
            Span::styled(message.clone(), Style::default().fg(Color::Yellow))
        }
        _ => {
            let text = if app.focus == Focus::Layouts {
                SELECTOR_FOOTER
            } else {
                EDITOR_FOOTER
            };
            Span::styled(text, Style::default().fg(Color::DarkGray))
        }
    };

    let side = app.panel.snapshot().side;
    let mut right = format!("side: {}", side);
    if app.panel.restart_pending() {
        right.push_str("  restart pending");
    }

    let padding = (area.width as usize)
        .saturating_sub(left.content.len())
        .saturating_sub(right.len());

    let footer = Paragraph::new(Line::from(vec![
        left,
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, area);
}

/// Bordered block; the focused pane gets a cyan border.
fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}
