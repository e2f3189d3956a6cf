//! Rendering of the tree browser.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::cli::output::{EMPTY_TREE_MESSAGE, row_text};
use crate::domain::TreeRow;
use crate::tree::Session;

const HEADER: &str = "Search Notes (Ctrl-C: quit, Tab: help)";
const SEARCH_PROMPT: &str = "> ";

/// Message shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Warning(String),
    Error(String),
}

impl Status {
    fn style(&self) -> Style {
        match self {
            Status::Info(_) => Style::default().fg(Color::Green),
            Status::Warning(_) => Style::default().fg(Color::Yellow),
            Status::Error(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    fn text(&self) -> &str {
        match self {
            Status::Info(s) | Status::Warning(s) | Status::Error(s) => s,
        }
    }
}

fn folder_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default()
        .bg(Color::Rgb(0x00, 0x55, 0xaa))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Draws the whole screen: header, search bar, separator, tree and status.
pub fn draw(frame: &mut Frame, session: &Session, status: Option<&Status>, list_state: &mut ListState) {
    let [header, search, separator, tree, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(HEADER), header);
    draw_search(frame, session.query(), search);
    frame.render_widget(
        Paragraph::new("─".repeat(separator.width as usize)),
        separator,
    );
    draw_tree(frame, session, tree, list_state);

    if let Some(status) = status {
        frame.render_widget(
            Paragraph::new(Span::styled(status.text(), status.style())),
            footer,
        );
    }
}

fn draw_search(frame: &mut Frame, query: &str, area: Rect) {
    let style = Style::default().bg(Color::Black).fg(Color::White);
    frame.render_widget(
        Paragraph::new(format!("{SEARCH_PROMPT}{query}")).style(style),
        area,
    );
    let width = (SEARCH_PROMPT.chars().count() + query.chars().count()) as u16;
    frame.set_cursor_position(Position::new(
        area.x + width.min(area.width.saturating_sub(1)),
        area.y,
    ));
}

fn draw_tree(frame: &mut Frame, session: &Session, area: Rect, list_state: &mut ListState) {
    if session.rows().is_empty() {
        frame.render_widget(Paragraph::new(EMPTY_TREE_MESSAGE), area);
        return;
    }

    let items: Vec<ListItem> = session
        .rows()
        .iter()
        .map(|row| {
            let text = row_text(row, session.expanded());
            let line = match row {
                TreeRow::Folder { .. } => Line::styled(text, folder_style()),
                TreeRow::Note { .. } => Line::raw(text),
            };
            ListItem::new(line)
        })
        .collect();

    list_state.select(Some(session.selected_index()));
    frame.render_stateful_widget(
        List::new(items).highlight_style(selected_style()),
        area,
        list_state,
    );
}
