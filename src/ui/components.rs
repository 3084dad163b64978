//! Building blocks shared by the log view and widgets

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::ui::symbols;

/// Frame around the history pane
pub fn history_block(title: Line<'_>) -> Block<'_> {
    Block::bordered().title(title)
}

/// Shown when a pass produced no rows and has nothing more to offer
pub fn no_history_state() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(symbols::empty::TITLE).centered(),
        Line::from(""),
        Line::from(symbols::empty::HINT).dark_gray().centered(),
    ])
}

/// `[ git ]` tag followed by the failure text
pub fn error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" git ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error.trim()), Style::default().fg(Color::Red)),
    ])
}
