//! Bottom-of-screen widgets: the status bar and the error banner

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::keys::KeyHint;
use crate::ui::components;

/// Row `offset` lines above the bottom edge, if the frame is tall enough
fn bottom_row(frame: &Frame, offset: u16, inset: u16) -> Option<Rect> {
    let area = frame.area();
    if area.height <= offset + 1 {
        return None;
    }
    Some(Rect {
        x: area.x + inset,
        y: area.y + area.height - 1 - offset,
        width: area.width.saturating_sub(inset * 2),
        height: 1,
    })
}

/// Entry counter followed by one chip per key hint
fn status_line(counter: String, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        counter,
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )];
    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }
    Line::from(spans)
}

/// Render the status bar on the last row
///
/// The counter reads `produced/cutoff`, or just `produced` once the
/// cutoff is unbounded.
pub fn render_log_status_bar(
    frame: &mut Frame,
    produced: usize,
    cutoff: usize,
    unbounded: bool,
    hints: &[KeyHint],
) {
    let Some(area) = bottom_row(frame, 0, 0) else {
        return;
    };
    let counter = if unbounded {
        format!(" {} entries ", produced)
    } else {
        format!(" {}/{} entries ", produced, cutoff)
    };
    frame.render_widget(Paragraph::new(status_line(counter, hints)), area);
}

/// Render a failed pass two rows above the bottom edge
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let Some(area) = bottom_row(frame, 2, 2) else {
        return;
    };
    frame.render_widget(Paragraph::new(components::error_line(error)), area);
}
