//! Color theme definitions
//!
//! Centralized styles for consistent appearance of washed log rows.

use ratatui::style::{Color, Modifier, Style};

use crate::model::{CherryMarker, ReflogLabel, SideMarker, Signature};

/// Colors for log rows
pub mod log_view {
    use super::*;

    /// Commit hash color
    pub const HASH: Color = Color::Yellow;
    /// Graph color when the graph carries no color of its own
    pub const GRAPH: Color = Color::DarkGray;
    /// Local branch color
    pub const BRANCH: Color = Color::Green;
    /// Remote-tracking branch color
    pub const REMOTE: Color = Color::Cyan;
    /// Tag color
    pub const TAG: Color = Color::Magenta;
    /// Detached HEAD color
    pub const HEAD: Color = Color::LightBlue;
    /// Reflog selector color
    pub const REFLOG_SELECTOR: Color = Color::DarkGray;
    /// "Show more" affordance
    pub const MORE: Color = Color::Cyan;
}

/// Colors for the author/date margin
pub mod margin {
    use super::*;

    pub const AUTHOR: Color = Color::Blue;
    pub const DATE: Color = Color::DarkGray;
}

/// Colors for `git bisect log` decisions
pub mod bisect {
    use super::*;

    pub const BAD: Color = Color::Red;
    pub const GOOD: Color = Color::Green;
    pub const SKIP: Color = Color::Yellow;
}

/// Selection colors
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

pub fn hash() -> Style {
    Style::default().fg(log_view::HASH)
}

pub fn graph() -> Style {
    Style::default().fg(log_view::GRAPH)
}

/// Message style selected by signature status
pub fn signature(signature: Option<Signature>) -> Style {
    match signature {
        Some(Signature::Good) => Style::default().fg(Color::Green),
        Some(Signature::Bad) => Style::default().fg(Color::Red),
        Some(Signature::Untrusted) => Style::default().fg(Color::Cyan),
        Some(Signature::None) | None => Style::default(),
    }
}

pub fn cherry(marker: CherryMarker) -> Style {
    match marker {
        CherryMarker::Equivalent => Style::default().fg(Color::Magenta),
        CherryMarker::Unmatched => Style::default().fg(Color::Green),
    }
}

pub fn side(marker: SideMarker) -> Style {
    match marker {
        SideMarker::Incoming => Style::default().fg(Color::Green),
        SideMarker::Outgoing => Style::default().fg(Color::Red),
    }
}

pub fn reflog(label: ReflogLabel) -> Style {
    let color = match label {
        ReflogLabel::Commit => Color::Green,
        ReflogLabel::Amend => Color::Magenta,
        ReflogLabel::Merge => Color::Green,
        ReflogLabel::Checkout => Color::Blue,
        ReflogLabel::Reset => Color::Red,
        ReflogLabel::Rebase => Color::Magenta,
        ReflogLabel::CherryPick => Color::Green,
        ReflogLabel::Remote => Color::Cyan,
        ReflogLabel::Other => Color::Cyan,
    };
    Style::default().fg(color)
}

pub fn more() -> Style {
    Style::default()
        .fg(log_view::MORE)
        .add_modifier(Modifier::UNDERLINED)
}
