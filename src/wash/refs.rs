//! Ref decoration formatting

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::ui::theme;

/// Kind of one decoration item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefKind {
    /// `HEAD -> main`: the checked out branch
    Current,
    /// Bare `HEAD` (detached)
    Head,
    Branch,
    Remote,
    Tag,
    BisectBad,
    BisectGood,
    BisectSkip,
}

impl RefKind {
    fn style(self) -> Style {
        match self {
            RefKind::Current => Style::default()
                .fg(theme::log_view::BRANCH)
                .add_modifier(Modifier::BOLD),
            RefKind::Head => Style::default()
                .fg(theme::log_view::HEAD)
                .add_modifier(Modifier::BOLD),
            RefKind::Branch => Style::default().fg(theme::log_view::BRANCH),
            RefKind::Remote => Style::default().fg(theme::log_view::REMOTE),
            RefKind::Tag => Style::default().fg(theme::log_view::TAG),
            RefKind::BisectBad => Style::default().fg(theme::bisect::BAD),
            RefKind::BisectGood => Style::default().fg(theme::bisect::GOOD),
            RefKind::BisectSkip => Style::default().fg(theme::bisect::SKIP),
        }
    }
}

/// Split a decoration like `(HEAD -> main, origin/main, tag: v1)` into items
pub(crate) fn parse_refs(raw: &str) -> Vec<(RefKind, String)> {
    let inner = raw.trim();
    let inner = inner
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(inner);

    match inner {
        "bad:" => return vec![(RefKind::BisectBad, "bad".to_string())],
        "good:" => return vec![(RefKind::BisectGood, "good".to_string())],
        "skip:" => return vec![(RefKind::BisectSkip, "skip".to_string())],
        _ => {}
    }

    inner
        .split(", ")
        .filter(|item| !item.is_empty())
        .map(|item| {
            if let Some(branch) = item.strip_prefix("HEAD -> ") {
                (RefKind::Current, branch.to_string())
            } else if let Some(tag) = item.strip_prefix("tag: ") {
                (RefKind::Tag, tag.to_string())
            } else if item == "HEAD" {
                (RefKind::Head, item.to_string())
            } else if let Some(bisect) = item.strip_prefix("refs/bisect/") {
                let kind = if bisect.starts_with("good") {
                    RefKind::BisectGood
                } else if bisect.starts_with("skip") {
                    RefKind::BisectSkip
                } else {
                    RefKind::BisectBad
                };
                (kind, bisect.to_string())
            } else if item.contains('/') {
                (RefKind::Remote, item.to_string())
            } else {
                (RefKind::Branch, item.to_string())
            }
        })
        .collect()
}

/// Styled spans for a decoration, each item followed by a space
pub(crate) fn format_refs(raw: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (kind, name) in parse_refs(raw) {
        spans.push(Span::styled(name, kind.style()));
        spans.push(Span::raw(" "));
    }
    spans
}
