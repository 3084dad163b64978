//! ANSI escape normalization
//!
//! `git log --color` embeds SGR escapes (`ESC [ ... m`) in its output. The
//! grammars work on plain text, so escapes are resolved into style ranges
//! first and then dropped. Line boundaries and visible text are untouched.

use std::ops::Range;
use std::sync::LazyLock;

use ansi_to_tui::IntoText;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use regex::Regex;

const ESC: char = '\x1b';

static STRAY_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|.)?").expect("Invalid escape regex")
});

/// A style applied to a byte range of [`AnsiLine::text`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRange {
    pub range: Range<usize>,
    pub style: Style,
}

/// One line of text with escapes resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsiLine {
    /// Visible text, escapes removed
    pub text: String,
    /// Non-default style ranges, sorted and non-overlapping
    pub styles: Vec<StyleRange>,
}

impl AnsiLine {
    /// A line without any styling
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    /// Style covering the byte at `offset`, if any
    pub fn style_at(&self, offset: usize) -> Option<Style> {
        self.styles
            .iter()
            .find(|s| s.range.contains(&offset))
            .map(|s| s.style)
    }

    /// Characters of `range` paired with their escape-derived style
    pub fn styled_chars(&self, range: Range<usize>) -> Vec<(char, Option<Style>)> {
        let start = range.start;
        self.text[range]
            .char_indices()
            .map(|(i, c)| (c, self.style_at(start + i)))
            .collect()
    }
}

/// True if the text contains escape sequences worth normalizing
pub fn has_escapes(raw: &str) -> bool {
    raw.contains(ESC)
}

/// Split `raw` into lines, resolving escapes into style ranges
///
/// SGR state carries over line breaks, like a terminal would. Input that
/// the escape parser rejects has its escapes stripped instead.
pub fn normalize(raw: &str) -> Vec<AnsiLine> {
    let count = raw.lines().count();
    let text = match raw.as_bytes().to_vec().into_text() {
        Ok(text) => text,
        Err(err) => {
            log::debug!("escape parse failed, stripping escapes: {err}");
            return raw
                .lines()
                .map(|line| AnsiLine::plain(STRAY_ESCAPE.replace_all(line, "")))
                .collect();
        }
    };

    let mut lines: Vec<AnsiLine> = text.lines.iter().take(count).map(from_line).collect();
    lines.resize_with(count, AnsiLine::default);
    lines
}

/// Split `raw` into lines without interpreting escapes
pub fn plain_lines(raw: &str) -> Vec<AnsiLine> {
    raw.lines().map(AnsiLine::plain).collect()
}

/// Join a parsed line's spans into text plus byte-range styles
fn from_line(line: &Line<'_>) -> AnsiLine {
    let mut out = AnsiLine::default();
    for span in &line.spans {
        let start = out.text.len();
        out.text.push_str(&span.content);
        let style = visible_style(span.style);
        if style != Style::default() && start < out.text.len() {
            push_range(&mut out.styles, start..out.text.len(), style);
        }
    }
    out
}

/// Drop reset colors and removed modifiers, which render as the default
fn visible_style(style: Style) -> Style {
    let mut visible = Style::default().add_modifier(style.add_modifier);
    if let Some(fg) = style.fg.filter(|c| *c != Color::Reset) {
        visible = visible.fg(fg);
    }
    if let Some(bg) = style.bg.filter(|c| *c != Color::Reset) {
        visible = visible.bg(bg);
    }
    visible
}

/// Extend the previous range when contiguous and equally styled
fn push_range(styles: &mut Vec<StyleRange>, range: Range<usize>, style: Style) {
    if let Some(last) = styles.last_mut() {
        if last.range.end == range.start && last.style == style {
            last.range.end = range.end;
            return;
        }
    }
    styles.push(StyleRange { range, style });
}
