//! Graph glyph translation
//!
//! `git log --graph` draws topology with `/ | \ * o`. A [`GlyphTable`] swaps
//! those for box-drawing characters. Styles from the colored graph stay
//! attached to the character they were on.

use std::collections::BTreeMap;

use ratatui::style::Style;
use ratatui::text::Span;

/// Default ASCII → Unicode substitutions
pub const UNICODE_GLYPHS: [(char, char); 5] = [
    ('/', '\u{2571}'),
    ('|', '\u{2502}'),
    ('\\', '\u{2572}'),
    ('*', '\u{25C6}'),
    ('o', '\u{25C7}'),
];

/// Character substitution table for graph columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    map: BTreeMap<char, char>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::unicode()
    }
}

impl GlyphTable {
    /// The box-drawing table
    pub fn unicode() -> Self {
        Self::from_pairs(UNICODE_GLYPHS)
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Add or replace one substitution
    pub fn insert(&mut self, from: char, to: char) {
        self.map.insert(from, to);
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Translate styled graph characters
///
/// Without a table the input is returned unchanged.
pub fn translate(
    graph: &[(char, Option<Style>)],
    table: Option<&GlyphTable>,
) -> Vec<(char, Option<Style>)> {
    match table {
        Some(table) => graph
            .iter()
            .map(|&(c, style)| (table.get(c).unwrap_or(c), style))
            .collect(),
        None => graph.to_vec(),
    }
}

/// Translate a plain graph string
pub fn translate_str(graph: &str, table: Option<&GlyphTable>) -> String {
    match table {
        Some(table) => graph.chars().map(|c| table.get(c).unwrap_or(c)).collect(),
        None => graph.to_string(),
    }
}

/// Group styled characters into spans
///
/// Characters without an escape-derived style get `fallback`.
pub fn to_spans(chars: &[(char, Option<Style>)], fallback: Style) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style = None;

    for &(c, style) in chars {
        let style = style.unwrap_or(fallback);
        if current_style != Some(style) && !current.is_empty() {
            spans.push(Span::styled(
                std::mem::take(&mut current),
                current_style.unwrap_or(fallback),
            ));
        }
        current_style = Some(style);
        current.push(c);
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, current_style.unwrap_or(fallback)));
    }

    spans
}
