//! Line washer
//!
//! Drives one parse pass over a raw blob: matches each line against the
//! active grammar, builds [`LogEntry`] records with their display prefix,
//! folds long-style body lines into the entry above them, and decides the
//! trailing pagination marker.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::ansi::{self, AnsiLine};
use super::grammar::{self, LineFields};
use super::graph::{self, GlyphTable};
use super::pagination::{DEFAULT_CUTOFF, should_show_more};
use super::reflog::decode_subject;
use super::refs::format_refs;
use crate::model::{CherryMarker, LogEntry, LogStyle, SideMarker, Signature};
use crate::ui::theme;

/// Width of the decoded reflog subject column
const REFLOG_SUBJECT_WIDTH: usize = 16;

/// Resolves a revision to its abbreviated id
///
/// Used for `git bisect log`, whose records carry full ids.
pub trait ShortHashResolver {
    fn short_hash(&self, rev: &str) -> Option<String>;
}

/// Resolver that abbreviates by truncation
#[derive(Debug, Clone, Copy)]
pub struct Abbreviate(pub usize);

impl ShortHashResolver for Abbreviate {
    fn short_hash(&self, rev: &str) -> Option<String> {
        let rev = rev.trim();
        if rev.is_empty() || !rev.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(rev.chars().take(self.0.max(1)).collect())
    }
}

/// Inputs of one parse pass
#[derive(Debug, Clone)]
pub struct WashOptions {
    pub style: LogStyle,
    /// Stop after this many entries
    pub cutoff: usize,
    /// Hash display width, used for the placeholder of hashless rows
    pub abbrev: usize,
    /// Graph substitutions; `None` keeps ASCII
    pub glyphs: Option<GlyphTable>,
}

impl Default for WashOptions {
    fn default() -> Self {
        Self {
            style: LogStyle::Oneline,
            cutoff: DEFAULT_CUTOFF,
            abbrev: 7,
            glyphs: Some(GlyphTable::default()),
        }
    }
}

impl WashOptions {
    pub fn new(style: LogStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }
}

/// One washed record and its rendered lines
///
/// `lines[0]` is the primary line; long-style body lines follow.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub entry: LogEntry,
    pub lines: Vec<Line<'static>>,
}

impl LogRow {
    /// A line kept exactly as it arrived
    fn passthrough(style: LogStyle, line: &AnsiLine) -> Self {
        Self {
            entry: LogEntry::new(style),
            lines: vec![styled_text(line)],
        }
    }

    /// Plain text of the rendered lines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What follows the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailer {
    /// The cutoff was reached; offer to show more history
    ShowMore,
    /// A single blank separator line
    Blank,
    /// Nothing (cherry output)
    None,
}

/// Result of one parse pass
#[derive(Debug, Clone, PartialEq)]
pub struct WashOutput {
    pub style: LogStyle,
    pub rows: Vec<LogRow>,
    pub trailer: Trailer,
    /// Entries that carried a hash
    pub produced: usize,
    pub cutoff: usize,
}

impl WashOutput {
    /// Rows that are commits
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.rows.iter().map(|r| &r.entry).filter(|e| e.is_commit())
    }
}

/// Counter and cursor state owned by one pass
struct PassState<'o> {
    options: &'o WashOptions,
    resolver: &'o dyn ShortHashResolver,
    produced: usize,
    /// A primary record was seen after the cutoff was reached
    truncated: bool,
}

/// Wash a raw blob into rows
///
/// Unmatched lines pass through untouched. A long-style record cut off by the
/// end of input is kept with whatever body lines arrived.
pub fn wash(raw: &str, options: &WashOptions, resolver: &dyn ShortHashResolver) -> WashOutput {
    let mut lines = if ansi::has_escapes(raw) {
        ansi::normalize(raw)
    } else {
        ansi::plain_lines(raw)
    };

    // git cherry lists oldest first
    if options.style == LogStyle::Cherry {
        lines.reverse();
    }

    let mut state = PassState {
        options,
        resolver,
        produced: 0,
        truncated: false,
    };
    let mut rows = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = &lines[cursor];
        cursor += 1;

        let Some(fields) = grammar::capture(options.style, &line.text) else {
            log::debug!("{} grammar mismatch, passing through: {:?}", options.style, line.text);
            rows.push(LogRow::passthrough(options.style, line));
            continue;
        };

        if fields.is_empty() {
            rows.push(LogRow::passthrough(options.style, line));
            continue;
        }

        if fields.hash.is_some() && state.produced >= options.cutoff {
            state.truncated = true;
            break;
        }

        let mut row = state.build_row(line, &fields);

        if row.entry.is_commit() {
            state.produced += 1;
            if options.style == LogStyle::Long {
                cursor = state.consume_body(&lines, cursor, &mut row);
            }
        }

        rows.push(row);
    }

    let trailer = if state.truncated && should_show_more(state.produced, options.cutoff) {
        Trailer::ShowMore
    } else if options.style != LogStyle::Cherry {
        Trailer::Blank
    } else {
        Trailer::None
    };

    log::debug!(
        "washed {} lines as {}: {} rows, {} entries, trailer {:?}",
        lines.len(),
        options.style,
        rows.len(),
        state.produced,
        trailer
    );

    WashOutput {
        style: options.style,
        rows,
        trailer,
        produced: state.produced,
        cutoff: options.cutoff,
    }
}

impl PassState<'_> {
    /// Fold body lines into a long-style entry
    ///
    /// Consumes from `cursor` until the next primary record or end of input;
    /// returns the new cursor.
    fn consume_body(&self, lines: &[AnsiLine], mut cursor: usize, row: &mut LogRow) -> usize {
        while let Some(line) = lines.get(cursor) {
            let Some(fields) = grammar::capture(LogStyle::Long, &line.text) else {
                break;
            };
            if fields.hash.is_some() {
                break;
            }
            if let Some(message) = fields.message {
                row.entry.append_message(message);
            }
            row.lines.push(self.prefix_line(line, &fields).0);
            cursor += 1;
        }
        cursor
    }

    /// Build the entry and its primary line
    fn build_row(&self, line: &AnsiLine, fields: &LineFields<'_>) -> LogRow {
        let (line, entry) = self.prefix_line(line, fields);
        LogRow {
            entry,
            lines: vec![line],
        }
    }

    /// Display pieces in fixed order: cherry, side, hash, graph, refs,
    /// reflog selector and subject, message
    fn prefix_line(&self, line: &AnsiLine, fields: &LineFields<'_>) -> (Line<'static>, LogEntry) {
        let style = self.options.style;
        let mut entry = LogEntry::new(style);
        let mut spans: Vec<Span<'static>> = Vec::new();

        if let Some(marker) = fields.cherry.and_then(CherryMarker::from_symbol) {
            entry.cherry_marker = Some(marker);
            spans.push(Span::styled(marker.symbol().to_string(), theme::cherry(marker)));
            spans.push(Span::raw(" "));
        }

        if let Some(marker) = fields.side.and_then(SideMarker::from_symbol) {
            entry.side_marker = Some(marker);
            spans.push(Span::styled(marker.symbol().to_string(), theme::side(marker)));
            spans.push(Span::raw(" "));
        }

        let hash = fields.hash.map(|hash| match style {
            LogStyle::BisectLog => self
                .resolver
                .short_hash(hash)
                .unwrap_or_else(|| hash.to_string()),
            _ => hash.to_string(),
        });
        match hash {
            Some(ref hash) => {
                spans.push(Span::styled(hash.clone(), theme::hash()));
                spans.push(Span::raw(" "));
            }
            None => spans.push(Span::raw(" ".repeat(self.options.abbrev + 1))),
        }
        entry.hash = hash;

        if let Some(range) = fields.graph.clone() {
            entry.graph = Some(line.text[range.clone()].to_string());
            let chars = graph::translate(&line.styled_chars(range), self.options.glyphs.as_ref());
            spans.extend(graph::to_spans(&chars, theme::graph()));
        }

        if let Some(refs) = fields.refs {
            entry.refs = Some(refs.to_string());
            spans.extend(format_refs(refs));
        }

        if let Some(selector) = fields.reflog_selector {
            entry.reflog_selector = Some(selector.to_string());
            // A raw-date selector carries no index; show the entry's position
            let index = match raw_date(selector) {
                Some(epoch) => {
                    entry.date = Some(epoch.to_string());
                    self.produced.to_string()
                }
                None => selector.to_string(),
            };
            spans.push(Span::styled(
                format!("{:<2} ", index),
                Style::default().fg(theme::log_view::REFLOG_SELECTOR),
            ));
        }

        if let Some(subject) = fields.reflog_subject {
            let subject = subject.trim_end();
            let subject = subject.strip_suffix(':').unwrap_or(subject);
            let decoded = decode_subject(subject);
            entry.reflog_subject = Some(subject.to_string());
            spans.push(Span::styled(
                format!("{:<width$} ", decoded.text, width = REFLOG_SUBJECT_WIDTH),
                theme::reflog(decoded.class),
            ));
        }

        entry.signature = fields
            .signature
            .and_then(|s| s.chars().next())
            .and_then(Signature::from_code);

        if let Some(message) = fields.message {
            entry.message = Some(message.to_string());
            spans.push(Span::styled(
                message.to_string(),
                theme::signature(entry.signature),
            ));
        }

        entry.author = fields.author.map(str::to_string);
        if let Some(date) = fields.date {
            entry.date = Some(date.to_string());
        }

        (Line::from(spans), entry)
    }
}

/// Epoch seconds of a `--date=raw` selector like `1420070400 +0100`
fn raw_date(selector: &str) -> Option<i64> {
    let (epoch, zone) = selector.split_once(' ')?;
    let zone_ok = zone.len() == 5
        && zone.starts_with(['+', '-'])
        && zone[1..].chars().all(|c| c.is_ascii_digit());
    if !zone_ok {
        return None;
    }
    epoch.parse().ok()
}

/// Text of a line with its escape-derived styles
fn styled_text(line: &AnsiLine) -> Line<'static> {
    if line.styles.is_empty() {
        return Line::raw(line.text.clone());
    }
    let chars = line.styled_chars(0..line.text.len());
    Line::from(graph::to_spans(&chars, Style::default()))
}
