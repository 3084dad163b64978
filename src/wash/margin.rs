//! Author/date margin
//!
//! The margin is a side column next to each row: the author, truncated to fit,
//! and how long ago the entry was made. It never shifts the row's own columns.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use super::WashError;
use super::duration::{DurationSpec, format_duration};
use crate::ui::{symbols, theme};

/// Width of the right-aligned count in a duration
const COUNT_WIDTH: usize = 3;

/// Where the margin is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarginContext {
    /// The main log view; reserves one trailing column
    #[default]
    Log,
    /// Any other presentation (plain output, embedded lists)
    Other,
}

impl MarginContext {
    fn reserved(self) -> usize {
        match self {
            MarginContext::Log => 1,
            MarginContext::Other => 0,
        }
    }
}

/// Margin geometry and unit table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginSpec {
    width: usize,
    unit_width: usize,
    durations: DurationSpec,
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self {
            width: 28,
            unit_width: 7,
            durations: DurationSpec::default(),
        }
    }
}

impl MarginSpec {
    /// Validate and build a margin spec
    ///
    /// `unit_width` is either 1 (abbreviated units) or wide enough for the
    /// longest unit name; `width` must leave room for at least one author
    /// column in every context.
    pub fn new(width: usize, unit_width: usize, durations: DurationSpec) -> Result<Self, WashError> {
        let longest = durations.longest_name();
        if unit_width != 1 && unit_width < longest {
            return Err(WashError::InvalidMarginSpec(format!(
                "unit width {} is neither 1 nor at least {} (longest unit name)",
                unit_width, longest
            )));
        }
        let spec = Self {
            width,
            unit_width,
            durations,
        };
        if spec.author_width(MarginContext::Log) == 0 {
            return Err(WashError::InvalidMarginSpec(format!(
                "width {} leaves no room for the author",
                width
            )));
        }
        Ok(spec)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn unit_width(&self) -> usize {
        self.unit_width
    }

    pub fn durations(&self) -> &DurationSpec {
        &self.durations
    }

    /// Columns taken by the unit part of a duration
    fn unit_field(&self) -> usize {
        if self.unit_width == 1 {
            1
        } else {
            self.unit_width + 1
        }
    }

    /// Columns left for the author name
    pub fn author_width(&self, context: MarginContext) -> usize {
        self.width
            .saturating_sub(1 + COUNT_WIDTH + self.unit_field() + context.reserved())
    }

    fn duration_width(&self) -> usize {
        COUNT_WIDTH + self.unit_field()
    }
}

/// Render the margin for one row
///
/// `now` and `date` are epoch seconds. Without an author the margin is blank.
pub fn render_margin(
    author: Option<&str>,
    date: Option<&str>,
    spec: &MarginSpec,
    now: i64,
    context: MarginContext,
) -> Line<'static> {
    let mut spans = Vec::new();

    match author {
        Some(author) => {
            let author_width = spec.author_width(context);
            spans.push(Span::styled(
                fit_to_width(author, author_width),
                Style::default().fg(theme::margin::AUTHOR),
            ));
            spans.push(Span::raw(" "));

            let duration = match date.and_then(|d| d.trim().parse::<i64>().ok()) {
                Some(date) => {
                    let age = i64::try_from(now.abs_diff(date)).unwrap_or(i64::MAX);
                    format_duration(age, spec.durations(), spec.unit_width)
                }
                None => " ".repeat(spec.duration_width()),
            };
            spans.push(Span::styled(
                duration,
                Style::default().fg(theme::margin::DATE),
            ));
        }
        None => spans.push(Span::raw(" ".repeat(spec.width.saturating_sub(1)))),
    }

    if context == MarginContext::Log {
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Truncate with an ellipsis or pad with spaces to exactly `width` columns
fn fit_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return format!("{}{}", text, " ".repeat(width - total));
    }

    let ellipsis_width = symbols::ELLIPSIS.width().unwrap_or(1);
    let budget = width.saturating_sub(ellipsis_width);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if width >= ellipsis_width {
        out.push(symbols::ELLIPSIS);
        used += ellipsis_width;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
