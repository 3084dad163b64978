//! Log View - displays washed history
//!
//! The only view of logwash: one pass worth of rows, an optional margin, and
//! the trailing "show more" row when the cutoff was reached.

mod input;
mod render;

use crate::model::{LogEntry, LogStyle};
use crate::wash::{Growth, LogRow, MarginSpec, Trailer, WashOutput};

/// Actions that LogView can request from App
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    /// No action needed
    None,
    /// Grow the cutoff and run a new pass
    Grow(Growth),
}

/// Log View state
#[derive(Debug)]
pub struct LogView {
    /// Result of the latest pass
    pub output: Option<WashOutput>,
    /// Selected row; `rows.len()` selects the "show more" row
    pub selected_index: usize,
    /// First visible display line
    pub scroll_offset: usize,
    /// Revision range shown in the title
    pub range: Option<String>,
    /// Margin geometry
    pub margin: MarginSpec,
    /// User toggle for the margin (m key)
    pub margin_visible: bool,
    /// Cutoff has reached the unbounded sentinel
    pub unbounded: bool,
    /// Entries added by the step key
    pub step: usize,
    /// Reference time for margin durations (epoch seconds)
    pub now: i64,
    /// Indices of selectable rows (commits, plus the "show more" row)
    selectable_indices: Vec<usize>,
    /// Current position in selectable_indices
    selection_cursor: usize,
}

impl Default for LogView {
    fn default() -> Self {
        Self::new(MarginSpec::default())
    }
}

impl LogView {
    pub fn new(margin: MarginSpec) -> Self {
        Self {
            output: None,
            selected_index: 0,
            scroll_offset: 0,
            range: None,
            margin,
            margin_visible: true,
            unbounded: false,
            step: crate::wash::pagination::DEFAULT_CUTOFF,
            now: chrono::Utc::now().timestamp(),
            selectable_indices: Vec::new(),
            selection_cursor: 0,
        }
    }

    /// Replace the displayed pass
    ///
    /// Keeps the selection on the same commit when it is still present,
    /// otherwise selects the first commit.
    pub fn set_output(&mut self, output: WashOutput) {
        let kept_hash = self.selected_entry().and_then(|e| e.hash.clone());

        self.selectable_indices = output
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.entry.is_commit())
            .map(|(i, _)| i)
            .collect();
        if output.trailer == Trailer::ShowMore {
            self.selectable_indices.push(output.rows.len());
        }

        self.selection_cursor = kept_hash
            .and_then(|hash| {
                self.selectable_indices.iter().position(|&i| {
                    output.rows.get(i).and_then(|r| r.entry.hash.as_deref()) == Some(hash.as_str())
                })
            })
            .unwrap_or(0);
        self.selected_index = self
            .selectable_indices
            .get(self.selection_cursor)
            .copied()
            .unwrap_or(0);
        self.output = Some(output);
    }

    pub fn rows(&self) -> &[LogRow] {
        self.output.as_ref().map_or(&[], |o| o.rows.as_slice())
    }

    pub fn trailer(&self) -> Trailer {
        self.output.as_ref().map_or(Trailer::None, |o| o.trailer)
    }

    pub fn style(&self) -> LogStyle {
        self.output.as_ref().map_or(LogStyle::default(), |o| o.style)
    }

    /// Get the currently selected entry
    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.rows()
            .get(self.selected_index)
            .map(|row| &row.entry)
            .filter(|entry| entry.is_commit())
    }

    /// Whether the "show more" row is selected
    pub fn is_show_more_selected(&self) -> bool {
        self.trailer() == Trailer::ShowMore && self.selected_index == self.rows().len()
    }

    /// Whether the margin column is drawn
    pub fn shows_margin(&self) -> bool {
        self.margin_visible && self.style().has_margin()
    }

    /// Move selection up (skips non-commit rows)
    pub fn move_up(&mut self) {
        if self.selection_cursor > 0 {
            self.selection_cursor -= 1;
            self.selected_index = self.selectable_indices[self.selection_cursor];
        }
    }

    /// Move selection down (skips non-commit rows)
    pub fn move_down(&mut self) {
        if self.selection_cursor < self.selectable_indices.len().saturating_sub(1) {
            self.selection_cursor += 1;
            self.selected_index = self.selectable_indices[self.selection_cursor];
        }
    }

    /// Move to top (first selectable row)
    pub fn move_to_top(&mut self) {
        self.selection_cursor = 0;
        self.selected_index = self.selectable_indices.first().copied().unwrap_or(0);
    }

    /// Move to bottom (last selectable row)
    pub fn move_to_bottom(&mut self) {
        if let Some(&last) = self.selectable_indices.last() {
            self.selection_cursor = self.selectable_indices.len().saturating_sub(1);
            self.selected_index = last;
        }
    }

    pub fn toggle_margin(&mut self) {
        self.margin_visible = !self.margin_visible;
    }
}
