//! UI symbols and fixed labels
//!
//! ## Character Set Policy
//! - Graph glyphs come from [`crate::wash::graph::UNICODE_GLYPHS`] unless
//!   `--ascii-graph` is given
//! - Truncation uses a single-column ellipsis

/// Ellipsis used when truncating margin text
pub const ELLIPSIS: char = '…';

/// Labels for the trailing pagination marker
pub mod more {
    /// Shown when the cutoff was reached
    pub const SHOW_MORE: &str = "Type + to show more history";
    /// Shown when the cutoff is unbounded and was still reached
    pub const ALL_SHOWN: &str = "(history limit reached)";
}

/// Empty state indicators
pub mod empty {
    pub const TITLE: &str = "No history to show.";
    pub const HINT: &str = "Hint: check the range, or try another style with --style";
}
