//! Log washing engine
//!
//! Turns the raw text of a history query into [`LogRow`]s:
//! - [`ansi`]: color escapes → style ranges
//! - [`grammar`]: one line grammar per [`LogStyle`](crate::model::LogStyle)
//! - [`graph`]: ASCII graph → box-drawing glyphs
//! - [`reflog`]: reflog subject decoding
//! - [`margin`] / [`duration`]: author and relative date column
//! - [`pagination`]: cutoff policy and the "show more" decision

pub mod ansi;
pub mod duration;
pub mod grammar;
pub mod graph;
pub mod margin;
pub mod pagination;
pub mod reflog;
mod refs;
pub mod trace;
mod washer;

pub use duration::{DurationSpec, DurationUnit, format_duration};
pub use graph::GlyphTable;
pub use margin::{MarginContext, MarginSpec, render_margin};
pub use pagination::{Growth, Pagination, should_show_more};
pub use trace::TraceSpec;
pub use washer::{Abbreviate, LogRow, ShortHashResolver, Trailer, WashOptions, WashOutput, wash};

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Errors surfaced by the washing engine
///
/// Lines that match no grammar and records cut short by end of input are
/// recovered inside the washer and never reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WashError {
    #[error("Invalid line trace '{spec}': {reason}")]
    InvalidTraceSpec { spec: String, reason: String },

    #[error("Invalid duration table: {0}")]
    InvalidDurationSpec(String),

    #[error("Invalid margin: {0}")]
    InvalidMarginSpec(String),
}
