//! Data models for logwash
//!
//! UI-independent data structures for parsed history records.

mod entry;
mod reflog;

pub use entry::{CherryMarker, LogEntry, LogStyle, SideMarker, Signature};
pub use reflog::{REFLOG_LABELS, ReflogLabel};
