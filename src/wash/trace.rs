//! Line-trace (`git log -L`) expressions
//!
//! Accepted forms:
//! - `<start>,<end>:<file>` where start is a line number or `/regex/`, and end
//!   is a line number, `+N`/`-N` offset, `/regex/`, or empty
//! - `:<funcname>:<file>`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::WashError;

static TRACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<start>\d+|/[^/]+/),(?P<end>[+-]?\d+|/[^/]+/)?",
        r"|:(?P<func>[^:]+))",
        r":(?P<file>.+)$",
    ))
    .expect("Invalid trace regex")
});

/// What part of the file to trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceRange {
    Lines { start: String, end: Option<String> },
    Function(String),
}

/// A validated `-L` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSpec {
    pub range: TraceRange,
    pub file: String,
}

impl TraceSpec {
    /// Validate a user-supplied trace expression
    pub fn parse(spec: &str) -> Result<Self, WashError> {
        let invalid = |reason: &str| WashError::InvalidTraceSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let caps = TRACE_REGEX
            .captures(spec.trim())
            .ok_or_else(|| invalid("expected START,END:FILE or :FUNCNAME:FILE"))?;

        let file = caps["file"].to_string();

        if let Some(func) = caps.name("func") {
            return Ok(Self {
                range: TraceRange::Function(func.as_str().to_string()),
                file,
            });
        }

        let start = caps["start"].to_string();
        let end = caps.name("end").map(|m| m.as_str().to_string());

        if let Ok(first) = start.parse::<u64>() {
            if first == 0 {
                return Err(invalid("line numbers start at 1"));
            }
            if let Some(last) = end.as_deref().and_then(|e| e.parse::<u64>().ok()) {
                if last < first {
                    return Err(invalid("end line is before start line"));
                }
            }
        }

        Ok(Self {
            range: TraceRange::Lines { start, end },
            file,
        })
    }

    /// The argument passed to git
    pub fn to_arg(&self) -> String {
        format!("-L{}", self)
    }
}

impl fmt::Display for TraceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            TraceRange::Lines { start, end } => {
                write!(f, "{},{}:{}", start, end.as_deref().unwrap_or(""), self.file)
            }
            TraceRange::Function(name) => write!(f, ":{}:{}", name, self.file),
        }
    }
}
