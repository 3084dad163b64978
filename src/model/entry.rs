//! History entry data model

use std::fmt;
use std::str::FromStr;

/// Grammar variant used for one parse pass
///
/// Every style has exactly one grammar; see [`crate::wash::grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogStyle {
    /// `git log` with one line per commit
    #[default]
    Oneline,
    /// `git log` in its native multi-line ("medium") format
    Long,
    /// `git cherry -v` equivalence records
    Cherry,
    /// Submodule log with left/right side markers
    Module,
    /// `git reflog` records
    Reflog,
    /// Commits still left to bisect
    BisectVisualize,
    /// `git bisect log` decisions
    BisectLog,
}

impl LogStyle {
    /// All styles, in menu order
    pub const ALL: [LogStyle; 7] = [
        LogStyle::Oneline,
        LogStyle::Long,
        LogStyle::Cherry,
        LogStyle::Module,
        LogStyle::Reflog,
        LogStyle::BisectVisualize,
        LogStyle::BisectLog,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogStyle::Oneline => "oneline",
            LogStyle::Long => "long",
            LogStyle::Cherry => "cherry",
            LogStyle::Module => "module",
            LogStyle::Reflog => "reflog",
            LogStyle::BisectVisualize => "bisect-vis",
            LogStyle::BisectLog => "bisect-log",
        }
    }

    /// Whether rows of this style carry an author/date margin
    pub fn has_margin(self) -> bool {
        matches!(self, LogStyle::Oneline | LogStyle::Reflog)
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oneline" => Ok(LogStyle::Oneline),
            "long" => Ok(LogStyle::Long),
            "cherry" => Ok(LogStyle::Cherry),
            "module" => Ok(LogStyle::Module),
            "reflog" => Ok(LogStyle::Reflog),
            "bisect-vis" | "bisect-visualize" => Ok(LogStyle::BisectVisualize),
            "bisect-log" => Ok(LogStyle::BisectLog),
            other => Err(format!(
                "unknown log style '{}' (expected one of: {})",
                other,
                LogStyle::ALL.map(LogStyle::as_str).join(", ")
            )),
        }
    }
}

/// GPG signature status reported by `%G?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Good,
    Bad,
    Untrusted,
    None,
}

impl Signature {
    /// Decode the single-letter status code
    ///
    /// Expired signatures or keys (`X`, `Y`) count as untrusted, a revoked
    /// key (`R`) as bad, and an unverifiable signature (`E`) as unsigned.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'G' => Some(Signature::Good),
            'B' | 'R' => Some(Signature::Bad),
            'U' | 'X' | 'Y' => Some(Signature::Untrusted),
            'N' | 'E' => Some(Signature::None),
            _ => None,
        }
    }
}

/// `git cherry` equivalence marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CherryMarker {
    /// `-`: an equivalent change exists upstream
    Equivalent,
    /// `+`: no equivalent change upstream
    Unmatched,
}

impl CherryMarker {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(CherryMarker::Equivalent),
            "+" => Some(CherryMarker::Unmatched),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CherryMarker::Equivalent => '-',
            CherryMarker::Unmatched => '+',
        }
    }
}

/// Left/right side of a symmetric range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideMarker {
    /// `>`: only reachable from the right side (unpulled)
    Incoming,
    /// `<`: only reachable from the left side (unpushed)
    Outgoing,
}

impl SideMarker {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(SideMarker::Incoming),
            "<" => Some(SideMarker::Outgoing),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            SideMarker::Incoming => '>',
            SideMarker::Outgoing => '<',
        }
    }
}

/// One parsed history record
///
/// Which fields are meaningful depends on [`LogEntry::style`]. A record
/// without `hash` is a graph-only line, a stray body line, or a line that
/// matched no grammar at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Grammar this entry was parsed with
    pub style: LogStyle,
    /// Abbreviated commit id
    pub hash: Option<String>,
    /// Subject, or the joined body lines for the long style
    pub message: Option<String>,
    /// Raw ref decoration, e.g. `(HEAD -> main, tag: v1.0)`
    pub refs: Option<String>,
    /// Raw graph column text
    pub graph: Option<String>,
    pub author: Option<String>,
    /// Epoch seconds as text
    pub date: Option<String>,
    pub signature: Option<Signature>,
    pub cherry_marker: Option<CherryMarker>,
    pub side_marker: Option<SideMarker>,
    /// Text between `@{` and `}` of a reflog selector
    pub reflog_selector: Option<String>,
    /// Reflog subject prefix, e.g. `commit (amend)`
    pub reflog_subject: Option<String>,
}

impl LogEntry {
    /// Create an entry with every field absent
    pub fn new(style: LogStyle) -> Self {
        Self {
            style,
            hash: None,
            message: None,
            refs: None,
            graph: None,
            author: None,
            date: None,
            signature: None,
            cherry_marker: None,
            side_marker: None,
            reflog_selector: None,
            reflog_subject: None,
        }
    }

    /// True if this entry is a commit (has an id) rather than a filler line
    pub fn is_commit(&self) -> bool {
        self.hash.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// Date as epoch seconds, if present and numeric
    pub fn epoch(&self) -> Option<i64> {
        self.date.as_deref().and_then(|d| d.trim().parse().ok())
    }

    /// Append one body line to the message
    pub fn append_message(&mut self, line: &str) {
        match self.message {
            Some(ref mut message) => {
                message.push('\n');
                message.push_str(line);
            }
            None => self.message = Some(line.to_string()),
        }
    }
}
