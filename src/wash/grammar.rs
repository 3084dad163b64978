//! Line grammars, one per [`LogStyle`]
//!
//! Each grammar is a regex with named groups. [`capture`] turns a match into
//! a [`LineFields`] record so callers never touch group indices.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::LogStyle;

/// A field a grammar can populate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Graph,
    Hash,
    Refs,
    Signature,
    Author,
    Date,
    Message,
    Cherry,
    Side,
    ReflogSelector,
    ReflogSubject,
}

impl Field {
    /// Named group carrying this field
    pub fn group(self) -> &'static str {
        match self {
            Field::Graph => "graph",
            Field::Hash => "hash",
            Field::Refs => "refs",
            Field::Signature => "gpg",
            Field::Author => "author",
            Field::Date => "date",
            Field::Message => "msg",
            Field::Cherry => "cherry",
            Field::Side => "side",
            Field::ReflogSelector => "refsel",
            Field::ReflogSubject => "refsub",
        }
    }
}

/// `git log --format='%h%d %G?[%aN][%at]%s'`, optionally with `--graph`
///
/// Example: `* | abc1234 (HEAD -> main) G[Jane Doe][1420070400]Add parser`
static ONELINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<graph>(?: *[-_/|\\*o.] *)+ *)?",
        r"(?:(?P<hash>[0-9a-fA-F]+) ",
        r"(?:(?P<refs>\([^()]+\)) )?",
        r"(?P<gpg>[BGUXYREN])?",
        r"\[(?P<author>[^\]]*)\]",
        r"\[(?P<date>[^\]]*)\]",
        r"(?P<msg>.*))?$",
    ))
    .expect("Invalid oneline regex")
});

/// Native multi-line `git log` output
///
/// Primary line: `commit abc1234 (refs)`; every other line is body text.
static LONG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<graph>(?:[-_/|\\*o.] *)+ *)?",
        r"(?:commit (?P<hash>[0-9a-fA-F]+)(?: (?P<refs>\([^()]+\)))?",
        r"|(?P<msg>.+))?$",
    ))
    .expect("Invalid long regex")
});

/// `git cherry -v`: `+ abc1234 subject`
static CHERRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<cherry>[-+]) (?P<hash>[0-9a-fA-F]+) (?P<msg>.*)$")
        .expect("Invalid cherry regex")
});

/// `git log --left-right --format='%m %h %s'`: `< abc1234 subject`
static MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<side>[<>]) )?(?P<hash>[0-9a-fA-F]+) (?P<msg>.*)$")
        .expect("Invalid module regex")
});

/// `git reflog --format='%h [%gn] %gd %gs' --date=raw`
///
/// Example: `abc1234 [Jane] HEAD@{1420070400 +0100} commit (amend): fix`
static REFLOG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<hash>[^ ]+) ",
        r"(?:\[(?P<author>[^\]]*)\] )?",
        r"(?:[^@ ]+@\{(?P<refsel>[^}]+)\} ",
        r"(?P<refsub>merge |autosave |restart |[^:]+: )?",
        r"(?P<msg>.*)| )$",
    ))
    .expect("Invalid reflog regex")
});

/// `git log --bisect --format='%h%d %s'`
static BISECT_VIS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hash>[0-9a-fA-F]+) (?:(?P<refs>\([^()]+\)) )?(?P<msg>.+)$")
        .expect("Invalid bisect-vis regex")
});

/// `git bisect log`: `# bad: [<full hash>] subject`
static BISECT_LOG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# (?P<refs>bad:|skip:|good:) \[(?P<hash>[^\]]+)\] (?P<msg>.+)$")
        .expect("Invalid bisect-log regex")
});

/// Regex for a style
pub fn regex_for(style: LogStyle) -> &'static Regex {
    match style {
        LogStyle::Oneline => &ONELINE_REGEX,
        LogStyle::Long => &LONG_REGEX,
        LogStyle::Cherry => &CHERRY_REGEX,
        LogStyle::Module => &MODULE_REGEX,
        LogStyle::Reflog => &REFLOG_REGEX,
        LogStyle::BisectVisualize => &BISECT_VIS_REGEX,
        LogStyle::BisectLog => &BISECT_LOG_REGEX,
    }
}

/// Fields a style's grammar can populate, in line order
pub fn fields_for(style: LogStyle) -> &'static [Field] {
    match style {
        LogStyle::Oneline => &[
            Field::Graph,
            Field::Hash,
            Field::Refs,
            Field::Signature,
            Field::Author,
            Field::Date,
            Field::Message,
        ],
        LogStyle::Long => &[Field::Graph, Field::Hash, Field::Refs, Field::Message],
        LogStyle::Cherry => &[Field::Cherry, Field::Hash, Field::Message],
        LogStyle::Module => &[Field::Side, Field::Hash, Field::Message],
        LogStyle::Reflog => &[
            Field::Hash,
            Field::Author,
            Field::ReflogSelector,
            Field::ReflogSubject,
            Field::Message,
        ],
        LogStyle::BisectVisualize => &[Field::Hash, Field::Refs, Field::Message],
        LogStyle::BisectLog => &[Field::Refs, Field::Hash, Field::Message],
    }
}

/// Optional-field record for one matched line
///
/// Text fields borrow from the line; `graph` is a byte range so callers can
/// look up the styles attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFields<'a> {
    pub graph: Option<Range<usize>>,
    pub hash: Option<&'a str>,
    pub refs: Option<&'a str>,
    pub signature: Option<&'a str>,
    pub author: Option<&'a str>,
    pub date: Option<&'a str>,
    pub message: Option<&'a str>,
    pub cherry: Option<&'a str>,
    pub side: Option<&'a str>,
    pub reflog_selector: Option<&'a str>,
    pub reflog_subject: Option<&'a str>,
}

impl<'a> LineFields<'a> {
    /// True if the line matched but no field was captured
    pub fn is_empty(&self) -> bool {
        *self == LineFields::default()
    }

    fn set(&mut self, field: Field, caps: &Captures<'a>) {
        let Some(m) = caps.name(field.group()) else {
            return;
        };
        let text = Some(m.as_str());
        match field {
            Field::Graph => self.graph = Some(m.range()),
            Field::Hash => self.hash = text,
            Field::Refs => self.refs = text,
            Field::Signature => self.signature = text,
            Field::Author => self.author = text,
            Field::Date => self.date = text,
            Field::Message => self.message = text,
            Field::Cherry => self.cherry = text,
            Field::Side => self.side = text,
            Field::ReflogSelector => self.reflog_selector = text,
            Field::ReflogSubject => self.reflog_subject = text,
        }
    }
}

/// Match `line` against the grammar for `style`
///
/// Returns `None` when the line does not fit the grammar at all.
pub fn capture(style: LogStyle, line: &str) -> Option<LineFields<'_>> {
    let caps = regex_for(style).captures(line)?;
    let mut fields = LineFields::default();
    for &field in fields_for(style) {
        fields.set(field, &caps);
    }
    Some(fields)
}
