//! Reflog subject decoding
//!
//! A reflog subject looks like `command [options] [(type)]: rest`, e.g.
//! `commit (amend): fix typo` or `rebase -i (finish): returning to main`.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::ReflogLabel;

/// Groups:
/// - command: first token, up to a space or colon
/// - options: run of dash-prefixed tokens
/// - kind: parenthesized type
static SUBJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<command>[^ :]+):? ?(?P<options>(?: ?-[^ :]+)+)?(?: ?\((?P<kind>[^)]+)\))?")
        .expect("Invalid reflog subject regex")
});

/// Decoded reflog subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflogSubject {
    pub command: String,
    pub options: Option<String>,
    pub kind: Option<String>,
    /// Key into the label table
    pub label: String,
    /// Text shown in the subject column
    pub text: String,
    pub class: ReflogLabel,
}

/// Decode a reflog subject into command, options, type and display label
pub fn decode_subject(subject: &str) -> ReflogSubject {
    let subject = subject.trim();
    let (command, options, kind) = match SUBJECT_REGEX.captures(subject) {
        Some(caps) => (
            caps["command"].to_string(),
            caps.name("options").map(|m| m.as_str().trim().to_string()),
            caps.name("kind").map(|m| m.as_str().to_string()),
        ),
        None => (String::new(), None, None),
    };

    let label = if command == "commit" {
        kind.clone().unwrap_or_else(|| command.clone())
    } else {
        command.clone()
    };

    let text = if command == "commit" {
        label.clone()
    } else {
        [Some(command.as_str()), options.as_deref(), kind.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    };

    let class = ReflogLabel::lookup(&label);

    ReflogSubject {
        command,
        options,
        kind,
        label,
        text,
        class,
    }
}
