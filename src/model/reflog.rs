//! Reflog label model

/// Display class of a reflog record, derived from its subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflogLabel {
    Commit,
    Amend,
    Merge,
    Checkout,
    Reset,
    Rebase,
    CherryPick,
    Remote,
    Other,
}

/// Label → class table; anything not listed is [`ReflogLabel::Other`]
pub const REFLOG_LABELS: [(&str, ReflogLabel); 11] = [
    ("commit", ReflogLabel::Commit),
    ("amend", ReflogLabel::Amend),
    ("merge", ReflogLabel::Merge),
    ("checkout", ReflogLabel::Checkout),
    ("branch", ReflogLabel::Checkout),
    ("reset", ReflogLabel::Reset),
    ("rebase", ReflogLabel::Rebase),
    ("cherry-pick", ReflogLabel::CherryPick),
    ("initial", ReflogLabel::Commit),
    ("pull", ReflogLabel::Remote),
    ("clone", ReflogLabel::Remote),
];

impl ReflogLabel {
    /// Look up the class for a label
    pub fn lookup(label: &str) -> Self {
        REFLOG_LABELS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, class)| *class)
            .unwrap_or(ReflogLabel::Other)
    }
}
