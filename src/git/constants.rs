//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and format strings.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const REFLOG: &str = "reflog";
    pub const REFLOG_SHOW: &str = "show";
    pub const CHERRY: &str = "cherry";
    pub const BISECT: &str = "bisect";
    pub const BISECT_LOG: &str = "log";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if started in this directory (global flag)
    pub const REPO_PATH: &str = "-C";
    pub const NO_COLOR: &str = "--no-color";
    pub const COLOR: &str = "--color";
    pub const GRAPH: &str = "--graph";
    pub const DECORATE_SHORT: &str = "--decorate=short";
    pub const ABBREV_COMMIT: &str = "--abbrev-commit";
    /// Native multi-line format, regardless of `format.pretty`
    pub const PRETTY_MEDIUM: &str = "--pretty=medium";
    pub const LEFT_RIGHT: &str = "--left-right";
    pub const BISECT: &str = "--bisect";
    pub const VERBOSE: &str = "-v";
    pub const DATE_RAW: &str = "--date=raw";
    pub const SHORT: &str = "--short";
    pub const VERIFY: &str = "--verify";
    pub const QUIET: &str = "--quiet";
}

/// `--format` strings, one per style that needs one
///
/// Each must stay in step with its grammar in `wash::grammar`.
pub mod formats {
    pub const ONELINE: &str = "--format=%h%d %G?[%aN][%at]%s";
    pub const MODULE: &str = "--format=%m %h %s";
    pub const REFLOG: &str = "--format=%h [%gn] %gd %gs";
    pub const BISECT_VIS: &str = "--format=%h%d %s";
}

/// Special git values
pub mod special {
    /// Reference shown by `git reflog` when none is given
    pub const DEFAULT_REFLOG_REF: &str = "HEAD";
    /// Separator between upstream and head in a cherry range
    pub const RANGE_SEPARATOR: &str = "..";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
