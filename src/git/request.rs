//! Per-style argument lists
//!
//! Building the argument list is pure so it can be tested without a
//! repository. [`GitExecutor`](super::GitExecutor) only adds global flags.

use super::constants::{commands, flags, formats, special};
use crate::model::LogStyle;
use crate::wash::TraceSpec;

/// What to ask git for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRequest {
    pub style: LogStyle,
    /// Revision range, reflog ref, or `upstream..head` for cherry
    pub range: Option<String>,
    /// Entries the washer keeps; git is asked for one more
    pub cutoff: usize,
    pub graph: bool,
    pub color: bool,
    pub trace: Option<TraceSpec>,
    pub abbrev: usize,
}

impl LogRequest {
    pub fn new(style: LogStyle, cutoff: usize) -> Self {
        Self {
            style,
            range: None,
            cutoff,
            graph: false,
            color: false,
            trace: None,
            abbrev: 7,
        }
    }

    /// Whether this style goes through `git log` and may draw a graph
    fn supports_graph(&self) -> bool {
        matches!(self.style, LogStyle::Oneline | LogStyle::Long)
    }

    /// Arguments after `git`
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();
        let limit = format!("-n{}", self.cutoff.saturating_add(1));
        let abbrev = format!("--abbrev={}", self.abbrev);

        match self.style {
            LogStyle::Oneline => {
                args.extend(
                    [
                        commands::LOG,
                        formats::ONELINE,
                        flags::DECORATE_SHORT,
                    ]
                    .map(String::from),
                );
                args.push(abbrev);
                args.push(limit);
            }
            LogStyle::Long => {
                args.extend(
                    [
                        commands::LOG,
                        flags::PRETTY_MEDIUM,
                        flags::DECORATE_SHORT,
                        flags::ABBREV_COMMIT,
                    ]
                    .map(String::from),
                );
                args.push(abbrev);
                args.push(limit);
            }
            LogStyle::Module => {
                args.extend(
                    [
                        commands::LOG,
                        flags::LEFT_RIGHT,
                        formats::MODULE,
                    ]
                    .map(String::from),
                );
                args.push(abbrev);
                args.push(limit);
            }
            LogStyle::BisectVisualize => {
                args.extend(
                    [
                        commands::LOG,
                        flags::BISECT,
                        formats::BISECT_VIS,
                    ]
                    .map(String::from),
                );
                args.push(abbrev);
                args.push(limit);
            }
            LogStyle::Reflog => {
                args.extend(
                    [
                        commands::REFLOG,
                        commands::REFLOG_SHOW,
                        formats::REFLOG,
                        flags::DATE_RAW,
                    ]
                    .map(String::from),
                );
                args.push(abbrev);
                args.push(limit);
            }
            LogStyle::Cherry => {
                args.extend([commands::CHERRY, flags::VERBOSE].map(String::from));
                args.push(abbrev);
            }
            LogStyle::BisectLog => {
                args.extend([commands::BISECT, commands::BISECT_LOG].map(String::from));
            }
        }

        if self.supports_graph() {
            if self.graph {
                args.push(flags::GRAPH.to_string());
            }
            args.push(if self.color { flags::COLOR } else { flags::NO_COLOR }.to_string());
            if let Some(ref trace) = self.trace {
                args.push(trace.to_arg());
            }
        } else if self.style != LogStyle::BisectLog && self.style != LogStyle::Cherry {
            args.push(flags::NO_COLOR.to_string());
        }

        if self.trace.is_some() && !self.supports_graph() {
            log::warn!("line trace ignored for {} style", self.style);
        }

        match self.style {
            LogStyle::Cherry => {
                if let Some(ref range) = self.range {
                    match range.split_once(special::RANGE_SEPARATOR) {
                        Some((upstream, head)) => {
                            args.push(upstream.to_string());
                            if !head.is_empty() {
                                args.push(head.to_string());
                            }
                        }
                        None => args.push(range.clone()),
                    }
                }
            }
            LogStyle::Reflog => {
                args.push(
                    self.range
                        .clone()
                        .unwrap_or_else(|| special::DEFAULT_REFLOG_REF.to_string()),
                );
            }
            LogStyle::BisectLog => {}
            _ => {
                if let Some(ref range) = self.range {
                    args.push(range.clone());
                }
            }
        }

        args
    }
}
