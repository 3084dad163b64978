//! Command line options

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use crate::app::{AppOptions, Source};
use crate::config::{Config, ConfigError};
use crate::git::{GitExecutor, LogRequest};
use crate::model::LogStyle;
use crate::wash::{TraceSpec, WashError};

/// Input path meaning standard input
const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(
    name = "logwash",
    version,
    about = "Browse git history as washed, paginated log entries",
    long_about = "Runs git log (or reflog, cherry, bisect log) in one of several styles, \
    parses its output into entries with graph, refs, signature and reflog markers, \
    and shows them with an author/date margin and a \"show more\" row."
)]
pub struct Cli {
    #[arg(long, default_value_t = LogStyle::Oneline, help = "oneline, long, cherry, module, reflog, bisect-vis or bisect-log")]
    pub style: LogStyle,

    #[arg(long, help = "Revision range, reflog ref, or upstream..head for cherry")]
    pub range: Option<String>,

    #[arg(long, help = "Entries per pass (default from config)")]
    pub cutoff: Option<usize>,

    #[arg(long, help = "Draw the commit graph")]
    pub graph: bool,

    #[arg(long, help = "Ask git for colored output")]
    pub color: bool,

    #[arg(long, help = "Keep the ASCII graph characters")]
    pub ascii_graph: bool,

    #[arg(long, value_name = "START,END:FILE", help = "Trace a line range or :FUNCNAME:FILE")]
    pub trace: Option<String>,

    #[arg(long, value_name = "FILE", help = "Wash a saved blob instead of running git (- for stdin)")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Print plain rows and exit")]
    pub print: bool,

    #[arg(long, value_name = "FILE", help = "Configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Write debug logs to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'C', value_name = "PATH", help = "Run git in this repository")]
    pub repo: Option<PathBuf>,
}

impl Cli {
    /// Producer request; validates `--trace` before anything runs
    pub fn log_request(&self, config: &Config) -> Result<LogRequest, WashError> {
        let trace = self.trace.as_deref().map(TraceSpec::parse).transpose()?;
        Ok(LogRequest {
            style: self.style,
            range: self.range.clone(),
            cutoff: self.cutoff.unwrap_or(config.cutoff),
            graph: self.graph,
            color: self.color,
            trace,
            abbrev: config.abbrev,
        })
    }

    /// Options for the app, merged from flags and config
    pub fn app_options(&self, config: &Config) -> Result<AppOptions, ConfigError> {
        let request = self.log_request(config)?;
        let cutoff = request.cutoff;
        if cutoff == 0 {
            return Err(ConfigError::Invalid("cutoff must be at least 1".to_string()));
        }
        let glyphs = if self.ascii_graph {
            None
        } else {
            config.glyph_table()?
        };
        Ok(AppOptions {
            request,
            pagination: crate::wash::Pagination::new(cutoff, config.infinite),
            glyphs,
            margin: config.margin_spec()?,
            margin_visible: config.margin.visible,
            step: cutoff,
        })
    }

    /// Where raw log text comes from
    pub fn source(&self) -> io::Result<Source> {
        match self.input {
            Some(ref path) if path.as_os_str() == STDIN_PATH => {
                let mut raw = String::new();
                io::stdin().read_to_string(&mut raw)?;
                Ok(Source::Blob(raw))
            }
            Some(ref path) => Ok(Source::Blob(fs::read_to_string(path)?)),
            None => Ok(Source::Git(match self.repo {
                Some(ref repo) => GitExecutor::with_repo_path(repo.clone()),
                None => GitExecutor::new(),
            })),
        }
    }
}
