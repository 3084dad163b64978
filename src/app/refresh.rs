//! Producing and washing a pass

use crate::git::{GitError, LogRequest};
use crate::wash::{Abbreviate, Growth, WashOptions, WashOutput, wash};

use super::state::{App, AppOptions, Source};

/// Produce the raw blob and wash it at the current cutoff
///
/// Every call is a fresh pass; nothing from an earlier pass is reused.
pub fn produce(source: &Source, options: &AppOptions) -> Result<WashOutput, GitError> {
    let cutoff = options.pagination.cutoff();
    let request = &options.request;
    let wash_options = WashOptions {
        style: request.style,
        cutoff,
        abbrev: request.abbrev,
        glyphs: options.glyphs.clone(),
    };

    let output = match source {
        Source::Git(git) => {
            let request = LogRequest {
                cutoff,
                ..request.clone()
            };
            let raw = git.log_raw(&request)?;
            wash(&raw, &wash_options, git)
        }
        Source::Blob(raw) => wash(raw, &wash_options, &Abbreviate(request.abbrev)),
    };
    Ok(output)
}

impl App {
    /// Run a new pass and show it
    pub fn refresh_log(&mut self) {
        match produce(&self.source, &self.options) {
            Ok(output) => {
                self.log_view.unbounded = self.options.pagination.is_unbounded();
                self.log_view.now = chrono::Utc::now().timestamp();
                self.log_view.set_output(output);
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("log pass failed: {}", e);
                self.error_message = Some(format!("git error: {}", e));
            }
        }
    }

    /// Grow the cutoff and re-run the pass
    pub(crate) fn grow(&mut self, growth: Growth) {
        let before = self.options.pagination.cutoff();
        let after = self.options.pagination.grow(growth);
        log::info!("cutoff {} -> {}", before, after);
        if after != before {
            self.refresh_log();
        }
    }
}
