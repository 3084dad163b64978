//! Application state

use crate::git::{GitExecutor, LogRequest};
use crate::wash::{GlyphTable, MarginSpec, Pagination};
use crate::ui::views::LogView;

/// Where raw log text comes from
#[derive(Debug, Clone)]
pub enum Source {
    /// Run git for every pass
    Git(GitExecutor),
    /// A saved blob; every pass re-washes the same text
    Blob(String),
}

/// Everything the app needs besides its source
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Style, range and flags for the producer; its cutoff is overwritten
    /// from `pagination` on every pass
    pub request: LogRequest,
    pub pagination: Pagination,
    /// Graph substitutions; `None` keeps ASCII
    pub glyphs: Option<GlyphTable>,
    pub margin: MarginSpec,
    pub margin_visible: bool,
    /// Entries added by the step key (the configured cutoff)
    pub step: usize,
}

impl AppOptions {
    pub fn new(request: LogRequest) -> Self {
        Self {
            pagination: Pagination::new(request.cutoff, crate::wash::pagination::INFINITE_CUTOFF),
            step: request.cutoff,
            request,
            glyphs: Some(GlyphTable::default()),
            margin: MarginSpec::default(),
            margin_visible: true,
        }
    }
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Log view state
    pub log_view: LogView,
    pub source: Source,
    pub options: AppOptions,
    /// Error message to display
    pub error_message: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`] and run the first pass.
    pub fn new(source: Source, options: AppOptions) -> Self {
        let mut log_view = LogView::new(options.margin.clone());
        log_view.margin_visible = options.margin_visible;
        log_view.range = options.request.range.clone();
        log_view.step = options.step;

        let mut app = Self {
            running: true,
            log_view,
            source,
            options,
            error_message: None,
        };

        app.refresh_log();

        app
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }
}
