//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::App;
use crate::keys;
use crate::ui::widgets::{render_error_banner, render_log_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let log_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        self.log_view.render(frame, log_area);

        let unbounded = self.options.pagination.is_unbounded();
        let produced = self.log_view.output.as_ref().map_or(0, |o| o.produced);
        render_log_status_bar(
            frame,
            produced,
            self.options.pagination.cutoff(),
            unbounded,
            &keys::log_view_hints(unbounded),
        );

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }
}
