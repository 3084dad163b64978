//! Rendering for LogView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components, symbols, theme};
use crate::wash::{MarginContext, Trailer, render_margin};

use super::LogView;

/// One screen line and the selectable row it belongs to
pub(crate) struct DisplayLine {
    pub owner: Option<usize>,
    pub text: Line<'static>,
    pub margin: Option<Line<'static>>,
}

impl LogView {
    /// Render the view
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = components::history_block(self.build_title());

        if self.rows().is_empty() && self.trailer() != Trailer::ShowMore {
            let paragraph = components::no_history_state().block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let inner_height = inner.height as usize;
        if inner_height == 0 {
            return;
        }

        let lines = self.display_lines();
        let selected_line = lines
            .iter()
            .position(|l| l.owner == Some(self.selected_index))
            .unwrap_or(0);
        self.scroll_offset = self.calculate_scroll_offset(selected_line, inner_height);

        let (text_area, margin_area) = if self.shows_margin() {
            let chunks = Layout::horizontal([
                Constraint::Min(1),
                Constraint::Length(self.margin.width() as u16),
            ])
            .split(inner);
            (chunks[0], Some(chunks[1]))
        } else {
            (inner, None)
        };

        let selected_style = Style::default()
            .fg(theme::selection::FG)
            .bg(theme::selection::BG)
            .add_modifier(Modifier::BOLD);

        let mut text_lines = Vec::new();
        let mut margin_lines = Vec::new();
        for line in lines.into_iter().skip(self.scroll_offset).take(inner_height) {
            let is_selected = line.owner.is_some() && line.owner == Some(self.selected_index);
            let mut text = line.text;
            let mut margin = line.margin.unwrap_or_default();
            if is_selected {
                text = text.style(selected_style);
                margin = margin.style(selected_style);
            }
            text_lines.push(text);
            margin_lines.push(margin);
        }

        frame.render_widget(Paragraph::new(text_lines), text_area);
        if let Some(margin_area) = margin_area {
            frame.render_widget(Paragraph::new(margin_lines), margin_area);
        }
    }

    fn build_title(&self) -> Line<'static> {
        let mut title = format!(" logwash - {}", self.style());
        if let Some(ref range) = self.range {
            title.push_str(&format!(" [{}]", range));
        }
        match self.output {
            Some(_) if self.unbounded => title.push_str(" (all) "),
            Some(ref output) => title.push_str(&format!(" (cutoff {}) ", output.cutoff)),
            None => title.push(' '),
        }
        Line::from(title).bold().cyan().centered()
    }

    /// Flatten rows into screen lines
    ///
    /// Only the primary line of a row carries author and date; the margin of
    /// every other line is blank.
    pub(crate) fn display_lines(&self) -> Vec<DisplayLine> {
        let with_margin = self.shows_margin();
        let blank_margin = || render_margin(None, None, &self.margin, self.now, MarginContext::Log);
        let mut lines = Vec::new();

        for (index, row) in self.rows().iter().enumerate() {
            let owner = row.entry.is_commit().then_some(index);
            for (n, text) in row.lines.iter().enumerate() {
                let margin = with_margin.then(|| {
                    if n == 0 {
                        render_margin(
                            row.entry.author.as_deref(),
                            row.entry.date.as_deref(),
                            &self.margin,
                            self.now,
                            MarginContext::Log,
                        )
                    } else {
                        blank_margin()
                    }
                });
                lines.push(DisplayLine {
                    owner,
                    text: text.clone(),
                    margin,
                });
            }
        }

        match self.trailer() {
            Trailer::ShowMore => {
                let label = if self.unbounded {
                    symbols::more::ALL_SHOWN
                } else {
                    symbols::more::SHOW_MORE
                };
                lines.push(DisplayLine {
                    owner: Some(self.rows().len()),
                    text: Line::from(Span::styled(label, theme::more())),
                    margin: with_margin.then(blank_margin),
                });
            }
            Trailer::Blank => lines.push(DisplayLine {
                owner: None,
                text: Line::default(),
                margin: with_margin.then(blank_margin),
            }),
            Trailer::None => {}
        }

        lines
    }

    fn calculate_scroll_offset(&self, selected_line: usize, visible_lines: usize) -> usize {
        if visible_lines == 0 {
            return 0;
        }

        let mut offset = self.scroll_offset;

        // Ensure selected line is visible
        if selected_line < offset {
            offset = selected_line;
        } else if selected_line >= offset + visible_lines {
            offset = selected_line - visible_lines + 1;
        }

        offset
    }
}
