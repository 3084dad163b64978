//! Plain-text output for non-interactive use

use ratatui::text::Line;

use crate::ui::symbols;
use crate::wash::{MarginContext, MarginSpec, Trailer, WashOutput, render_margin};

fn plain(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Lines of a pass without styles
///
/// With a margin, each commit's primary line is followed by one space and
/// its author/date margin. The trailer becomes a final line.
pub fn render_plain(output: &WashOutput, margin: Option<&MarginSpec>, now: i64) -> Vec<String> {
    let margin = margin.filter(|_| output.style.has_margin());
    let mut lines = Vec::new();

    for row in &output.rows {
        for (n, line) in row.lines.iter().enumerate() {
            let mut text = plain(line);
            if let Some(spec) = margin
                && n == 0
                && row.entry.is_commit()
            {
                let margin = render_margin(
                    row.entry.author.as_deref(),
                    row.entry.date.as_deref(),
                    spec,
                    now,
                    MarginContext::Other,
                );
                text.push(' ');
                text.push_str(&plain(&margin));
            }
            lines.push(text);
        }
    }

    match output.trailer {
        Trailer::ShowMore => lines.push(symbols::more::SHOW_MORE.to_string()),
        Trailer::Blank => lines.push(String::new()),
        Trailer::None => {}
    }

    lines
}
