//! Buffer tests for Log View and the app frame
//!
//! Uses insta + ratatui TestBackend.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use logwash::app::{App, AppOptions, Source};
use logwash::git::LogRequest;
use logwash::model::LogStyle;
use logwash::ui::theme;
use logwash::ui::views::LogView;
use logwash::wash::{Abbreviate, WashOptions, WashOutput, wash};

const NOW: i64 = 1_420_070_400 + 120;

const TWO_COMMITS: &str = "aaa1111 (HEAD -> main) N[Ann][1420070400]Third\n\
                           bbb2222 N[Bob][1419984000]Second\n";

fn washed(raw: &str, style: LogStyle, cutoff: usize) -> WashOutput {
    let options = WashOptions {
        cutoff,
        ..WashOptions::new(style)
    };
    wash(raw, &options, &Abbreviate(7))
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn draw(view: &mut LogView, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn view_with(raw: &str, style: LogStyle, cutoff: usize) -> LogView {
    let mut view = LogView::default();
    view.now = NOW;
    view.set_output(washed(raw, style, cutoff));
    view
}

#[test]
fn test_log_view_empty() {
    let mut view = LogView::default();
    let buffer = draw(&mut view, 80, 10);
    assert!((0..10).any(|y| row(&buffer, y).contains("No history to show.")));
}

#[test]
fn test_title_shows_style_and_cutoff() {
    let mut view = view_with(TWO_COMMITS, LogStyle::Oneline, 100);
    view.range = Some("main".to_string());
    let buffer = draw(&mut view, 80, 8);
    assert!(row(&buffer, 0).contains(" logwash - oneline [main] (cutoff 100) "));
}

#[test]
fn test_rows_with_margin() {
    let mut view = view_with(TWO_COMMITS, LogStyle::Oneline, 100);
    let buffer = draw(&mut view, 60, 8);

    let first = row(&buffer, 1);
    assert!(first.starts_with("│aaa1111 main Third"));
    assert!(first.contains("Ann"));
    assert!(first.contains("  2 minutes"));

    let second = row(&buffer, 2);
    assert!(second.contains("bbb2222 Second"));
    assert!(second.contains("  1 day"));
}

#[test]
fn test_margin_hidden() {
    let mut view = view_with(TWO_COMMITS, LogStyle::Oneline, 100);
    view.toggle_margin();
    let buffer = draw(&mut view, 60, 8);
    assert!(!row(&buffer, 1).contains("Ann"));
}

#[test]
fn test_selected_row_is_highlighted() {
    let mut view = view_with(TWO_COMMITS, LogStyle::Oneline, 100);
    let buffer = draw(&mut view, 60, 8);
    assert_eq!(buffer[(1, 1)].bg, theme::selection::BG);
    assert_ne!(buffer[(1, 2)].bg, theme::selection::BG);
}

#[test]
fn test_show_more_row() {
    let mut view = view_with(TWO_COMMITS, LogStyle::Oneline, 1);
    let buffer = draw(&mut view, 60, 8);
    let more = row(&buffer, 2);
    assert_snapshot!(more.trim_matches('│').trim_end(), @"Type + to show more history");
}

#[test]
fn test_long_style_has_no_margin() {
    let raw = "commit abc1234\nAuthor: Ann <a@b>\n\n    Subject\n";
    let mut view = view_with(raw, LogStyle::Long, 100);
    let buffer = draw(&mut view, 60, 8);
    assert!(row(&buffer, 1).starts_with("│abc1234 "));
    assert!(row(&buffer, 4).contains("    Subject"));
}

#[test]
fn test_selection_scrolls_into_view() {
    let raw: String = (0..20)
        .map(|n| format!("{:07x} N[A][1]commit {}\n", 0xa000 + n, n))
        .collect();
    let mut view = view_with(&raw, LogStyle::Oneline, 100);
    for _ in 0..15 {
        view.move_down();
    }
    let buffer = draw(&mut view, 60, 8);
    assert!((1..7).any(|y| row(&buffer, y).contains("commit 15")));
    assert!(!(1..7).any(|y| row(&buffer, y).contains("commit 0 ")));
}

#[test]
fn test_app_frame_has_status_bar() {
    let options = AppOptions::new(LogRequest::new(LogStyle::Oneline, 100));
    let mut app = App::new(Source::Blob(TWO_COMMITS.to_string()), options);

    let mut terminal = Terminal::new(TestBackend::new(120, 10)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();

    let status = row(&buffer, 9);
    assert!(status.contains(" 2/100 entries "));
    assert!(status.contains("[+] More"));
    assert!(status.contains("[q] Quit"));
}
