use super::*;
use crate::model::{CherryMarker, LogStyle, ReflogLabel, SideMarker, Signature};
use crate::ui::theme;
use ratatui::style::{Color, Style};

fn options(style: LogStyle) -> WashOptions {
    WashOptions::new(style)
}

fn wash_default(raw: &str, style: LogStyle) -> WashOutput {
    let options = options(style);
    wash(raw, &options, &Abbreviate(options.abbrev))
}

fn hashes(output: &WashOutput) -> Vec<&str> {
    output
        .entries()
        .filter_map(|e| e.hash.as_deref())
        .collect()
}

struct FixedResolver;

impl ShortHashResolver for FixedResolver {
    fn short_hash(&self, _rev: &str) -> Option<String> {
        Some("deadbee".to_string())
    }
}

// =============================================================================
// oneline
// =============================================================================

#[test]
fn test_oneline_entries() {
    let raw = "abc1234 (HEAD -> main) G[Jane Doe][1420070400]Add parser\n\
               def5678 N[John][1420000000]Initial commit\n";
    let output = wash_default(raw, LogStyle::Oneline);

    assert_eq!(output.rows.len(), 2);
    assert_eq!(output.produced, 2);
    assert_eq!(output.trailer, Trailer::Blank);

    let first = &output.rows[0].entry;
    assert_eq!(first.hash.as_deref(), Some("abc1234"));
    assert_eq!(first.refs.as_deref(), Some("(HEAD -> main)"));
    assert_eq!(first.author.as_deref(), Some("Jane Doe"));
    assert_eq!(first.date.as_deref(), Some("1420070400"));
    assert_eq!(first.message.as_deref(), Some("Add parser"));
    assert_eq!(first.signature, Some(Signature::Good));
    assert_eq!(output.rows[0].text(), "abc1234 main Add parser");

    let second = &output.rows[1].entry;
    assert_eq!(second.signature, Some(Signature::None));
    assert_eq!(output.rows[1].text(), "def5678 Initial commit");
}

#[test]
fn test_every_signature_code_is_an_entry() {
    let raw = "aaa1111 G[Ann][1]ok\n\
               bbb2222 E[Bob][2]signed, key missing\n\
               ccc3333 X[Cy][3]expired\n\
               ddd4444 Y[Di][4]expired key\n\
               eee5555 R[Ed][5]revoked\n";
    let output = wash_default(raw, LogStyle::Oneline);

    assert_eq!(output.produced, 5);
    assert!(output.rows.iter().all(|r| r.entry.is_commit()));
    let signatures: Vec<_> = output.entries().map(|e| e.signature).collect();
    assert_eq!(
        signatures,
        vec![
            Some(Signature::Good),
            Some(Signature::None),
            Some(Signature::Untrusted),
            Some(Signature::Untrusted),
            Some(Signature::Bad),
        ]
    );
    assert_eq!(output.rows[1].text(), "bbb2222 signed, key missing");
}

#[test]
fn test_signature_selects_message_style() {
    let output = wash_default("abc1234 B[Eve][1]Sneaky\n", LogStyle::Oneline);
    let line = &output.rows[0].lines[0];
    let message = line.spans.last().unwrap();
    assert_eq!(message.content, "Sneaky");
    assert_eq!(message.style, theme::signature(Some(Signature::Bad)));
}

#[test]
fn test_colored_graph_keeps_styles() {
    let raw = "\x1b[31m*\x1b[m abc1234 N[J][1]Msg\n\x1b[31m|\x1b[m\x1b[32m\\\x1b[m\n";
    let output = wash_default(raw, LogStyle::Oneline);

    assert_eq!(output.rows.len(), 2);
    assert_eq!(output.rows[0].text(), "abc1234 ◆ Msg");
    assert_eq!(output.rows[0].entry.graph.as_deref(), Some("* "));

    let spans = &output.rows[0].lines[0].spans;
    assert_eq!(spans[2].content, "◆");
    assert_eq!(spans[2].style, Style::default().fg(Color::Red));
    assert_eq!(spans[3].content, " ");
    assert_eq!(spans[3].style, theme::graph());

    // Graph-only line gets a hash-wide placeholder
    let graph_row = &output.rows[1];
    assert!(!graph_row.entry.is_commit());
    assert_eq!(graph_row.text(), "        │╲");
    let spans = &graph_row.lines[0].spans;
    assert_eq!(spans[1].style, Style::default().fg(Color::Red));
    assert_eq!(spans[2].style, Style::default().fg(Color::Green));
}

#[test]
fn test_ascii_graph_without_glyph_table() {
    let mut options = options(LogStyle::Oneline);
    options.glyphs = None;
    let output = wash("* abc1234 N[J][1]Msg\n|/\n", &options, &Abbreviate(7));
    assert_eq!(output.rows[0].text(), "abc1234 * Msg");
    assert_eq!(output.rows[1].text(), "        |/");
}

#[test]
fn test_unmatched_line_passes_through() {
    let raw = "warning: refname 'x' is ambiguous.\nabc1234 N[J][1]Msg\n";
    let output = wash_default(raw, LogStyle::Oneline);
    assert_eq!(output.rows.len(), 2);
    assert!(!output.rows[0].entry.is_commit());
    assert_eq!(output.rows[0].text(), "warning: refname 'x' is ambiguous.");
    assert_eq!(output.produced, 1);
}

#[test]
fn test_blank_line_passes_through_unchanged() {
    let output = wash_default("abc1234 N[J][1]Msg\n\ndef5678 N[J][1]Msg\n", LogStyle::Oneline);
    assert_eq!(output.rows.len(), 3);
    assert_eq!(output.rows[1].text(), "");
}

#[test]
fn test_empty_input() {
    let output = wash_default("", LogStyle::Oneline);
    assert!(output.rows.is_empty());
    assert_eq!(output.produced, 0);
    assert_eq!(output.trailer, Trailer::Blank);
}

// =============================================================================
// pagination
// =============================================================================

fn three_commits() -> &'static str {
    "aaa1111 N[A][3]Third\nbbb2222 N[B][2]Second\nccc3333 N[C][1]First\n"
}

#[test]
fn test_cutoff_stops_and_offers_more() {
    let mut options = options(LogStyle::Oneline);
    options.cutoff = 2;
    let output = wash(three_commits(), &options, &Abbreviate(7));

    assert_eq!(hashes(&output), vec!["aaa1111", "bbb2222"]);
    assert_eq!(output.produced, 2);
    assert_eq!(output.trailer, Trailer::ShowMore);
}

#[test]
fn test_exactly_cutoff_entries_has_no_marker() {
    let mut options = options(LogStyle::Oneline);
    options.cutoff = 2;
    let raw = "aaa1111 N[A][3]Third\nbbb2222 N[B][2]Second\n";
    let output = wash(raw, &options, &Abbreviate(7));

    assert_eq!(output.produced, 2);
    assert_eq!(output.trailer, Trailer::Blank);
}

#[test]
fn test_fewer_than_cutoff() {
    let mut options = options(LogStyle::Oneline);
    options.cutoff = 5;
    let output = wash(three_commits(), &options, &Abbreviate(7));
    assert_eq!(output.produced, 3);
    assert_eq!(output.trailer, Trailer::Blank);
}

// =============================================================================
// long
// =============================================================================

const LONG_LOG: &str = "commit 1111111 (HEAD -> main)
Author: Jane <jane@example.com>
Date:   Thu Jan 1 2015

    Second commit

commit 2222222
Author: John <john@example.com>
Date:   Wed Dec 31 2014

    First commit
";

#[test]
fn test_long_folds_body_into_entry() {
    let output = wash_default(LONG_LOG, LogStyle::Long);

    assert_eq!(output.rows.len(), 2);
    assert_eq!(hashes(&output), vec!["1111111", "2222222"]);

    let first = &output.rows[0];
    assert_eq!(first.lines.len(), 6);
    assert_eq!(
        first.entry.message.as_deref(),
        Some("Author: Jane <jane@example.com>\nDate:   Thu Jan 1 2015\n    Second commit")
    );
    assert_eq!(first.lines[0].to_string(), "1111111 main ");

    let second = &output.rows[1];
    assert_eq!(second.lines.len(), 5);
    assert!(second.entry.message.as_deref().unwrap().ends_with("    First commit"));
}

#[test]
fn test_long_incomplete_record_is_kept() {
    let raw = "commit 1111111\nAuthor: Jane <jane@example.com>";
    let output = wash_default(raw, LogStyle::Long);
    assert_eq!(output.rows.len(), 1);
    assert_eq!(
        output.rows[0].entry.message.as_deref(),
        Some("Author: Jane <jane@example.com>")
    );
}

#[test]
fn test_long_cutoff() {
    let mut options = options(LogStyle::Long);
    options.cutoff = 1;
    let output = wash(LONG_LOG, &options, &Abbreviate(7));
    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.produced, 1);
    assert_eq!(output.trailer, Trailer::ShowMore);
}

#[test]
fn test_long_with_graph() {
    let raw = "* commit 1111111\n| Author: Jane\n|\n* commit 2222222\n  Author: John\n";
    let output = wash_default(raw, LogStyle::Long);
    assert_eq!(output.rows.len(), 2);
    assert_eq!(output.rows[0].entry.message.as_deref(), Some("Author: Jane"));
    assert_eq!(output.rows[0].lines.len(), 3);
    assert_eq!(output.rows[0].lines[1].to_string(), "        │ Author: Jane");
}

// =============================================================================
// cherry / module / bisect
// =============================================================================

#[test]
fn test_cherry_is_reversed() {
    let raw = "+ aaa1111 oldest\n- bbb2222 middle\n+ ccc3333 newest\n";
    let output = wash_default(raw, LogStyle::Cherry);

    assert_eq!(hashes(&output), vec!["ccc3333", "bbb2222", "aaa1111"]);
    assert_eq!(
        output.rows[1].entry.cherry_marker,
        Some(CherryMarker::Equivalent)
    );
    assert_eq!(output.rows[0].text(), "+ ccc3333 newest");
    assert_eq!(output.trailer, Trailer::None);
}

#[test]
fn test_module_side_markers() {
    let output = wash_default("< 1a2b3c4 Local\n> 5d6e7f8 Remote\n", LogStyle::Module);
    assert_eq!(output.rows[0].entry.side_marker, Some(SideMarker::Outgoing));
    assert_eq!(output.rows[1].entry.side_marker, Some(SideMarker::Incoming));
    assert_eq!(output.rows[0].text(), "< 1a2b3c4 Local");
}

#[test]
fn test_bisect_visualize_refs() {
    let output = wash_default("1a2b3c4 (refs/bisect/bad) Break it\n", LogStyle::BisectVisualize);
    assert_eq!(output.rows[0].entry.refs.as_deref(), Some("(refs/bisect/bad)"));
    assert_eq!(output.rows[0].text(), "1a2b3c4 bad Break it");
}

#[test]
fn test_bisect_log_resolves_hash() {
    let raw = "git bisect start\n\
               # bad: [1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b] Break it\n\
               git bisect bad 1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b\n";
    let output = wash_default(raw, LogStyle::BisectLog);

    assert_eq!(output.rows.len(), 3);
    assert!(!output.rows[0].entry.is_commit());
    let entry = &output.rows[1].entry;
    assert_eq!(entry.hash.as_deref(), Some("1a2b3c4"));
    assert_eq!(entry.refs.as_deref(), Some("bad:"));
    assert_eq!(output.rows[1].text(), "1a2b3c4 bad Break it");

    let output = wash(raw, &options(LogStyle::BisectLog), &FixedResolver);
    assert_eq!(output.rows[1].entry.hash.as_deref(), Some("deadbee"));
}

// =============================================================================
// reflog
// =============================================================================

#[test]
fn test_reflog_entries() {
    let raw = "1a2b3c4 [Jane] HEAD@{1420070400 +0100} commit (amend): fixed typo\n\
               5d6e7f8 [Jane] HEAD@{1420000000 +0100} checkout: moving from a to b\n";
    let output = wash_default(raw, LogStyle::Reflog);

    let entry = &output.rows[0].entry;
    assert_eq!(entry.author.as_deref(), Some("Jane"));
    assert_eq!(entry.date.as_deref(), Some("1420070400"));
    assert_eq!(entry.reflog_selector.as_deref(), Some("1420070400 +0100"));
    assert_eq!(entry.reflog_subject.as_deref(), Some("commit (amend)"));
    assert_eq!(entry.message.as_deref(), Some("fixed typo"));
    assert_eq!(output.rows[0].text(), "1a2b3c4 0  amend            fixed typo");
    assert_eq!(output.rows[1].text(), "5d6e7f8 1  checkout         moving from a to b");

    let subject = &output.rows[0].lines[0].spans[3];
    assert_eq!(subject.style, theme::reflog(ReflogLabel::Amend));

    let subject = &output.rows[1].lines[0].spans[3];
    assert_eq!(subject.content, "checkout         ");
    assert_eq!(subject.style, theme::reflog(ReflogLabel::Checkout));
}

#[test]
fn test_reflog_index_selector_is_shown() {
    let output = wash_default("1a2b3c4 HEAD@{0} reset: moving to HEAD~1\n", LogStyle::Reflog);
    let entry = &output.rows[0].entry;
    assert_eq!(entry.date, None);
    assert_eq!(output.rows[0].text(), "1a2b3c4 0  reset            moving to HEAD~1");
}
