//! Git integration tests.
//!
//! Runs the producer against temporary repositories and washes the result.

#[path = "common/mod.rs"]
mod common;

use common::TestRepo;
use common::test_repo::BASE_EPOCH;
use logwash::app::{AppOptions, Source, produce};
use logwash::git::{GitError, GitExecutor, LogRequest};
use logwash::model::{CherryMarker, LogStyle, SideMarker};
use logwash::wash::{Pagination, ShortHashResolver, Trailer, WashOutput};

fn pass(repo: &TestRepo, request: LogRequest) -> WashOutput {
    let options = AppOptions {
        pagination: Pagination::new(request.cutoff, 99_999),
        ..AppOptions::new(request)
    };
    produce(&Source::Git(GitExecutor::with_repo_path(repo.path())), &options)
        .expect("pass should succeed")
}

fn messages(output: &WashOutput) -> Vec<String> {
    output
        .entries()
        .filter_map(|e| e.message.clone())
        .collect()
}

#[test]
fn test_oneline_lists_newest_first() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("change", 3);

    let output = pass(&repo, LogRequest::new(LogStyle::Oneline, 100));

    assert_eq!(messages(&output), vec!["change 3", "change 2", "change 1"]);
    assert_eq!(output.trailer, Trailer::Blank);

    let newest = output.entries().next().unwrap();
    assert_eq!(newest.author.as_deref(), Some("Test User"));
    assert_eq!(newest.epoch(), Some(BASE_EPOCH + 120));
    assert_eq!(newest.refs.as_deref(), Some("(HEAD -> main)"));
    assert_eq!(newest.hash.as_deref(), Some(&repo.rev_parse("HEAD")[..7]));
}

#[test]
fn test_cutoff_offers_more_only_when_history_continues() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("change", 5);

    let output = pass(&repo, LogRequest::new(LogStyle::Oneline, 3));
    assert_eq!(output.produced, 3);
    assert_eq!(output.trailer, Trailer::ShowMore);

    let output = pass(&repo, LogRequest::new(LogStyle::Oneline, 5));
    assert_eq!(output.produced, 5);
    assert_eq!(output.trailer, Trailer::Blank);
}

#[test]
fn test_graph_keeps_entry_count() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("base", 1);
    repo.git(&["checkout", "-q", "-b", "topic"]);
    repo.commit("topic.txt", "t\n", "on topic");
    repo.git(&["checkout", "-q", "main"]);
    repo.commit("main.txt", "m\n", "on main");
    repo.git(&["merge", "-q", "--no-ff", "-m", "merge topic", "topic"]);

    let request = LogRequest {
        graph: true,
        ..LogRequest::new(LogStyle::Oneline, 100)
    };
    let output = pass(&repo, request);

    assert_eq!(output.produced, 4);
    assert!(output.entries().all(|e| e.graph.is_some()));
    assert!(output.rows.iter().any(|r| !r.entry.is_commit()));
}

#[test]
fn test_long_folds_message_body() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("change", 2);

    let output = pass(&repo, LogRequest::new(LogStyle::Long, 100));

    assert_eq!(output.produced, 2);
    let newest = output.entries().next().unwrap();
    let message = newest.message.as_deref().unwrap();
    assert!(message.contains("Author: Test User"));
    assert!(message.contains("change 2"));
    assert!(!message.contains("change 1"));
}

#[test]
fn test_reflog_decodes_subjects() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("change", 2);

    let output = pass(&repo, LogRequest::new(LogStyle::Reflog, 100));

    let subjects: Vec<_> = output
        .entries()
        .filter_map(|e| e.reflog_subject.clone())
        .collect();
    assert_eq!(subjects, vec!["commit", "commit (initial)"]);
    assert!(output.entries().all(|e| e.epoch().is_some()));
}

#[test]
fn test_cherry_marks_topic_commits() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("base", 1);
    repo.git(&["checkout", "-q", "-b", "topic"]);
    repo.commit("a.txt", "a\n", "topic one");
    repo.commit("b.txt", "b\n", "topic two");

    let request = LogRequest {
        range: Some("main..topic".to_string()),
        ..LogRequest::new(LogStyle::Cherry, 100)
    };
    let output = pass(&repo, request);

    assert_eq!(messages(&output), vec!["topic two", "topic one"]);
    assert!(
        output
            .entries()
            .all(|e| e.cherry_marker == Some(CherryMarker::Unmatched))
    );
    assert_eq!(output.trailer, Trailer::None);
}

#[test]
fn test_module_marks_sides() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("base", 1);
    repo.git(&["checkout", "-q", "-b", "topic"]);
    repo.commit("a.txt", "a\n", "right side");
    repo.git(&["checkout", "-q", "main"]);
    repo.commit("b.txt", "b\n", "left side");

    let request = LogRequest {
        range: Some("main...topic".to_string()),
        ..LogRequest::new(LogStyle::Module, 100)
    };
    let output = pass(&repo, request);

    let sides: Vec<_> = output
        .entries()
        .map(|e| (e.message.clone().unwrap_or_default(), e.side_marker))
        .collect();
    assert!(sides.contains(&("left side".to_string(), Some(SideMarker::Outgoing))));
    assert!(sides.contains(&("right side".to_string(), Some(SideMarker::Incoming))));
}

#[test]
fn test_line_trace() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit("traced.txt", "one\n", "add traced");
    repo.commit("other.txt", "x\n", "unrelated");
    repo.commit("traced.txt", "uno\n", "edit traced");

    let request = LogRequest {
        trace: Some(logwash::wash::TraceSpec::parse("1,1:traced.txt").unwrap()),
        ..LogRequest::new(LogStyle::Oneline, 100)
    };
    let output = pass(&repo, request);

    assert_eq!(messages(&output), vec!["edit traced", "add traced"]);
}

#[test]
fn test_short_hash_resolver() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_many("change", 1);

    let executor = GitExecutor::with_repo_path(repo.path());
    let full = repo.rev_parse("HEAD");
    let short = executor.short_hash(&full).unwrap();
    assert!(full.starts_with(&short));
    assert!(short.len() < full.len());
    assert_eq!(executor.short_hash("no-such-revision"), None);
}

#[test]
fn test_not_a_repository() {
    skip_if_no_git!();
    let dir = tempfile::tempdir().unwrap();
    let executor = GitExecutor::with_repo_path(dir.path().to_path_buf());
    let result = executor.log_raw(&LogRequest::new(LogStyle::Oneline, 10));
    assert!(matches!(result, Err(GitError::NotARepository)));
}
