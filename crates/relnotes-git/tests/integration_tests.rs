// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for relnotes-git
//!
//! These tests build real repositories and run both backends against them.


use relnotes_git::changelog;
use relnotes_git::{GitError, LibGit, LogEntry, LogSource, SystemGit};
use similar_asserts::assert_eq;
use test_utils::TestGitRepo;

/// Open the repository with both backends
fn backends(repo: &TestGitRepo) -> Vec<(&'static str, Box<dyn LogSource>)> {
    let system: Box<dyn LogSource> =
        Box::new(SystemGit::open(repo.path()).expect("open with git binary"));
    let libgit: Box<dyn LogSource> =
        Box::new(LibGit::open(repo.path()).expect("open with libgit2"));
    vec![("system", system), ("libgit2", libgit)]
}

/// Initial tagged commit followed by two release commits
fn two_commit_release(test_name: &str) -> TestGitRepo {
    let repo = TestGitRepo::new(test_name);
    repo.commit(&["Initial commit"]);
    repo.tag("v1.0.0");
    repo.commit(&["Add feature"]);
    repo.commit(&["Fix typo", "Typo in README"]);
    repo
}

#[test]
fn test_generate_changelog_end_to_end() {
    let repo = two_commit_release("e2e");

    for (name, source) in backends(&repo) {
        assert_eq!(
            changelog::generate(source.as_ref(), "HEAD").as_deref(),
            Some("* Add feature\n\n* Fix typo\n\n  Typo in README"),
            "backend: {name}"
        );
    }
}

#[test]
fn test_previous_tag_excludes_tag_on_head() {
    let repo = two_commit_release("tag-on-head");
    repo.tag("v1.1.0");

    for (name, source) in backends(&repo) {
        assert_eq!(
            source.previous_tag("v1.1.0").expect("previous tag"),
            "v1.0.0",
            "backend: {name}"
        );
        assert_eq!(
            source.previous_tag("HEAD").expect("previous tag"),
            "v1.0.0",
            "backend: {name}"
        );
    }
}

#[test]
fn test_previous_tag_missing_on_first_release() {
    let repo = TestGitRepo::new("first-release");
    repo.commit(&["Initial commit"]);
    repo.commit(&["Second commit"]);

    for (name, source) in backends(&repo) {
        let result = source.previous_tag("HEAD");
        assert!(
            matches!(result, Err(GitError::NotFound { .. })),
            "backend: {name}"
        );
        assert_eq!(changelog::generate(source.as_ref(), "HEAD"), None);
    }
}

#[test]
fn test_commit_log_uses_nul_terminated_records() {
    let repo = two_commit_release("nul-records");

    for (name, source) in backends(&repo) {
        let raw = source.commit_log("v1.0.0..HEAD").expect("commit log");
        let records = raw.iter().filter(|b| **b == 0).count();
        assert_eq!(records, 2, "backend: {name}");
        assert_eq!(raw.last(), Some(&0), "backend: {name}");
    }
}

#[test]
fn test_commit_log_follows_first_parent_only() {
    let repo = TestGitRepo::new("first-parent");
    repo.commit(&["Initial commit"]);
    repo.tag("v1.0.0");
    let trunk = repo.current_branch();

    repo.git(&["checkout", "--quiet", "-b", "side"]);
    repo.commit(&["Side work"]);
    repo.git(&["checkout", "--quiet", &trunk]);
    repo.commit(&["Trunk work"]);
    repo.git(&["merge", "--quiet", "--no-ff", "--no-edit", "-m", "Merge side", "side"]);

    for (name, source) in backends(&repo) {
        let entries = changelog::for_range(source.as_ref(), "v1.0.0..HEAD").expect("entries");
        let subjects: Vec<&str> = entries.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Trunk work", "Merge side"], "backend: {name}");
    }
}

#[test]
fn test_commit_log_invalid_range() {
    let repo = two_commit_release("invalid-range");

    for (name, source) in backends(&repo) {
        let result = source.commit_log("v9.9.9..HEAD");
        assert!(
            matches!(result, Err(GitError::Command { .. })),
            "backend: {name}"
        );
    }
}

#[test]
fn test_multi_paragraph_body() {
    let repo = TestGitRepo::new("multi-paragraph");
    repo.commit(&["Initial commit"]);
    repo.tag("v0.1.0");
    repo.commit(&["Rework parser", "First paragraph.", "Second paragraph."]);

    for (name, source) in backends(&repo) {
        let entries = changelog::since_previous_tag(source.as_ref(), "HEAD").expect("entries");
        assert_eq!(
            entries,
            vec![LogEntry::new(
                "Rework parser",
                "First paragraph.\n\nSecond paragraph."
            )],
            "backend: {name}"
        );
    }
}

#[test]
fn test_tag_message_annotated_and_lightweight() {
    let repo = two_commit_release("tag-message");
    repo.annotated_tag("v1.1.0", "Release 1.1.0\n\nHighlights");

    for (name, source) in backends(&repo) {
        assert_eq!(
            source.tag_message("v1.1.0").as_deref(),
            Some("Release 1.1.0\n\nHighlights"),
            "backend: {name}"
        );
        assert_eq!(source.tag_message("v1.0.0"), None, "backend: {name}");
        assert_eq!(source.tag_message("v404"), None, "backend: {name}");
    }
}

#[test]
fn test_branch_merge_ref() {
    let repo = two_commit_release("merge-ref");
    let trunk = repo.current_branch();
    repo.git(&["config", &format!("branch.{trunk}.merge"), "refs/heads/stable"]);

    for (name, source) in backends(&repo) {
        assert_eq!(
            source.branch_merge_ref(&trunk).as_deref(),
            Some("refs/heads/stable"),
            "backend: {name}"
        );
        assert_eq!(source.branch_merge_ref("no-such-branch"), None);
    }
}

#[test]
fn test_commit_log_open_ended_ranges_default_to_head() {
    let repo = two_commit_release("open-ended-range");

    for (name, source) in backends(&repo) {
        let since_tag = changelog::for_range(source.as_ref(), "v1.0.0..").expect("entries");
        let subjects: Vec<&str> = since_tag.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Add feature", "Fix typo"], "backend: {name}");

        let up_to_head = changelog::for_range(source.as_ref(), "..HEAD").expect("entries");
        assert_eq!(up_to_head, Vec::<LogEntry>::new(), "backend: {name}");
    }
}

#[test]
fn test_dash_prefixed_revisions_are_not_options() {
    let repo = two_commit_release("dash-revision");

    for (name, source) in backends(&repo) {
        assert!(
            matches!(source.commit_log("--all"), Err(GitError::Command { .. })),
            "backend: {name}"
        );
        assert!(
            matches!(source.previous_tag("--all"), Err(GitError::NotFound { .. })),
            "backend: {name}"
        );
    }
}

#[test]
fn test_commit_log_ignores_show_signature_config() {
    let repo = two_commit_release("show-signature");
    repo.git(&["config", "log.showSignature", "true"]);

    for (name, source) in backends(&repo) {
        assert_eq!(
            changelog::generate(source.as_ref(), "HEAD").as_deref(),
            Some("* Add feature\n\n* Fix typo\n\n  Typo in README"),
            "backend: {name}"
        );
    }
}
