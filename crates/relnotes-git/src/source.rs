// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The narrow query interface the changelog pipeline needs from git
//!
//! Two backends implement it: [`crate::system::SystemGit`] shells out to the
//! `git` binary and [`crate::libgit::LibGit`] uses libgit2. Tests provide
//! their own in-memory implementation.

use crate::error::GitError;

/// Read-only history queries against a local repository
pub trait LogSource {
    /// Nearest tag reachable along first-parent ancestry strictly before
    /// `reference`, whitespace trimmed
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotFound` when there is no such tag or the
    /// reference does not resolve.
    fn previous_tag(&self, reference: &str) -> Result<String, GitError>;

    /// Messages of the first-parent commits in `range`, oldest first, each
    /// terminated by a NUL byte
    ///
    /// # Errors
    ///
    /// Returns `GitError::Command` when the range is invalid or the
    /// repository cannot be read.
    fn commit_log(&self, range: &str) -> Result<Vec<u8>, GitError>;

    /// Upstream merge ref configured for a local branch (`branch.<name>.merge`)
    fn branch_merge_ref(&self, _branch: &str) -> Option<String> {
        None
    }

    /// Message of an annotated tag, `None` for lightweight or missing tags
    fn tag_message(&self, _tag: &str) -> Option<String> {
        None
    }
}

/// Build a `from..to` range expression
#[must_use]
pub fn range(from: &str, to: &str) -> String {
    format!("{from}..{to}")
}

/// Split a range expression into its endpoints
///
/// A bare reference has no lower bound. An empty side of `from..to` means
/// `HEAD`, as it does for git.
#[must_use]
pub fn split_range(range: &str) -> (Option<&str>, &str) {
    match range.split_once("..") {
        Some((from, to)) => (Some(or_head(from)), or_head(to)),
        None => (None, range),
    }
}

fn or_head(side: &str) -> &str {
    if side.is_empty() { "HEAD" } else { side }
}
