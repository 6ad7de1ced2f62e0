// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Changelog derivation: previous tag -> commit range -> entries -> Markdown
//!
//! # Example
//!
//! ```no_run
//! use relnotes_git::{SystemGit, changelog};
//!
//! let git = SystemGit::open(".").expect("open repo");
//! let head = changelog::head_ref(&git, "v1.2.0", None, None);
//! if let Some(markdown) = changelog::generate(&git, &head) {
//!     println!("{markdown}");
//! }
//! ```

use tracing::{debug, warn};

use crate::entry::{LogEntry, parse_log};
use crate::error::GitError;
use crate::render::render_changelog;
use crate::source::{LogSource, range};

/// Symbolic reference for the current checkout
pub const CURRENT_CHECKOUT: &str = "HEAD";

/// Entries for the commits in `range`, oldest first
///
/// # Errors
///
/// Returns `GitError::Command` if the range cannot be listed.
pub fn for_range(source: &dyn LogSource, range: &str) -> Result<Vec<LogEntry>, GitError> {
    let raw = source.commit_log(range)?;
    Ok(parse_log(&raw))
}

/// Entries for the commits between the previous tag and `head`
///
/// # Errors
///
/// Returns `GitError::NotFound` when `head` has no tagged ancestor, or
/// `GitError::Command` if the range cannot be listed.
pub fn since_previous_tag(source: &dyn LogSource, head: &str) -> Result<Vec<LogEntry>, GitError> {
    let previous = source.previous_tag(head)?;
    debug!(previous = %previous, head, "found previous tag");
    for_range(source, &range(&previous, head))
}

/// Best-effort Markdown changelog for `head`
///
/// Never fails: a missing previous tag or an unreadable range both yield
/// `None`, as does a range with no commits.
pub fn generate(source: &dyn LogSource, head: &str) -> Option<String> {
    match since_previous_tag(source, head) {
        Ok(entries) => {
            let markdown = render_changelog(&entries);
            debug!(head, entries = entries.len(), "generated changelog");
            (!markdown.is_empty()).then_some(markdown)
        }
        Err(GitError::NotFound { reference }) => {
            debug!(reference, "no previous tag, skipping changelog");
            None
        }
        Err(e) => {
            warn!(head, error = %e, "could not read commit log, skipping changelog");
            None
        }
    }
}

/// Choose the ref the changelog should end at
///
/// A tag that already carries a message names the release commit itself.
/// Otherwise the release will be cut from `target_ref` (or its configured
/// upstream merge ref), falling back to the current checkout.
pub fn head_ref(
    source: &dyn LogSource,
    tag_name: &str,
    tag_message: Option<&str>,
    target_ref: Option<&str>,
) -> String {
    if tag_message.is_some_and(|message| !message.is_empty()) {
        return tag_name.to_string();
    }

    match target_ref.filter(|r| !r.is_empty()) {
        Some(target) => source
            .branch_merge_ref(target)
            .unwrap_or_else(|| target.to_string()),
        None => CURRENT_CHECKOUT.to_string(),
    }
}
