// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for relnotes-git

use thiserror::Error;

/// Errors that can occur while querying local git history
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// The git binary could not be spawned
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// No tag reachable before the reference, or the reference is invalid
    #[error("No previous tag found for: {reference}")]
    NotFound {
        /// The reference whose ancestry was searched
        reference: String,
    },

    /// A git query ran but failed
    #[error("{command} failed: {message}")]
    Command {
        /// The command that was run
        command: String,
        /// Underlying failure text (usually stderr)
        message: String,
    },
}

impl GitError {
    /// Whether this error is the expected "nothing to compare against" case
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
