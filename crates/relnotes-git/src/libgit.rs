// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! libgit2 backend
//!
//! This module answers the same queries as the `git` binary backend using
//! the `git2` crate, and emits the commit log in the same NUL-terminated
//! byte format so both backends share one parser.

use std::path::Path;

use git2::{DescribeFormatOptions, DescribeOptions, Oid, Repository, Sort};
use tracing::debug;

use crate::entry::RECORD_SEPARATOR;
use crate::error::GitError;
use crate::source::{LogSource, split_range};

/// A git repository opened through libgit2
pub struct LibGit {
    repo: Repository,
}

impl LibGit {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Resolve a revision to the commit it names
    fn resolve_commit(&self, spec: &str) -> Result<Oid, GitError> {
        let commit = self
            .repo
            .revparse_single(spec)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|e| GitError::Command {
                command: format!("resolve {spec}"),
                message: e.message().to_string(),
            })?;
        Ok(commit.id())
    }
}

impl LogSource for LibGit {
    fn previous_tag(&self, reference: &str) -> Result<String, GitError> {
        let not_found = || GitError::NotFound {
            reference: reference.to_string(),
        };

        let parent = self
            .repo
            .revparse_single(&format!("{reference}^"))
            .map_err(|_| not_found())?;

        let mut options = DescribeOptions::new();
        options.describe_tags().only_follow_first_parent(true);
        let describe = parent.describe(&options).map_err(|_| not_found())?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?.trim().to_string();

        if tag.is_empty() {
            return Err(not_found());
        }
        Ok(tag)
    }

    fn commit_log(&self, range: &str) -> Result<Vec<u8>, GitError> {
        let (from, to) = split_range(range);

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.simplify_first_parent()?;
        revwalk.push(self.resolve_commit(to)?)?;
        if let Some(from) = from {
            revwalk.hide(self.resolve_commit(from)?)?;
        }

        let mut raw = Vec::new();
        for (i, oid) in revwalk.enumerate() {
            let commit = self.repo.find_commit(oid?)?;
            if i > 0 {
                raw.push(b'\n');
            }
            raw.extend_from_slice(commit.message_bytes());
            raw.push(RECORD_SEPARATOR);
        }

        debug!(range, bytes = raw.len(), "read commit log");
        Ok(raw)
    }

    fn branch_merge_ref(&self, branch: &str) -> Option<String> {
        let config = self.repo.config().ok()?;
        config
            .get_string(&format!("branch.{branch}.merge"))
            .ok()
            .filter(|merge_ref| !merge_ref.is_empty())
    }

    fn tag_message(&self, tag: &str) -> Option<String> {
        let reference = self.repo.find_reference(&format!("refs/tags/{tag}")).ok()?;
        let annotated = reference.peel_to_tag().ok()?;
        let message = annotated.message()?.trim();
        (!message.is_empty()).then(|| message.to_string())
    }
}
