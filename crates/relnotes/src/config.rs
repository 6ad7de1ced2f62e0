// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the relnotes command line
//!
//! This module provides the clap-derived configuration: repository path,
//! git backend selection, logging options, and the subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::template::NotesAction;

/// Relnotes - release-notes templates from local git history
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the git repository
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'C', long, env = "RELNOTES_REPO", global = true)]
    pub repo: Option<PathBuf>,

    /// How to query git history
    #[arg(long, env = "RELNOTES_BACKEND", value_enum, default_value_t, global = true)]
    pub backend: Backend,

    /// Enable verbose logging (debug level)
    ///
    /// Logs go to stderr so stdout only carries release notes.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Git query backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Shell out to the `git` binary
    #[default]
    System,
    /// Use libgit2
    Libgit2,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the changelog between the previous tag and the release
    ///
    /// Prints nothing when there is no previous tag.
    Changelog(ChangelogArgs),

    /// Show release-notes template choices, or the text for one of them
    ///
    /// Example:
    ///   relnotes template v1.2.0 --action commit-log > notes.md
    Template(TemplateArgs),
}

/// Arguments shared by commands that locate a release
#[derive(Args, Debug, Clone, Default)]
pub struct ReleaseArgs {
    /// Tag name of the release
    pub tag: String,

    /// Ref the release is created from when the tag does not exist yet
    ///
    /// It can be a commit SHA, another tag name, or a branch name.
    #[arg(short = 'r', long = "ref")]
    pub target_ref: Option<String>,
}

/// Arguments for `relnotes changelog`
#[derive(Args, Debug, Clone, Default)]
pub struct ChangelogArgs {
    /// The release to describe
    #[command(flatten)]
    pub release: ReleaseArgs,

    /// Fail instead of printing nothing when the log cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Print parsed entries as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `relnotes template`
#[derive(Args, Debug, Clone, Default)]
pub struct TemplateArgs {
    /// The release to describe
    #[command(flatten)]
    pub release: ReleaseArgs,

    /// Template to print; lists the available choices when omitted
    #[arg(short, long, value_enum)]
    pub action: Option<NotesAction>,

    /// Release notes text; skips template selection
    #[arg(short = 'N', long)]
    pub notes: Option<String>,

    /// Read release notes from a file; '-' reads stdin
    #[arg(short = 'F', long)]
    pub notes_file: Option<PathBuf>,

    /// The release belongs to another project, so local history does not apply
    #[arg(long)]
    pub repo_override: Option<String>,
}

impl Config {
    /// Get the repository path, using current directory as default
    ///
    /// Returns `None` if no repository is specified and the current
    /// directory cannot be determined.
    #[must_use]
    pub fn repo_path(&self) -> Option<PathBuf> {
        self.repo.clone().or_else(|| std::env::current_dir().ok())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path is specified but doesn't
    /// exist or is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),

    /// Current directory could not be determined
    #[error("Could not determine the current directory")]
    NoWorkingDirectory,
}
