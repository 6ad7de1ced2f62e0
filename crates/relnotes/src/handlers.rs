// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Subcommand handlers
//!
//! Each handler writes its result to the given output. Logs go through
//! `tracing`, so the output stays clean enough to pipe into a file.

use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use relnotes_git::{GitError, LibGit, LogEntry, LogSource, SystemGit, changelog};

use crate::config::{Backend, ChangelogArgs, Command, Config, ConfigError, ReleaseArgs, TemplateArgs};
use crate::notes::read_notes;
use crate::template::{NotesAction, TemplateContext, TemplateError};

// ============================================================================
// Error Types
// ============================================================================

/// Handler errors
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git query failed
    #[error("Could not read git history: {0}")]
    Git(#[from] GitError),

    /// Template selection failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Reading notes or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Dispatch
// ============================================================================

/// Open the repository with the configured backend
///
/// # Errors
///
/// Returns `GitError::RepositoryNotFound` if `path` is not a git repository.
pub fn open_source(backend: Backend, path: &Path) -> Result<Box<dyn LogSource>, GitError> {
    debug!(?backend, path = %path.display(), "opening repository");
    let source: Box<dyn LogSource> = match backend {
        Backend::System => Box::new(SystemGit::open(path)?),
        Backend::Libgit2 => Box::new(LibGit::discover(path)?),
    };
    Ok(source)
}

/// Run the configured subcommand
///
/// # Errors
///
/// Returns a `HandlerError` if the repository cannot be opened or the
/// subcommand fails.
pub fn run(config: &Config, out: &mut dyn Write, stdin: &mut dyn Read) -> Result<(), HandlerError> {
    config.validate()?;
    let Some(command) = &config.command else {
        return Ok(());
    };

    let repo = config.repo_path().ok_or(ConfigError::NoWorkingDirectory)?;
    match command {
        Command::Changelog(args) => {
            let source = open_source(config.backend, &repo)?;
            handle_changelog(source.as_ref(), args, out)
        }
        Command::Template(args) => {
            // Notes given up front skip template selection entirely
            let notes = read_notes(args.notes.as_deref(), args.notes_file.as_deref(), stdin)?;
            if let Some(notes) = notes {
                info!("using release notes from the command line");
                out.write_all(notes.as_bytes())?;
                return Ok(());
            }
            let source = open_source(config.backend, &repo)?;
            handle_template(source.as_ref(), args, out)
        }
    }
}

// ============================================================================
// Handler Functions
// ============================================================================

/// Resolve the ref the changelog ends at for a release
fn release_head(source: &dyn LogSource, release: &ReleaseArgs) -> (String, Option<String>) {
    let tag_message = source.tag_message(&release.tag);
    let head = changelog::head_ref(
        source,
        &release.tag,
        tag_message.as_deref(),
        release.target_ref.as_deref(),
    );
    debug!(tag = %release.tag, head = %head, "resolved release head");
    (head, tag_message)
}

/// Handle `relnotes changelog`
///
/// # Errors
///
/// In strict or JSON mode, an unreadable commit log is an error. Otherwise
/// only output failures are.
pub fn handle_changelog(
    source: &dyn LogSource,
    args: &ChangelogArgs,
    out: &mut dyn Write,
) -> Result<(), HandlerError> {
    let (head, _) = release_head(source, &args.release);

    if args.json {
        let entries = match changelog::since_previous_tag(source, &head) {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() && !args.strict => Vec::<LogEntry>::new(),
            Err(e) => return Err(e.into()),
        };
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    let markdown = if args.strict {
        let entries = changelog::since_previous_tag(source, &head)?;
        relnotes_git::render_changelog(&entries)
    } else {
        changelog::generate(source, &head).unwrap_or_default()
    };

    if !markdown.is_empty() {
        writeln!(out, "{markdown}")?;
    }
    Ok(())
}

/// Gather everything the template menu can offer for a release
pub fn template_context(source: &dyn LogSource, args: &TemplateArgs) -> TemplateContext {
    let (head, tag_message) = release_head(source, &args.release);

    // Local history says nothing about another project's release
    let changelog = if args.repo_override.is_none() {
        changelog::generate(source, &head)
    } else {
        debug!("repository override set, skipping changelog");
        None
    };

    TemplateContext {
        changelog,
        tag_message,
    }
}

/// Handle `relnotes template`
///
/// Without `--action`, prints one menu label per line. With it, prints the
/// pre-fill text for that action (nothing for `blank`).
///
/// # Errors
///
/// Returns `TemplateError::Unavailable` if the chosen action has nothing to
/// pre-fill.
pub fn handle_template(
    source: &dyn LogSource,
    args: &TemplateArgs,
    out: &mut dyn Write,
) -> Result<(), HandlerError> {
    let context = template_context(source, args);

    let Some(action) = args.action else {
        for action in NotesAction::available(&context) {
            writeln!(out, "{}", action.label())?;
        }
        return Ok(());
    };

    if let Some(text) = action.template(&context)? {
        out.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}
