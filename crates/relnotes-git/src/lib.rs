// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! relnotes-git: changelog derivation from local git history
//!
//! This library crate turns the commits between the previous tag and a
//! release ref into a Markdown bullet list for use as a release-notes
//! template.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use relnotes_git::{LibGit, changelog};
//!
//! let repo = LibGit::discover(".").expect("open repo");
//! let entries = changelog::since_previous_tag(&repo, "HEAD").expect("read log");
//!
//! for entry in &entries {
//!     println!("{}", entry.subject);
//! }
//! ```

pub mod changelog;
pub mod entry;
pub mod error;
pub mod libgit;
pub mod render;
pub mod source;
pub mod system;

pub use entry::{LogEntry, parse_log};
pub use error::GitError;
pub use libgit::LibGit;
pub use render::render_changelog;
pub use source::LogSource;
pub use system::SystemGit;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::changelog;
    pub use crate::entry::LogEntry;
    pub use crate::error::GitError;
    pub use crate::source::LogSource;
    pub use crate::system::SystemGit;
}
