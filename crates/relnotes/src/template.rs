// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Release-notes template choices
//!
//! When no notes were supplied, the user picks how to start writing them.
//! The menu only offers the commit log and tag message options when there is
//! something to pre-fill.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

/// Template errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Label does not name any action
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Action exists but has nothing to pre-fill for this release
    #[error("{0} is not available for this release")]
    Unavailable(NotesAction),
}

/// How to start the release notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NotesAction {
    /// Open an empty editor
    WriteOwn,
    /// Pre-fill with the changelog derived from the commit log
    CommitLog,
    /// Pre-fill with the annotated tag message
    TagMessage,
    /// No release notes
    Blank,
}

impl NotesAction {
    /// Every action, in menu order
    pub const ALL: [Self; 4] = [Self::WriteOwn, Self::CommitLog, Self::TagMessage, Self::Blank];

    /// Menu label shown to the user
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WriteOwn => "Write my own.",
            Self::CommitLog => "Write using the commit log as a template.",
            Self::TagMessage => "Write using the Git tag message as the template.",
            Self::Blank => "Leave blank.",
        }
    }

    /// Actions offered for a release, in menu order
    #[must_use]
    pub fn available(context: &TemplateContext) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|action| action.is_available(context))
            .collect()
    }

    /// Whether this action has what it needs
    #[must_use]
    pub fn is_available(self, context: &TemplateContext) -> bool {
        match self {
            Self::WriteOwn | Self::Blank => true,
            Self::CommitLog => context.changelog.is_some(),
            Self::TagMessage => context.tag_message.is_some(),
        }
    }

    /// Editor pre-fill for this action
    ///
    /// `Ok(None)` means no editor is opened at all.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Unavailable` for an action the menu would not
    /// have offered.
    pub fn template(self, context: &TemplateContext) -> Result<Option<String>, TemplateError> {
        let unavailable = || TemplateError::Unavailable(self);
        match self {
            Self::WriteOwn => Ok(Some(String::new())),
            Self::CommitLog => context.changelog.clone().map(Some).ok_or_else(unavailable),
            Self::TagMessage => context.tag_message.clone().map(Some).ok_or_else(unavailable),
            Self::Blank => Ok(None),
        }
    }
}

impl fmt::Display for NotesAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NotesAction {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| TemplateError::InvalidAction(s.to_string()))
    }
}

/// What is available to pre-fill release notes with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    /// Markdown changelog since the previous tag
    pub changelog: Option<String>,
    /// Message of the release's annotated tag
    pub tag_message: Option<String>,
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: only exact menu labels parse
        #[test]
        fn prop_parse_accepts_only_labels(label in ".{0,60}") {
            let is_label = NotesAction::ALL.iter().any(|a| a.label() == label);
            prop_assert_eq!(label.parse::<NotesAction>().is_ok(), is_label);
        }

        /// Property: the menu always starts with WriteOwn and ends with Blank
        #[test]
        fn prop_menu_bounds(changelog in proptest::option::of(".*"), tag in proptest::option::of(".*")) {
            let context = TemplateContext { changelog, tag_message: tag };
            let menu = NotesAction::available(&context);
            prop_assert_eq!(menu.first(), Some(&NotesAction::WriteOwn));
            prop_assert_eq!(menu.last(), Some(&NotesAction::Blank));
            for action in menu {
                prop_assert!(action.template(&context).is_ok());
            }
        }
    }
}
