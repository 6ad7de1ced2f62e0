// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit log entries and the NUL-delimited log parser
//!
//! The commit log reader emits every commit message terminated by a NUL byte
//! (`--pretty=format:%B%x00`). Multi-line messages survive intact because NUL
//! can never appear inside a commit message.

use serde::{Deserialize, Serialize};

/// Record separator emitted after each commit message
pub const RECORD_SEPARATOR: u8 = 0;

/// One commit message split into a single-line subject and an optional body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// First paragraph of the message, newlines collapsed to spaces
    pub subject: String,
    /// Everything after the first blank line; empty means "no body"
    pub body: String,
}

impl LogEntry {
    /// Create an entry from its parts
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Parse a single raw record
    ///
    /// Returns `None` only when the record is empty once CRLF endings are
    /// normalized and one leading newline is stripped. A record holding only
    /// whitespace still produces an entry.
    #[must_use]
    pub fn parse(record: &str) -> Option<Self> {
        let normalized = record.replace("\r\n", "\n");
        let text = normalized.strip_prefix('\n').unwrap_or(&normalized);
        if text.is_empty() {
            return None;
        }

        // %B always ends with a newline
        let text = text.trim_end_matches('\n');

        let (subject, body) = text.split_once("\n\n").unwrap_or((text, ""));

        Some(Self {
            subject: subject.replace('\n', " "),
            body: body.to_string(),
        })
    }

    /// Whether the commit carried a body
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Parse NUL-delimited commit log output into entries, preserving order
///
/// The empty record after the final separator is discarded along with any
/// other record that is empty after normalization.
#[must_use]
pub fn parse_log(raw: &[u8]) -> Vec<LogEntry> {
    raw.split(|byte| *byte == RECORD_SEPARATOR)
        .filter_map(|record| LogEntry::parse(&String::from_utf8_lossy(record)))
        .collect()
}
