// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown rendering of parsed log entries
//!
//! Rendering is a one-way display transform. Wrapped subjects were already
//! collapsed and bodies gain indentation, so the output does not parse back
//! into the entries it came from.

use crate::entry::LogEntry;

/// Indentation applied to every body line
const BODY_INDENT: &str = "  ";

/// Render entries as a Markdown bullet list
///
/// Each entry becomes `* <subject>`, followed by its indented body as a
/// separate block. Blocks are separated by a blank line. An empty slice
/// renders as the empty string.
#[must_use]
pub fn render_changelog(entries: &[LogEntry]) -> String {
    let mut blocks = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        blocks.push(format!("* {}", entry.subject));
        if entry.has_body() {
            blocks.push(indent(&entry.body, BODY_INDENT));
        }
    }
    blocks.join("\n\n")
}

/// Prefix every line of `text` with `prefix`
///
/// Blank text is returned untouched.
fn indent(text: &str, prefix: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
