// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Release notes supplied on the command line

use std::io::{self, Read};
use std::path::Path;

/// Path that means "read notes from stdin"
pub const STDIN_PATH: &str = "-";

/// Resolve notes given with `--notes` and `--notes-file`
///
/// A notes file takes precedence over inline notes. Returns `None` when
/// neither was given, meaning the user still has to pick a template.
///
/// # Errors
///
/// Returns an I/O error if the notes file or stdin cannot be read.
pub fn read_notes(
    notes: Option<&str>,
    notes_file: Option<&Path>,
    stdin: &mut dyn Read,
) -> io::Result<Option<String>> {
    match notes_file {
        Some(path) if path.as_os_str() == STDIN_PATH => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(Some(buf))
        }
        Some(path) => std::fs::read_to_string(path).map(Some),
        None => Ok(notes.map(str::to_string)),
    }
}
