// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! relnotes library
//!
//! This module exports the command line's configuration, template selection
//! and handlers for use in integration tests and as a library.

pub mod config;
pub mod handlers;
pub mod notes;
pub mod template;
