// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! relnotes: release-notes templates from local git history
//!
//! Prints the changelog since the previous tag, or the release-notes
//! template a user would start from, on stdout.

use std::io;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::debug;

use relnotes::config::Config;
use relnotes::handlers;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only release notes
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if config.command.is_none() {
        Config::command().print_help()?;
        return Ok(());
    }

    debug!(?config, "starting relnotes");
    let stdout = io::stdout();
    let stdin = io::stdin();
    handlers::run(&config, &mut stdout.lock(), &mut stdin.lock())
        .context("relnotes failed")?;
    Ok(())
}
