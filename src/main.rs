// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Parcel tracking CLI.
//!
//! Looks up Yamato Transport shipments by tracking number and prints their
//! status history as an aligned text report.
//!
//! A lookup runs as a straight pipeline:
//!
//! * The tracking number is normalized and its check digit verified.
//! * For batch lookups, a background worker generates the numbers that
//!   follow it.
//! * The numbers are posted to the tracking form and the result page is
//!   reduced to shipment blocks.
//! * The blocks are rendered with full-width padding and written to stdout.

mod cli;
mod config;
mod fetch;
mod lookup;
mod model;
mod report;
mod theme;
mod tracking;
mod util;

use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli,
    config::AppConfig,
    fetch::HttpSource,
    lookup::LookupContext,
    theme::Theme,
    util::term,
};

/// The entry point of the application.
///
/// Prints `Error: <message>` to stderr and exits with status 1 if the lookup
/// fails for any reason.
fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = config::load_config();

    let error_theme = Theme::with_colour(config.colour && term::stderr_supports_colour());

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", error_theme.highlight(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

/// Installs the diagnostic subscriber.
///
/// Diagnostics go to stderr so they never mix with the report. The filter is
/// read from `RUST_LOG` and defaults to warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Validates the request, performs the lookup and writes the report.
///
/// # Errors
///
/// Returns an error if the arguments or tracking number are invalid, the
/// lookup fails, or the report cannot be written.
fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let request = cli.request()?;

    let source = HttpSource::new(&config.endpoint, config.timeout());
    let layout = config.result_format.layout();
    let theme = Theme::with_colour(config.colour && term::stdout_supports_colour());

    let ctx = LookupContext {
        source: &source,
        layout: &layout,
        theme: &theme,
    };
    let report = lookup::lookup(&request, &ctx)?;

    let mut out = BufWriter::new(io::stdout().lock());
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write report")
}
