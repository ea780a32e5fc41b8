//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse (and discard) command-line arguments
//! - Build the sample index descriptors
//! - Write the verification report to stdout
//!
//! The layer is thin: the report itself lives in [`crate::check`].

pub mod args;

pub use args::Cli;

use crate::check;
use crate::core::fixture;
use anyhow::{Context, Result};
use std::io::Write;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let _cli = Cli::parse_args();

    // Held for the process lifetime; the report never reads them.
    let _indexes = fixture::sample_indexes();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check::run(&mut out).context("failed to write verification report")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
