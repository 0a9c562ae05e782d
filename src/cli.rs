//! CLI argument parsing for pdfmeta.
//!
//! This module defines the command-line interface structure using
//! `clap`. It handles argument parsing, validation, and help text
//! generation.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, DEFAULT_TIMEOUT_SECS, LoadOptions};
use crate::error::{PdfMetaError, Result};

/// Inspect PDF document metadata.
///
/// pdfmeta reads a single file, detects whether it is an (encrypted)
/// PDF, and prints its metadata: title, author, dates, page count,
/// security and accessibility status. Encrypted documents prompt for a
/// password unless one is given with `--password`.
#[derive(Parser, Debug)]
#[command(name = "pdfmeta")]
#[command(version)]
#[command(about = "Inspect PDF document metadata", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// File to inspect
    ///
    /// Any file is accepted; non-PDF input is reported as such rather
    /// than rejected.
    #[arg(required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Password for encrypted documents
    ///
    /// When omitted and the document is encrypted, pdfmeta prompts on
    /// the terminal (unless --batch is set).
    #[arg(short, long, value_name = "PASSWORD", env = "PDFMETA_PASSWORD")]
    pub password: Option<String>,

    /// Print the report as JSON
    ///
    /// Replaces the key-value grids with a pretty-printed JSON object
    /// on stdout. Status output is suppressed.
    #[arg(long)]
    pub json: bool,

    /// Never prompt for a password
    ///
    /// Encrypted documents fail with a password error instead of
    /// waiting for input. Useful for scripts and automation.
    #[arg(short = 'B', long)]
    pub batch: bool,

    /// Parse timeout in seconds
    ///
    /// A document that takes longer than this to parse is abandoned
    /// and reported as a timeout.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Suppress all non-error output
    ///
    /// Only the metadata grids, warnings, and errors are printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show inspection details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert parsed arguments into a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMetaError::InvalidConfig`] for argument values clap
    /// cannot rule out on its own (currently a zero timeout).
    pub fn to_config(&self) -> Result<Config> {
        if self.timeout == 0 {
            return Err(PdfMetaError::invalid_config(
                "timeout must be at least 1 second",
            ));
        }

        Ok(Config {
            input: self.input.clone(),
            password: self.password.clone(),
            json: self.json,
            quiet: self.quiet,
            verbose: self.verbose,
            batch: self.batch,
            load: LoadOptions {
                timeout: Duration::from_secs(self.timeout),
            },
        })
    }
}
