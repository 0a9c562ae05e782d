//! Configuration for pdfmeta.
//!
//! Transforms CLI arguments into a validated configuration that drives
//! the inspection. Everything the orchestrator needs — including the
//! parse timeout — travels in here and is handed over explicitly at
//! construction time; nothing is read from process-wide state.

use std::path::PathBuf;
use std::time::Duration;

/// Default upper bound on a single document parse, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options for the document load step.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Upper bound on a single parse. A hung parse surfaces as a
    /// timeout error instead of blocking the loading indicator forever.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Validated, normalized configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// File to inspect.
    pub input: PathBuf,
    /// Password supplied up front, if any.
    pub password: Option<String>,
    /// Emit the report as JSON instead of grids.
    pub json: bool,
    /// Suppress non-error status output.
    pub quiet: bool,
    /// Show verbose output.
    pub verbose: bool,
    /// Never prompt interactively.
    pub batch: bool,
    /// Document load options.
    pub load: LoadOptions,
}
