//! Interactive password collection.
//!
//! The orchestrator talks to the prompt through the [`PasswordPrompt`]
//! trait so the retry loop can be driven by a terminal in the binary
//! and by a scripted fake in tests. A prompt returns `Ok(None)` to
//! cancel; the pending file is then discarded without an extraction.
//! Passwords are handed straight to the orchestrator and never stored.

use std::io::{self, BufRead, Write};

use crate::error::{PdfMetaError, Result};
use crate::inspect::RetryState;

/// Source of passwords for the retry loop.
pub trait PasswordPrompt {
    /// Ask for a password for the pending document.
    ///
    /// `retry` carries the failure message and attempt count when this
    /// is a re-prompt. Returns `Ok(None)` when the user cancels.
    fn request(&mut self, retry: &RetryState) -> Result<Option<String>>;
}

/// Prompt that reads one line from standard input.
///
/// The prompt text goes to stderr so that stdout stays clean for the
/// report (notably with `--json`). An empty line or EOF cancels.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    /// Create a terminal prompt.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordPrompt for TerminalPrompt {
    fn request(&mut self, retry: &RetryState) -> Result<Option<String>> {
        if let Some(error) = retry.error() {
            eprintln!("✗ {error}");
        }

        let name = retry
            .pending()
            .map(|sample| sample.name.as_str())
            .unwrap_or("document");
        eprint!("Password for {name} (empty line to cancel): ");
        io::stderr().flush().ok();

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|err| PdfMetaError::Io { source: err })?;
        if read == 0 {
            // EOF, e.g. a closed pipe
            return Ok(None);
        }

        let password = line.trim_end_matches(['\r', '\n']);
        if password.is_empty() {
            Ok(None)
        } else {
            Ok(Some(password.to_string()))
        }
    }
}

/// Prompt for non-interactive runs.
///
/// Instead of blocking on stdin, an encrypted document immediately
/// fails with the password error that would otherwise have driven the
/// prompt.
#[derive(Debug, Default)]
pub struct DisabledPrompt;

impl DisabledPrompt {
    /// Create a disabled prompt.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordPrompt for DisabledPrompt {
    fn request(&mut self, retry: &RetryState) -> Result<Option<String>> {
        if retry.attempts() > 0 {
            Err(PdfMetaError::InvalidPassword)
        } else {
            Err(PdfMetaError::PasswordRequired)
        }
    }
}
