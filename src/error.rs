//! Error types for pdfmeta.
//!
//! All failures during inspection are converted into [`PdfMetaError`].
//! The enum distinguishes recoverable password problems (which drive the
//! prompt-and-retry loop and are never shown in the terminal error
//! panel) from terminal read/parse failures that end the attempt.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmeta operations.
pub type Result<T> = std::result::Result<T, PdfMetaError>;

/// Main error type for pdfmeta operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMetaError {
    /// The input file could not be read.
    #[error("Error processing file: {}: {}", .path.display(), .source)]
    ReadFailure {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The parsing library rejected the document.
    #[error("Error processing PDF: {message}")]
    ParseFailure {
        /// Message reported by the parsing library.
        message: String,
    },

    /// The document is encrypted and no password was supplied.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,

    /// The supplied password did not decrypt the document.
    #[error("Invalid password. Please try again.")]
    InvalidPassword,

    /// The document load did not finish within the configured timeout.
    #[error("Timed out after {seconds}s while parsing the document")]
    Timeout {
        /// Configured timeout in seconds.
        seconds: u64,
    },

    /// The user cancelled the password prompt.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Invalid CLI arguments or configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what is wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl From<lopdf::Error> for PdfMetaError {
    fn from(err: lopdf::Error) -> Self {
        Self::parse_failure(err.to_string())
    }
}

impl PdfMetaError {
    /// Create a ReadFailure error.
    pub fn read_failure(path: PathBuf, source: io::Error) -> Self {
        Self::ReadFailure { path, source }
    }

    /// Create a ParseFailure error.
    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    /// Create a Timeout error.
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable by asking for a password.
    ///
    /// Recoverable errors re-enter the password prompt instead of being
    /// reported in the top-level error panel.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PasswordRequired | Self::InvalidPassword)
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig { .. } => 1,
            Self::ReadFailure { .. } => 2,
            Self::ParseFailure { .. } => 3,
            Self::PasswordRequired => 3,
            Self::InvalidPassword => 3,
            Self::Timeout { .. } => 4,
            Self::Io { .. } => 5,
            Self::Cancelled => 130, // Standard exit code for SIGINT
        }
    }
}
