//! pdfmeta - Inspect PDF document metadata.
//!
//! This library reads a single file, classifies it with byte-level
//! heuristics, delegates structural parsing to `lopdf`, and assembles a
//! display-ready metadata report. Encrypted documents are handled
//! through a password-retry state machine that re-prompts on a wrong
//! password and can be cancelled at any point. It supports:
//!
//! - Header, encryption, and tagging detection from raw bytes
//! - Document metadata extraction with PDF date normalization
//! - An interactive (or scripted) password prompt seam
//! - Timeout-bounded parsing off the async runtime
//! - Grid or JSON presentation of the report
//!
//! # Examples
//!
//! ```no_run
//! use pdfmeta::config::LoadOptions;
//! use pdfmeta::inspect::{run_inspection, InspectSession, Inspector};
//! use pdfmeta::prompt::TerminalPrompt;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inspector = Inspector::new(&LoadOptions::default());
//! let mut session = InspectSession::new();
//! let mut prompt = TerminalPrompt::new();
//!
//! let report = run_inspection(
//!     &inspector,
//!     &mut session,
//!     Path::new("document.pdf"),
//!     None,
//!     &mut prompt,
//! )
//! .await?;
//!
//! println!("{} page(s)", report.info.get("Page Count").unwrap_or("?"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod inspect;
pub mod io;
pub mod output;
pub mod probe;
pub mod prompt;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfMetaError, Result};
pub use inspect::{InspectSession, InspectionReport, Inspector};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
