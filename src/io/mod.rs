//! I/O operations for pdfmeta.
//!
//! This module reads the input file into a [`FileSample`] and delegates
//! structural parsing to the external library through
//! [`loader::DocumentLoader`]. No files are ever written.

pub mod loader;

pub use loader::{DocumentLoader, LoadedDocument};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{PdfMetaError, Result};

/// Raw bytes of an input file plus its filesystem attributes.
///
/// Immutable once read; each inspection attempt owns its own sample.
#[derive(Debug, Clone)]
pub struct FileSample {
    /// Path the sample was read from.
    pub path: PathBuf,
    /// File name component, for display.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type guessed from the file extension.
    pub mime_type: String,
    /// Filesystem modification timestamp, when available.
    pub modified: Option<SystemTime>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl FileSample {
    /// Read a file into a sample, capturing its filesystem attributes.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMetaError::ReadFailure`] when the file cannot be
    /// read.
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| PdfMetaError::read_failure(path.to_path_buf(), err))?;

        let modified = tokio::fs::metadata(path)
            .await
            .ok()
            .and_then(|meta| meta.modified().ok());

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            mime_type: guess_mime_type(path),
            size: bytes.len() as u64,
            name,
            modified,
            path: path.to_path_buf(),
            bytes,
        })
    }
}

/// Guess a MIME type from the file extension.
///
/// The inspector accepts any bytes, so an unknown extension falls back
/// to the generic binary type rather than being rejected.
fn guess_mime_type(path: &Path) -> String {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("html") | Some("htm") => "text/html",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
    .to_string()
}
