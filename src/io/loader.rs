//! Document loading through the external parsing library.
//!
//! All structural PDF parsing is delegated to `lopdf`. The loader's job
//! is to run that parse off the async runtime, bound it with a timeout,
//! and classify the library's failures into the error kinds the retry
//! state machine understands (password required, invalid password, or a
//! terminal parse failure).

use std::time::{Duration, Instant};

use log::debug;
use lopdf::Document;

use crate::error::{PdfMetaError, Result};

/// A document parsed by the external library, with derived fields.
#[derive(Debug)]
pub struct LoadedDocument {
    /// The parsed (and, if necessary, decrypted) document.
    pub document: Document,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Time taken to parse the document.
    pub load_time: Duration,
}

/// Loader wrapping the external library's parse call.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    /// Upper bound on a single parse.
    timeout: Duration,
}

impl DocumentLoader {
    /// Create a loader with the given parse timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Parse a byte buffer, decrypting with `password` when required.
    ///
    /// The parse runs in a blocking task to avoid stalling the async
    /// runtime, and is abandoned once the configured timeout elapses.
    ///
    /// # Errors
    ///
    /// - [`PdfMetaError::PasswordRequired`] when the document is
    ///   encrypted and no password was supplied
    /// - [`PdfMetaError::InvalidPassword`] when the supplied password
    ///   does not decrypt the document
    /// - [`PdfMetaError::Timeout`] when the parse exceeds the timeout
    /// - [`PdfMetaError::ParseFailure`] for any other library failure
    pub async fn load(&self, bytes: Vec<u8>, password: Option<String>) -> Result<LoadedDocument> {
        let start = Instant::now();

        let parse = tokio::task::spawn_blocking(move || parse_document(&bytes, password.as_deref()));

        let document = match tokio::time::timeout(self.timeout, parse).await {
            Ok(joined) => joined.map_err(|err| PdfMetaError::parse_failure(err.to_string()))??,
            Err(_) => return Err(PdfMetaError::timeout(self.timeout.as_secs())),
        };

        let page_count = document.get_pages().len();
        let load_time = start.elapsed();
        debug!("parsed document with {page_count} page(s) in {load_time:?}");

        Ok(LoadedDocument {
            document,
            page_count,
            load_time,
        })
    }
}

/// Parse and, when necessary, decrypt a document.
fn parse_document(bytes: &[u8], password: Option<&str>) -> Result<Document> {
    let mut document = Document::load_mem(bytes).map_err(classify_load_error)?;

    if document.is_encrypted() {
        match password {
            Some(password) => document
                .decrypt(password)
                .map_err(classify_decrypt_error)?,
            None => return Err(PdfMetaError::PasswordRequired),
        }
    }

    Ok(document)
}

/// Classify a load failure.
///
/// Some library versions reject encrypted documents at load time rather
/// than deferring to `decrypt`; those messages are folded into the
/// password flow so the caller prompts instead of failing.
fn classify_load_error(err: lopdf::Error) -> PdfMetaError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("encrypt") || lowered.contains("password") {
        PdfMetaError::PasswordRequired
    } else {
        PdfMetaError::parse_failure(message)
    }
}

/// Classify a decryption failure after a password was supplied.
fn classify_decrypt_error(err: lopdf::Error) -> PdfMetaError {
    let message = err.to_string();

    if message.to_lowercase().contains("password") {
        PdfMetaError::InvalidPassword
    } else {
        PdfMetaError::parse_failure(message)
    }
}
