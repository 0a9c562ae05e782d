//! Integration tests for terminal failures.

use std::path::Path;
use std::time::Duration;

use pdfmeta::config::LoadOptions;
use pdfmeta::error::PdfMetaError;
use pdfmeta::inspect::{InspectSession, Inspector, Phase, run_inspection};
use tempfile::TempDir;

use crate::common::{ScriptedPrompt, write_fixture};

#[tokio::test]
async fn test_nonexistent_input_is_read_failure() {
    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let result = run_inspection(
        &inspector,
        &mut session,
        Path::new("/nonexistent/file.pdf"),
        None,
        &mut prompt,
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, PdfMetaError::ReadFailure { .. }));
    assert!(format!("{err}").starts_with("Error processing file:"));
    assert_eq!(session.phase(), Phase::Failed);
    assert!(session.result().is_none());
}

#[tokio::test]
async fn test_empty_file_is_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "empty.pdf", b"");

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let result = run_inspection(&inspector, &mut session, &path, None, &mut prompt).await;

    let err = result.unwrap_err();
    assert!(matches!(err, PdfMetaError::ParseFailure { .. }));
    assert!(format!("{err}").starts_with("Error processing PDF:"));
    assert_eq!(session.phase(), Phase::Failed);
}

#[tokio::test]
async fn test_garbage_bytes_are_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "noise.bin", b"this is not a pdf at all");

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let result = run_inspection(&inspector, &mut session, &path, None, &mut prompt).await;
    assert!(matches!(result, Err(PdfMetaError::ParseFailure { .. })));
}

#[tokio::test]
async fn test_zero_timeout_surfaces_as_timeout() {
    // A multi-megabyte junk body keeps the blocking parse busy long
    // enough that the zero deadline always fires first.
    let temp_dir = TempDir::new().unwrap();
    let mut bytes = b"%PDF-1.4\n".to_vec();
    bytes.extend(std::iter::repeat_n(b"1 0 obj << /Length 3 >> endobj\n", 200_000).flatten());
    let path = write_fixture(&temp_dir, "slow.pdf", &bytes);

    let inspector = Inspector::new(&LoadOptions {
        timeout: Duration::ZERO,
    });
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let result = run_inspection(&inspector, &mut session, &path, None, &mut prompt).await;

    assert!(matches!(result, Err(PdfMetaError::Timeout { seconds: 0 })));
    assert_eq!(session.phase(), Phase::Failed);
}
