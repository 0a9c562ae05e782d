//! Integration tests for the password prompt and retry loop.

use pdfmeta::config::LoadOptions;
use pdfmeta::error::PdfMetaError;
use pdfmeta::inspect::{
    INVALID_PASSWORD_MESSAGE, InspectSession, Inspector, Phase, run_inspection,
};
use pdfmeta::prompt::DisabledPrompt;
use tempfile::TempDir;

use crate::common::{
    ScriptedPrompt, encrypted_pdf, pdf_with_encrypt_marker_in_content, write_fixture,
};

#[tokio::test]
async fn test_encrypted_prompts_without_error_then_cancel() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "locked.pdf", &encrypted_pdf(b"secret"));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::cancelling();

    let result = run_inspection(&inspector, &mut session, &path, None, &mut prompt).await;
    assert!(matches!(result, Err(PdfMetaError::Cancelled)));

    // The first prompt carries no error and no attempts yet.
    assert_eq!(prompt.requests.len(), 1);
    assert_eq!(prompt.requests[0].error, None);
    assert_eq!(prompt.requests[0].attempts, 0);
    assert_eq!(prompt.requests[0].pending_name.as_deref(), Some("locked.pdf"));

    // Cancel clears the retry state wholesale.
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.retry().is_empty());
    assert!(session.result().is_none());
}

#[tokio::test]
async fn test_wrong_then_correct_password() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "locked.pdf", &encrypted_pdf(b"secret"));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::new([
        Some("wrongpass".to_string()),
        Some("secret".to_string()),
    ]);

    let report = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    assert_eq!(prompt.requests.len(), 2);

    // First request: fresh prompt, no error.
    assert_eq!(prompt.requests[0].error, None);
    assert_eq!(prompt.requests[0].attempts, 0);

    // Second request: the wrong password was rejected.
    assert_eq!(
        prompt.requests[1].error.as_deref(),
        Some(INVALID_PASSWORD_MESSAGE)
    );
    assert_eq!(prompt.requests[1].attempts, 1);
    assert_eq!(prompt.requests[1].pending_name.as_deref(), Some("locked.pdf"));

    assert_eq!(report.info.get("Page Count"), Some("1"));
    assert!(
        report
            .info
            .get("Security Status")
            .unwrap()
            .starts_with("Encrypted")
    );

    assert_eq!(session.phase(), Phase::Done);
    assert!(session.retry().is_empty());
    assert_eq!(session.result(), Some(&report));
}

#[tokio::test]
async fn test_correct_password_upfront_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "locked.pdf", &encrypted_pdf(b"secret"));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let report = run_inspection(
        &inspector,
        &mut session,
        &path,
        Some("secret".to_string()),
        &mut prompt,
    )
    .await
    .unwrap();

    assert!(prompt.requests.is_empty());
    assert_eq!(report.info.get("Page Count"), Some("1"));
}

#[tokio::test]
async fn test_batch_mode_fails_instead_of_prompting() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "locked.pdf", &encrypted_pdf(b"secret"));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = DisabledPrompt::new();

    let result = run_inspection(&inspector, &mut session, &path, None, &mut prompt).await;
    assert!(matches!(result, Err(PdfMetaError::PasswordRequired)));
    assert_eq!(session.phase(), Phase::Failed);
}

#[tokio::test]
async fn test_batch_mode_wrong_password_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "locked.pdf", &encrypted_pdf(b"secret"));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = DisabledPrompt::new();

    let result = run_inspection(
        &inspector,
        &mut session,
        &path,
        Some("nope".to_string()),
        &mut prompt,
    )
    .await;

    assert!(matches!(result, Err(PdfMetaError::InvalidPassword)));
    assert_eq!(session.phase(), Phase::Failed);
}

#[tokio::test]
async fn test_encrypt_marker_false_positive_still_prompts() {
    // The literal text "/Encrypt" inside an uncompressed content stream
    // trips the heuristic. The prompt is shown and the supplied
    // password is simply ignored by the library; "Security Status"
    // keeps reflecting the heuristic.
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "marker.pdf",
        &pdf_with_encrypt_marker_in_content(),
    );

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::new([Some("anything".to_string())]);

    let report = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    assert_eq!(prompt.requests.len(), 1);
    assert_eq!(report.info.get("Page Count"), Some("1"));
    assert!(
        report
            .info
            .get("Security Status")
            .unwrap()
            .starts_with("Encrypted")
    );
}
