//! Integration tests for the unencrypted inspection flow.

use pdfmeta::config::LoadOptions;
use pdfmeta::format::format_size;
use pdfmeta::inspect::{InspectSession, Inspector, Phase, run_inspection};
use tempfile::TempDir;

use crate::common::{ScriptedPrompt, basic_pdf, write_fixture};

#[tokio::test]
async fn test_inspect_unencrypted_untagged() {
    let temp_dir = TempDir::new().unwrap();
    let bytes = basic_pdf("Quarterly Report", false);
    let path = write_fixture(&temp_dir, "report.pdf", &bytes);

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let report = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    assert!(prompt.requests.is_empty(), "no password should be asked");

    assert_eq!(report.file_name, "report.pdf");
    assert_eq!(report.mime_type, "application/pdf");
    assert_eq!(report.formatted_size, format_size(bytes.len() as u64));
    assert!(report.is_pdf);
    assert_eq!(report.version.as_deref(), Some("1.7"));

    assert_eq!(report.info.get("Title"), Some("Quarterly Report"));
    assert_eq!(report.info.get("Author"), Some("Integration Author"));
    assert_eq!(report.info.get("Page Count"), Some("1"));
    assert!(report.info.get("Last Modified").is_some());
    assert!(
        report
            .info
            .get("Security Status")
            .unwrap()
            .starts_with("Not Encrypted")
    );
    assert!(
        report
            .info
            .get("Accessibility")
            .unwrap()
            .starts_with("Not Tagged")
    );

    assert_eq!(session.phase(), Phase::Done);
    assert!(session.retry().is_empty());
    assert_eq!(session.result(), Some(&report));
}

#[tokio::test]
async fn test_inspect_dates_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "dates.pdf", &basic_pdf("Dated", false));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let report = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    assert_eq!(
        report.info.get("CreationDate"),
        Some("2023-01-15 10:30:00 -05:00 (when the PDF was first created)")
    );
    assert_eq!(
        report.info.get("ModDate"),
        Some("2023-01-16 09:00:00 +00:00 (when the PDF was last modified)")
    );
}

#[tokio::test]
async fn test_inspect_tagged_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "tagged.pdf", &basic_pdf("Tagged Doc", true));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();
    let mut prompt = ScriptedPrompt::default();

    let report = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    assert!(
        report
            .info
            .get("Accessibility")
            .unwrap()
            .starts_with("Tagged")
    );
}

#[tokio::test]
async fn test_inspect_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "stable.pdf", &basic_pdf("Stable", false));

    let inspector = Inspector::new(&LoadOptions::default());
    let mut session = InspectSession::new();

    let mut prompt = ScriptedPrompt::default();
    let first = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    let mut prompt = ScriptedPrompt::default();
    let second = run_inspection(&inspector, &mut session, &path, None, &mut prompt)
        .await
        .unwrap();

    assert_eq!(first, second);
}
