//! Output formatting and display for pdfmeta.
//!
//! Renders the finished [`InspectionReport`] as two aligned key-value
//! grids (file attributes first, then the document metadata), or as
//! pretty-printed JSON for `--json` runs.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::config::Config;
use crate::error::{PdfMetaError, Result};
use crate::inspect::InspectionReport;

/// Create an output formatter from configuration.
pub fn create_formatter(config: &Config) -> OutputFormatter {
    OutputFormatter::from_config(config)
}

/// Render a report as the two metadata grids.
///
/// Info entries whose value is empty are omitted rather than shown as
/// blank rows.
pub fn render_report(formatter: &OutputFormatter, report: &InspectionReport) {
    let format_label = format_label(report);

    formatter.section("File");
    formatter.grid([
        ("Name", report.file_name.as_str()),
        ("Size", report.formatted_size.as_str()),
        ("Type", report.mime_type.as_str()),
        ("Format", format_label.as_str()),
    ]);

    let entries: Vec<(&str, &str)> = report
        .info
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();

    if !entries.is_empty() {
        formatter.section("Document Metadata");
        formatter.grid(entries);
    }
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &InspectionReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|err| PdfMetaError::parse_failure(format!("failed to encode report: {err}")))
}

/// Human-readable label for the detected file format.
fn format_label(report: &InspectionReport) -> String {
    if !report.is_pdf {
        return "Not a PDF document".to_string();
    }

    match &report.version {
        Some(version) => format!("PDF {version}"),
        None => "PDF".to_string(),
    }
}
