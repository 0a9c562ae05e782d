//! Byte-level classification of the input file.
//!
//! These checks scan the raw bytes for marker substrings instead of
//! parsing the object graph, so they are best-effort: the literal text
//! `/Encrypt` inside an uncompressed content stream will flag a document
//! that has no encryption dictionary, and a marker hidden inside a
//! compressed stream will be missed. That approximation is accepted;
//! the authoritative answer always comes from the parsing library.

/// Number of leading bytes inspected for the `%PDF-` header.
const HEADER_WINDOW: usize = 8;

/// Result of scanning a byte buffer once for all markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProbe {
    /// Whether the first bytes contain a `%PDF` header.
    pub is_pdf: bool,
    /// Version captured from `%PDF-<major>.<minor>`, when present.
    pub version: Option<String>,
    /// Whether `/Encrypt` occurs anywhere in the byte stream.
    pub encrypted: bool,
    /// Whether `/MarkInfo` occurs anywhere in the byte stream.
    pub tagged: bool,
}

impl FileProbe {
    /// Scan a byte buffer for the header and the marker substrings.
    pub fn scan(bytes: &[u8]) -> Self {
        let (is_pdf, version) = detect_pdf_header(bytes);
        let text = String::from_utf8_lossy(bytes);

        Self {
            is_pdf,
            version,
            encrypted: is_encrypted(&text),
            tagged: is_tagged(&text),
        }
    }
}

/// Check for the `/Encrypt` marker in the decoded byte stream.
pub fn is_encrypted(text: &str) -> bool {
    text.contains("/Encrypt")
}

/// Check for the `/MarkInfo` marker in the decoded byte stream.
pub fn is_tagged(text: &str) -> bool {
    text.contains("/MarkInfo")
}

/// Inspect the first bytes of a buffer for a PDF header.
///
/// Returns whether `%PDF` appears in the first eight bytes, and the
/// `major.minor` version string when the header carries one.
pub fn detect_pdf_header(bytes: &[u8]) -> (bool, Option<String>) {
    let window = &bytes[..bytes.len().min(HEADER_WINDOW)];
    let header = String::from_utf8_lossy(window);

    let is_pdf = header.contains("%PDF");
    let version = header
        .split_once("%PDF-")
        .and_then(|(_, rest)| capture_version(rest));

    (is_pdf, version)
}

/// Capture a leading `<digits>.<digits>` sequence.
fn capture_version(rest: &str) -> Option<String> {
    let bytes = rest.as_bytes();

    let major_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if major_len == 0 || bytes.get(major_len) != Some(&b'.') {
        return None;
    }

    let minor_len = bytes[major_len + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if minor_len == 0 {
        return None;
    }

    Some(rest[..major_len + 1 + minor_len].to_string())
}
