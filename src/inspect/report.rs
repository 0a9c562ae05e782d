//! Report types assembled from a successful inspection.
//!
//! The [`InfoDictionary`] mirrors the document's `/Info` dictionary as
//! display-ready strings, seeded and augmented with locally computed
//! fields. Insertion order is preserved for presentation; a later write
//! to an existing key overwrites its value in place.

use indexmap::IndexMap;
use lopdf::{Document, Object};
use serde::Serialize;

use crate::format::{format_pdf_date, format_size, format_system_time};
use crate::io::{FileSample, LoadedDocument};
use crate::probe::FileProbe;

/// Insertion-ordered mapping from field name to display-ready value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoDictionary(IndexMap<String, String>);

impl InfoDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting any earlier value for the same key
    /// while keeping the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the presentation layer needs about one inspected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    /// File name of the input.
    pub file_name: String,
    /// Human-readable file size.
    pub formatted_size: String,
    /// MIME type guessed from the extension.
    pub mime_type: String,
    /// Whether the byte header identified the file as a PDF.
    pub is_pdf: bool,
    /// PDF version from the header, when present.
    pub version: Option<String>,
    /// Document metadata fields, in presentation order.
    pub info: InfoDictionary,
}

/// Assemble the report for a successfully parsed document.
///
/// The dictionary is built in three passes: a "Last Modified" seed from
/// the filesystem, the library-reported `/Info` fields (dates
/// reformatted, the two well-known date keys given explanatory
/// suffixes), and finally the computed fields. "Security Status" and
/// "Accessibility" reflect the byte-level heuristics, not whether a
/// password was actually needed.
pub fn build_report(
    sample: &FileSample,
    probe: &FileProbe,
    loaded: &LoadedDocument,
) -> InspectionReport {
    let mut info = InfoDictionary::new();

    if let Some(modified) = sample.modified {
        info.insert("Last Modified", format_system_time(modified));
    }

    for (key, value) in document_info(&loaded.document) {
        let value = decorate_field(&key, value);
        info.insert(key, value);
    }

    info.insert("Page Count", loaded.page_count.to_string());
    info.insert("Security Status", security_status(probe.encrypted));
    info.insert("Accessibility", accessibility_status(probe.tagged));

    InspectionReport {
        file_name: sample.name.clone(),
        formatted_size: format_size(sample.size),
        mime_type: sample.mime_type.clone(),
        is_pdf: probe.is_pdf,
        version: probe.version.clone(),
        info,
    }
}

/// Wording for the "Security Status" field.
pub fn security_status(encrypted: bool) -> &'static str {
    if encrypted {
        "Encrypted (a password is required to open this document)"
    } else {
        "Not Encrypted (this document opens without a password)"
    }
}

/// Wording for the "Accessibility" field.
pub fn accessibility_status(tagged: bool) -> &'static str {
    if tagged {
        "Tagged (contains structure information for assistive technology)"
    } else {
        "Not Tagged (may not be accessible to assistive technology)"
    }
}

/// Reformat date-valued fields and suffix the two well-known date keys.
fn decorate_field(key: &str, value: String) -> String {
    match key {
        "CreationDate" => format!(
            "{} (when the PDF was first created)",
            format_pdf_date(&value)
        ),
        "ModDate" => format!(
            "{} (when the PDF was last modified)",
            format_pdf_date(&value)
        ),
        _ if value.starts_with("D:") => format_pdf_date(&value),
        _ => value,
    }
}

/// Collect the document's `/Info` dictionary as decoded strings, in
/// dictionary order.
fn document_info(document: &Document) -> Vec<(String, String)> {
    let Ok(info_ref) = document.trailer.get(b"Info") else {
        return Vec::new();
    };

    let info_dict = match info_ref {
        Object::Reference(id) => match document.get_object(*id).and_then(Object::as_dict) {
            Ok(dict) => dict,
            Err(_) => return Vec::new(),
        },
        Object::Dictionary(dict) => dict,
        _ => return Vec::new(),
    };

    info_dict
        .iter()
        .filter_map(|(key, value)| {
            let key = String::from_utf8_lossy(key).into_owned();
            object_to_string(document, value).map(|value| (key, value))
        })
        .collect()
}

/// Decode an info value to text.
///
/// PDF text strings are either UTF-16BE with a BOM or byte strings in
/// PDFDocEncoding; the latter is approximated as UTF-8 with a Latin-1
/// fallback.
fn object_to_string(document: &Document, object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::Integer(value) => Some(value.to_string()),
        Object::Real(value) => Some(value.to_string()),
        Object::Boolean(value) => Some(value.to_string()),
        Object::Reference(id) => document
            .get_object(*id)
            .ok()
            .and_then(|inner| object_to_string(document, inner)),
        _ => None,
    }
}

fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|pair| {
                if pair.len() == 2 {
                    Some(u16::from_be_bytes([pair[0], pair[1]]))
                } else {
                    None
                }
            })
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}
