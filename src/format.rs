//! Value formatting for the metadata display.
//!
//! Pure functions that turn raw byte counts and PDF date strings
//! (`D:YYYYMMDDHHmmSS±HH'mm'`) into display-ready text. Date handling
//! uses the `time` crate with explicit format descriptions; a string
//! that does not match the PDF date pattern is returned unchanged.

use std::time::SystemTime;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const PDF_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day][hour][minute][second]");

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
);

/// Format a byte count as a human-readable size.
///
/// Zero is rendered as `"0 Bytes"`. Otherwise the unit is selected by
/// `floor(log1024(bytes))`, clamped to the Bytes/KB/MB/GB table, and the
/// scaled value is shown with at most two decimal places.
///
/// # Examples
///
/// ```
/// use pdfmeta::format::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1048576), "1 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut value = format!("{scaled:.2}");
    if value.contains('.') {
        value.truncate(value.trim_end_matches('0').trim_end_matches('.').len());
    }

    format!("{value} {}", SIZE_UNITS[exponent])
}

/// Format a PDF date string for display.
///
/// Recognizes `D:YYYYMMDDHHmmSS` optionally followed by a timezone
/// offset (`±HH'mm'` or `Z`). A matching string is rendered as
/// `YYYY-MM-DD HH:MM:SS ±HH:MM`, preserving the embedded offset (UTC
/// when none is given). Anything else is returned unchanged; this
/// function never fails.
///
/// # Examples
///
/// ```
/// use pdfmeta::format::format_pdf_date;
///
/// assert_eq!(
///     format_pdf_date("D:20230115103000-05'00'"),
///     "2023-01-15 10:30:00 -05:00"
/// );
/// assert_eq!(format_pdf_date("garbage"), "garbage");
/// ```
pub fn format_pdf_date(raw: &str) -> String {
    match parse_pdf_date(raw) {
        Some(date) => date
            .format(DISPLAY_FORMAT)
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    }
}

/// Parse a PDF date string into an absolute timestamp.
///
/// Returns `None` when the input does not match the pattern.
pub fn parse_pdf_date(raw: &str) -> Option<OffsetDateTime> {
    let rest = raw.strip_prefix("D:")?;
    if rest.len() < 14 || !rest.is_char_boundary(14) {
        return None;
    }

    let (digits, offset_part) = rest.split_at(14);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let datetime = PrimitiveDateTime::parse(digits, PDF_DATE_FORMAT).ok()?;
    let offset = parse_offset(offset_part)?;

    Some(datetime.assume_offset(offset))
}

/// Parse the `±HH'mm'`, `Z`, or empty offset suffix of a PDF date.
fn parse_offset(part: &str) -> Option<UtcOffset> {
    if part.is_empty() || part == "Z" {
        return Some(UtcOffset::UTC);
    }

    let mut chars = part.chars();
    let sign = match chars.next()? {
        '+' => 1i8,
        '-' => -1i8,
        _ => return None,
    };

    let rest: String = chars.filter(|c| *c != '\'').collect();
    if rest.len() != 2 && rest.len() != 4 {
        return None;
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i8 = rest[..2].parse().ok()?;
    let minutes: i8 = if rest.len() == 4 {
        rest[2..4].parse().ok()?
    } else {
        0
    };

    UtcOffset::from_hms(sign * hours, sign * minutes, 0).ok()
}

/// Format a filesystem timestamp with the same layout as PDF dates.
///
/// Used for the "Last Modified" entry seeded from file metadata.
pub fn format_system_time(timestamp: SystemTime) -> String {
    let datetime = OffsetDateTime::from(timestamp);
    datetime
        .format(DISPLAY_FORMAT)
        .unwrap_or_else(|_| format!("{datetime:?}"))
}
