//! PDF Sheet
//!
//! Printable sheet of QR codes, downloaded as a file.

use chrono::NaiveDateTime;
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::input::parse_js_int;

pub const GENERATE_PDF_PATH: &str = "/generate_pdf";

const DEFAULT_ITEMS: u32 = 32;
const DEFAULT_COLUMNS: u32 = 8;

/// Body of `POST /generate_pdf`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfRequest {
    pub num_items: u32,
    pub num_columns: u32,
}

impl Default for PdfRequest {
    fn default() -> Self {
        Self {
            num_items: DEFAULT_ITEMS,
            num_columns: DEFAULT_COLUMNS,
        }
    }
}

impl PdfRequest {
    /// Each field falls back to its default when not a positive number.
    pub fn from_inputs(num_items: &str, num_columns: &str) -> Self {
        Self {
            num_items: positive(num_items).unwrap_or(DEFAULT_ITEMS),
            num_columns: positive(num_columns).unwrap_or(DEFAULT_COLUMNS),
        }
    }
}

fn positive(raw: &str) -> Option<u32> {
    parse_js_int(raw)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0)
}

/// File name from a `Content-Disposition` header.
///
/// `filename*=` (RFC 5987, percent-encoded) wins over plain `filename=`.
pub fn attachment_filename(header: Option<&str>) -> Option<String> {
    let header = header?;
    let mut plain = None;
    let mut extended = None;

    for param in header.split(';').map(str::trim) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                // charset'language'percent-encoded
                let encoded = value.trim().splitn(3, '\'').nth(2).unwrap_or(value);
                let decoded = percent_decode_str(encoded).decode_utf8_lossy().into_owned();
                extended = Some(decoded);
            }
            "filename" => {
                plain = Some(value.trim().trim_matches('"').to_string());
            }
            _ => {}
        }
    }

    extended.or(plain).filter(|name| !name.is_empty())
}

/// Name used when the server sent none, matching its own pattern
pub fn fallback_filename(now: NaiveDateTime) -> String {
    format!("QR_Codes_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_request_defaults() {
        assert_eq!(PdfRequest::from_inputs("", ""), PdfRequest::default());
        assert_eq!(
            PdfRequest::from_inputs("40", "5"),
            PdfRequest { num_items: 40, num_columns: 5 }
        );
        assert_eq!(
            PdfRequest::from_inputs("12", "0"),
            PdfRequest { num_items: 12, num_columns: 8 }
        );
    }

    #[test]
    fn test_plain_filename() {
        assert_eq!(
            attachment_filename(Some("attachment; filename=QR_Codes_20240101_120000.pdf")),
            Some("QR_Codes_20240101_120000.pdf".to_string())
        );
        assert_eq!(
            attachment_filename(Some("attachment; filename=\"sheet one.pdf\"")),
            Some("sheet one.pdf".to_string())
        );
    }

    #[test]
    fn test_extended_filename_wins() {
        let header = "attachment; filename=fallback.pdf; filename*=UTF-8''QR%20Codes%E2%9C%93.pdf";
        assert_eq!(
            attachment_filename(Some(header)),
            Some("QR Codes✓.pdf".to_string())
        );
    }

    #[test]
    fn test_missing_filename() {
        assert_eq!(attachment_filename(None), None);
        assert_eq!(attachment_filename(Some("inline")), None);
        assert_eq!(attachment_filename(Some("attachment; filename=\"\"")), None);
    }

    #[test]
    fn test_fallback_filename() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 2)
            .unwrap();
        assert_eq!(fallback_filename(now), "QR_Codes_20240309_070502.pdf");
    }
}
