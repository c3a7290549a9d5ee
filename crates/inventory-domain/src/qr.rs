//! QR Payloads
//!
//! Request and response bodies of the QR endpoints.

use serde::{Deserialize, Serialize};

use crate::input::parse_js_int;
use crate::lenient::{js_text, truthy, undefined_text};

pub const GENERATE_QR_PATH: &str = "/generate_qr";
pub const GENERATE_BATCH_PATH: &str = "/generate_batch";

/// Shown when the server answers `success: false` for a single code
pub const QR_FAILED_MESSAGE: &str = "Failed to generate QR code";
/// Shown when the server answers `success: false` for a batch
pub const BATCH_FAILED_MESSAGE: &str = "Failed to generate QR codes";

const DEFAULT_BATCH_SIZE: u32 = 32;

/// Body of `POST /generate_qr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrRequest {
    /// `null` when the field held no number
    pub item_id: Option<i64>,
    /// Sent verbatim; the server trims it and invents a code when blank
    pub custom_code: String,
}

impl QrRequest {
    /// Build from the raw text of the item id and custom code fields
    pub fn from_inputs(item_id: &str, custom_code: &str) -> Self {
        Self {
            item_id: parse_js_int(item_id),
            custom_code: custom_code.to_string(),
        }
    }
}

/// A generated code, as returned by either endpoint
///
/// Fields hold display text: whatever JSON the server sent is rendered
/// as a template literal would (`5`, `"5"` and `5.0` all read `5`,
/// `null` reads `null`, a missing field reads `undefined`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCode {
    #[serde(default = "undefined_text", deserialize_with = "js_text")]
    pub item_id: String,
    #[serde(default = "undefined_text", deserialize_with = "js_text")]
    pub item_code: String,
    /// Data URI or URL of the PNG
    #[serde(default, deserialize_with = "js_text")]
    pub qr_image: String,
}

impl QrCode {
    /// Caption under the image
    pub fn item_id_label(&self) -> String {
        format!("Item ID: {}", self.item_id)
    }
}

/// Response of `POST /generate_qr`
///
/// Only `success` decides; it is read for truthiness, so `null` or a
/// missing flag means failure. Failure bodies carry nothing else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QrResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "js_text")]
    pub qr_image: String,
    #[serde(default = "undefined_text", deserialize_with = "js_text")]
    pub item_id: String,
    #[serde(default = "undefined_text", deserialize_with = "js_text")]
    pub item_code: String,
}

impl Default for QrResponse {
    fn default() -> Self {
        Self {
            success: false,
            qr_image: String::new(),
            item_id: undefined_text(),
            item_code: undefined_text(),
        }
    }
}

impl QrResponse {
    /// The generated code, or `None` when the server reported failure
    pub fn into_code(self) -> Option<QrCode> {
        if !self.success {
            return None;
        }
        Some(QrCode {
            item_id: self.item_id,
            item_code: self.item_code,
            qr_image: self.qr_image,
        })
    }
}

/// Body of `POST /generate_batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    pub num_items: u32,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            num_items: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BatchRequest {
    /// Non-numeric or non-positive input falls back to the default size.
    pub fn from_input(num_items: &str) -> Self {
        match parse_js_int(num_items).and_then(|n| u32::try_from(n).ok()) {
            Some(n) if n > 0 => Self { num_items: n },
            _ => Self::default(),
        }
    }
}

/// Response of `POST /generate_batch`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BatchResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    /// `null` reads as an empty batch
    #[serde(default)]
    pub qr_codes: Option<Vec<QrCode>>,
}

impl BatchResponse {
    pub fn into_codes(self) -> Option<Vec<QrCode>> {
        self.success.then(|| self.qr_codes.unwrap_or_default())
    }
}
