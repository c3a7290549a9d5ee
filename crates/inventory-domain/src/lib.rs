//! Inventory Domain Layer
//!
//! Everything the inventory UI decides without touching the browser:
//! theme preference, input normalisation, QR request/response payloads
//! and how a finished request is presented.
//! Only serde, chrono and percent-encoding are pulled in so the whole
//! crate tests natively.

mod config;
mod error;
mod input;
mod lenient;
mod outcome;
mod pdf;
mod qr;
mod theme;

pub use config::UiConfig;
pub use error::{ApiError, ApiResult};
pub use input::{parse_js_int, uppercase_code};
pub use outcome::{Outcome, RequestState};
pub use pdf::{attachment_filename, fallback_filename, PdfRequest, GENERATE_PDF_PATH};
pub use qr::{
    BatchRequest, BatchResponse, QrCode, QrRequest, QrResponse, BATCH_FAILED_MESSAGE,
    GENERATE_BATCH_PATH, GENERATE_QR_PATH, QR_FAILED_MESSAGE,
};
pub use theme::{load_theme, toggle_theme, Theme, ThemeStore, THEME_STORAGE_KEY};
