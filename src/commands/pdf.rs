//! PDF Commands
//!
//! Fetch the printable QR sheet as a blob.

use inventory_domain::{
    attachment_filename, fallback_filename, ApiError, ApiResult, PdfRequest, UiConfig,
    GENERATE_PDF_PATH,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Blob;

use super::{decode_error, post};

/// A downloaded PDF waiting to be saved
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub blob: Blob,
    pub filename: String,
}

pub async fn generate_pdf(config: &UiConfig, request: &PdfRequest) -> ApiResult<PdfFile> {
    let resp = post(&config.endpoint(GENERATE_PDF_PATH), request).await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let disposition = resp.headers().get("Content-Disposition").ok().flatten();
    let filename = attachment_filename(disposition.as_deref())
        .unwrap_or_else(|| fallback_filename(chrono::Local::now().naive_local()));

    let blob = JsFuture::from(resp.blob().map_err(decode_error)?)
        .await
        .map_err(decode_error)?
        .dyn_into::<Blob>()
        .map_err(|_| ApiError::Decode("Not a Blob".to_string()))?;

    Ok(PdfFile { blob, filename })
}
