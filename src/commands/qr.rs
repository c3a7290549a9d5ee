//! QR Commands
//!
//! Single and batch QR generation.

use inventory_domain::{
    ApiResult, BatchRequest, BatchResponse, QrRequest, QrResponse, UiConfig,
    GENERATE_BATCH_PATH, GENERATE_QR_PATH,
};

use super::post_json;

pub async fn generate_qr(config: &UiConfig, request: &QrRequest) -> ApiResult<QrResponse> {
    post_json(&config.endpoint(GENERATE_QR_PATH), request).await
}

pub async fn generate_batch(config: &UiConfig, request: &BatchRequest) -> ApiResult<BatchResponse> {
    post_json(&config.endpoint(GENERATE_BATCH_PATH), request).await
}
