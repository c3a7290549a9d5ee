//! Server Command Wrappers
//!
//! Frontend bindings to the inventory server's JSON endpoints, organized
//! by feature.

mod qr;
mod pdf;

use inventory_domain::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use qr::*;
pub use pdf::*;

/// POST `body` as JSON and hand back the raw response
async fn post(url: &str, body: &impl Serialize) -> ApiResult<Response> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".to_string()))?;

    let headers = Headers::new().map_err(network_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network_error)?;

    let body = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;

    debug!(url, "POST");
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;

    resp_value
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Network("Not a Response".to_string()))
}

/// POST JSON and decode a JSON answer, whatever the status code
async fn post_json<T: DeserializeOwned>(url: &str, body: &impl Serialize) -> ApiResult<T> {
    let resp = post(url, body).await?;
    debug!(url, status = resp.status(), "response");

    let json = JsFuture::from(resp.json().map_err(decode_error)?)
        .await
        .map_err(decode_error)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn network_error(err: JsValue) -> ApiError {
    ApiError::Network(js_error_message(&err))
}

fn decode_error(err: JsValue) -> ApiError {
    ApiError::Decode(js_error_message(&err))
}

/// `error.message` for JS `Error`s, the string itself for thrown strings
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
