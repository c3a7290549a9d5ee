//! DOM Helpers
//!
//! Direct document access that does not belong to any one component.

use gloo_timers::callback::Timeout;
use inventory_domain::{ApiError, ApiResult, Theme};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, HtmlElement, Url};

use crate::commands::js_error_message;

/// Attribute on `<body>` that overrides the API base URL
const API_BASE_ATTR: &str = "data-api-base";

/// How long a download's object URL outlives the click
const REVOKE_DELAY_MS: u32 = 1_000;

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Reflect the theme on `<body data-theme>` for the stylesheet
pub fn apply_body_theme(theme: Theme) {
    if let Some(body) = body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

pub fn body_api_base() -> Option<String> {
    body()?.get_attribute(API_BASE_ATTR)
}

/// Hand a blob to the browser as a file download
pub fn save_blob(blob: &Blob, filename: &str) -> ApiResult<()> {
    let to_err = |e| ApiError::Decode(js_error_message(&e));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Decode("No document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Decode("No body".to_string()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(to_err)?;
    let anchor = document
        .create_element("a")
        .map_err(to_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ApiError::Decode("Not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor).map_err(to_err)?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    // Revoking in the same tick cancels the download in Safari.
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_outlives_click() {
        assert!(REVOKE_DELAY_MS > 0);
    }
}
