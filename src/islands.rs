//! Island Mounting
//!
//! Server-rendered pages mark placeholders with `data-island="<name>"`;
//! each one gets its component mounted in place.

use inventory_domain::UiConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{BatchQrGenerator, CodeInput, PdfDownload, SingleQrGenerator, ThemeToggle};
use crate::context::provide_config;

const ISLAND_ATTR: &str = "data-island";

/// Components that can be mounted into a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Island {
    CodeInput,
    ThemeToggle,
    SingleQr,
    BatchQr,
    PdfDownload,
}

impl Island {
    pub fn name(&self) -> &'static str {
        match self {
            Island::CodeInput => "code-input",
            Island::ThemeToggle => "theme-toggle",
            Island::SingleQr => "qr-single",
            Island::BatchQr => "qr-batch",
            Island::PdfDownload => "qr-pdf",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "code-input" => Some(Island::CodeInput),
            "theme-toggle" => Some(Island::ThemeToggle),
            "qr-single" => Some(Island::SingleQr),
            "qr-batch" => Some(Island::BatchQr),
            "qr-pdf" => Some(Island::PdfDownload),
            _ => None,
        }
    }
}

/// Mount every island found in the document, returning how many were mounted
pub fn mount_all(config: &UiConfig) -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(hosts) = document.query_selector_all(&format!("[{}]", ISLAND_ATTR)) else {
        return 0;
    };

    let mut mounted = 0;
    for index in 0..hosts.length() {
        let Some(host) = hosts.item(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let name = host.get_attribute(ISLAND_ATTR).unwrap_or_default();
        match Island::from_name(&name) {
            Some(island) => {
                debug!(island = island.name(), "mounting island");
                mount(island, host, config.clone());
                mounted += 1;
            }
            None => warn!(name = %name, "unknown island, skipping"),
        }
    }
    mounted
}

fn mount(island: Island, host: HtmlElement, config: UiConfig) {
    match island {
        Island::CodeInput => {
            let initial = host.get_attribute("data-value").unwrap_or_default();
            let placeholder = host.get_attribute("data-placeholder").unwrap_or_default();
            mount_to(host, move || view! { <CodeInput initial=initial placeholder=placeholder/> })
                .forget();
        }
        Island::ThemeToggle => mount_to(host, ThemeToggle).forget(),
        Island::SingleQr => mount_to(host, move || {
            provide_config(config);
            view! { <SingleQrGenerator/> }
        })
        .forget(),
        Island::BatchQr => mount_to(host, move || {
            provide_config(config);
            view! { <BatchQrGenerator/> }
        })
        .forget(),
        Island::PdfDownload => mount_to(host, move || {
            provide_config(config);
            view! { <PdfDownload/> }
        })
        .forget(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_island_names_round_trip() {
        for island in [
            Island::CodeInput,
            Island::ThemeToggle,
            Island::SingleQr,
            Island::BatchQr,
            Island::PdfDownload,
        ] {
            assert_eq!(Island::from_name(island.name()), Some(island));
        }
    }

    #[test]
    fn test_unknown_island() {
        assert_eq!(Island::from_name("qr-bulk"), None);
        assert_eq!(Island::from_name(""), None);
        assert_eq!(Island::from_name(" theme-toggle "), Some(Island::ThemeToggle));
    }
}
