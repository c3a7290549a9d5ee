//! Inventory UI Entry Point
//!
//! Applies the stored theme, then mounts the interactive islands of the
//! server-rendered inventory pages.

mod logging;
mod commands;
mod context;
mod storage;
mod dom;
mod components;
mod islands;

use inventory_domain::{load_theme, UiConfig};
use tracing::info;

use storage::LocalStorage;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let theme = load_theme(&LocalStorage::theme());
    dom::apply_body_theme(theme);

    let config = UiConfig::new(dom::body_api_base().unwrap_or_default());
    let mounted = islands::mount_all(&config);
    info!(mounted, theme = theme.as_str(), api_base = %config.api_base, "inventory ui ready");
}
