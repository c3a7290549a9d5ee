//! Island Context
//!
//! Each island is its own reactive root, so shared values are provided
//! per mount.

use inventory_domain::UiConfig;
use leptos::prelude::*;

/// Make the config available to the component mounted next
pub fn provide_config(config: UiConfig) {
    provide_context(config);
}

/// Config of the current island, same-origin if none was provided
pub fn use_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
