//! Theme Toggle Component

use inventory_domain::{load_theme, toggle_theme};
use leptos::prelude::*;

use crate::dom::apply_body_theme;
use crate::storage::LocalStorage;

/// Moon/sun button flipping between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = LocalStorage::theme();
    let (theme, set_theme) = signal(load_theme(&store));

    let toggle = move |_| {
        let next = toggle_theme(&store, theme.get_untracked());
        apply_body_theme(next);
        set_theme.set(next);
    };

    view! {
        <button type="button" class="dark-mode-toggle" title="Toggle dark mode" on:click=toggle>
            <i class=move || format!("fas {}", theme.get().icon_class())></i>
        </button>
    }
}
