//! Code Input Component
//!
//! Item code field that uppercases as the user types.

use inventory_domain::uppercase_code;
use leptos::prelude::*;

/// `<input id="code">` for add/edit item forms
///
/// # Arguments
/// * `initial` - Pre-filled value (edit form), uppercased on render
/// * `placeholder` - Placeholder text
#[component]
pub fn CodeInput(
    #[prop(into, optional)] initial: String,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            type="text"
            id="code"
            name="code"
            autocomplete="off"
            placeholder=placeholder
            value=uppercase_code(&initial)
            on:input=move |ev| {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                let value = input.value();
                let upper = uppercase_code(&value);
                if upper != value {
                    input.set_value(&upper);
                }
            }
        />
    }
}
