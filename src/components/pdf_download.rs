//! PDF Download Component
//!
//! Requests the printable sheet and saves it through the browser.

use inventory_domain::{Outcome, PdfRequest, RequestState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::commands;
use crate::context::use_config;
use crate::dom::save_blob;

#[component]
pub fn PdfDownload() -> impl IntoView {
    let config = use_config();
    let defaults = PdfRequest::default();

    let (count, set_count) = signal(defaults.num_items.to_string());
    let (columns, set_columns) = signal(defaults.num_columns.to_string());
    // Generated(filename) once saved
    let state = RwSignal::new(RequestState::<String>::Idle);

    let download = move |_| {
        let request = PdfRequest::from_inputs(&count.get_untracked(), &columns.get_untracked());
        let config = config.clone();
        state.set(RequestState::Loading);

        spawn_local(async move {
            let saved = commands::generate_pdf(&config, &request)
                .await
                .and_then(|file| save_blob(&file.blob, &file.filename).map(|_| file.filename));
            let outcome = match saved {
                Ok(name) => {
                    info!(filename = %name, "pdf saved");
                    Outcome::Generated(name)
                }
                Err(e) => {
                    warn!(error = %e, "generate_pdf failed");
                    Outcome::Error(e)
                }
            };
            state.set(RequestState::Done(outcome));
        });
    };

    view! {
        <div class="qr-form">
            <label for="pdf-count">"Number of items"</label>
            <input
                type="number"
                id="pdf-count"
                min="1"
                prop:value=count
                on:input=move |ev| set_count.set(event_target_value(&ev))
            />
            <label for="pdf-columns">"Codes per column"</label>
            <input
                type="number"
                id="pdf-columns"
                min="1"
                prop:value=columns
                on:input=move |ev| set_columns.set(event_target_value(&ev))
            />
            <button type="button" id="generate-pdf" on:click=download>
                "Download PDF"
            </button>
        </div>

        <div id="pdf-status" class="result-area">
            {move || match state.get() {
                RequestState::Idle => ().into_any(),
                RequestState::Loading => view! { <div class="loading"></div> }.into_any(),
                RequestState::Done(Outcome::Generated(name)) => view! {
                    <div class="success">{format!("Downloaded {}", name)}</div>
                }.into_any(),
                RequestState::Done(outcome) => view! {
                    <div class="error">{outcome.failure_text("Failed to generate PDF")}</div>
                }.into_any(),
            }}
        </div>
    }
}
