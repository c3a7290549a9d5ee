//! Single QR Generator Component
//!
//! Item id + optional custom code in, one QR card out.

use inventory_domain::{Outcome, QrCode, QrRequest, QrResponse, RequestState, QR_FAILED_MESSAGE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::commands;
use crate::components::QrCard;
use crate::context::use_config;

/// Form posting to `/generate_qr` and rendering the answer in `#single-result`
#[component]
pub fn SingleQrGenerator() -> impl IntoView {
    let config = use_config();

    let (item_id, set_item_id) = signal(String::from("1"));
    let (custom_code, set_custom_code) = signal(String::new());
    let state = RwSignal::new(RequestState::<QrCode>::Idle);

    let generate = move |_| {
        let request = QrRequest::from_inputs(&item_id.get_untracked(), &custom_code.get_untracked());
        let config = config.clone();
        state.set(RequestState::Loading);

        spawn_local(async move {
            let result = commands::generate_qr(&config, &request)
                .await
                .map(QrResponse::into_code);
            if let Err(e) = &result {
                warn!(error = %e, "generate_qr failed");
            }
            state.set(RequestState::Done(Outcome::from_result(result)));
        });
    };

    view! {
        <div class="qr-form">
            <label for="single-item-id">"Item ID"</label>
            <input
                type="number"
                id="single-item-id"
                min="1"
                prop:value=item_id
                on:input=move |ev| set_item_id.set(event_target_value(&ev))
            />
            <label for="custom-code">"Custom code (optional)"</label>
            <input
                type="text"
                id="custom-code"
                placeholder="Leave blank for a random code"
                prop:value=custom_code
                on:input=move |ev| set_custom_code.set(event_target_value(&ev))
            />
            <button type="button" id="generate-single" on:click=generate>
                "Generate QR Code"
            </button>
        </div>

        <div id="single-result" class="result-area">
            {move || match state.get() {
                RequestState::Idle => ().into_any(),
                RequestState::Loading => view! { <div class="loading"></div> }.into_any(),
                RequestState::Done(Outcome::Generated(code)) => view! { <QrCard code=code/> }.into_any(),
                RequestState::Done(outcome) => view! {
                    <div class="error">{outcome.failure_text(QR_FAILED_MESSAGE)}</div>
                }.into_any(),
            }}
        </div>
    }
}
