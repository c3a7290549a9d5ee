//! Batch QR Generator Component
//!
//! Generates a numbered run of codes in one request.

use inventory_domain::{
    BatchRequest, BatchResponse, Outcome, QrCode, RequestState, BATCH_FAILED_MESSAGE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::commands;
use crate::components::QrCard;
use crate::context::use_config;

#[component]
pub fn BatchQrGenerator() -> impl IntoView {
    let config = use_config();

    let (count, set_count) = signal(BatchRequest::default().num_items.to_string());
    let state = RwSignal::new(RequestState::<Vec<QrCode>>::Idle);

    let generate = move |_| {
        let request = BatchRequest::from_input(&count.get_untracked());
        let config = config.clone();
        state.set(RequestState::Loading);

        spawn_local(async move {
            let result = commands::generate_batch(&config, &request)
                .await
                .map(BatchResponse::into_codes);
            match &result {
                Ok(Some(codes)) => info!(count = codes.len(), "batch generated"),
                Ok(None) => warn!("batch rejected by server"),
                Err(e) => warn!(error = %e, "generate_batch failed"),
            }
            state.set(RequestState::Done(Outcome::from_result(result)));
        });
    };

    view! {
        <div class="qr-form">
            <label for="batch-count">"Number of items"</label>
            <input
                type="number"
                id="batch-count"
                min="1"
                prop:value=count
                on:input=move |ev| set_count.set(event_target_value(&ev))
            />
            <button type="button" id="generate-batch" on:click=generate>
                "Generate Batch"
            </button>
        </div>

        <div id="batch-result" class="result-area">
            {move || match state.get() {
                RequestState::Idle => ().into_any(),
                RequestState::Loading => view! { <div class="loading"></div> }.into_any(),
                RequestState::Done(Outcome::Generated(codes)) => view! {
                    <div class="qr-grid">
                        {codes.into_iter().map(|code| view! { <QrCard code=code/> }).collect_view()}
                    </div>
                }.into_any(),
                RequestState::Done(outcome) => view! {
                    <div class="error">{outcome.failure_text(BATCH_FAILED_MESSAGE)}</div>
                }.into_any(),
            }}
        </div>
    }
}
