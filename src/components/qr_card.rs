//! QR Card Component

use inventory_domain::QrCode;
use leptos::prelude::*;

/// One generated code: image, item id and item code
#[component]
pub fn QrCard(code: QrCode) -> impl IntoView {
    let label = code.item_id_label();
    view! {
        <div class="qr-item">
            <img src=code.qr_image alt="QR Code"/>
            <div class="item-info">{label}</div>
            <div class="item-code">{code.item_code}</div>
        </div>
    }
}
