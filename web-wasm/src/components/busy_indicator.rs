//! Indicador de análisis en curso

use anpr_common::messages;
use leptos::prelude::*;

#[component]
pub fn BusyIndicator() -> impl IntoView {
    view! {
        <div class="busy-container">
            <div class="spinner large" />
            <p class="busy-text">{messages::BUSY_TEXT}</p>
        </div>
    }
}
