//! Alerta de error

use anpr_common::messages;
use leptos::prelude::*;

#[component]
pub fn AlertBox(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="alert alert-error" role="alert">
                <strong>{messages::ALERT_TITLE}</strong>
                <p>{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
