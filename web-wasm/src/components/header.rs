//! Cabecera

use anpr_common::messages;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-icon">"🚗"</div>
            <h1>{messages::APP_TITLE}</h1>
            <p class="text-muted">{messages::APP_SUBTITLE}</p>
        </header>
    }
}
