//! Botones Analizar / Reiniciar

use anpr_common::messages;
use leptos::prelude::*;

#[component]
pub fn ActionButtons<FS, FR>(
    can_submit: Signal<bool>,
    is_analyzing: Signal<bool>,
    on_submit: FS,
    on_reset: FR,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send,
    FR: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="action-buttons">
            <button
                type="button"
                class="btn btn-primary"
                disabled=move || !can_submit.get()
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || if is_analyzing.get() {
                    view! { <span class="spinner" /> }.into_any()
                } else {
                    view! { <span class="btn-icon">"🚗"</span> }.into_any()
                }}
                {move || messages::submit_label(is_analyzing.get())}
            </button>

            <button
                type="button"
                class="btn btn-secondary"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                {messages::RESET_LABEL}
            </button>
        </div>
    }
}
