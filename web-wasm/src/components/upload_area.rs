//! Zona de carga de la imagen (arrastrar o hacer clic)

use anpr_common::{messages, ACCEPT_ATTRIBUTE};
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, Event, File};

#[component]
pub fn UploadArea<F>(
    preview: Signal<Option<String>>,
    format_hint: Signal<String>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // sólo el primer archivo
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // permite volver a elegir el mismo archivo
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if preview.with(Option::is_some) {
                    classes.push("has-preview");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            {move || match preview.get() {
                Some(src) => view! {
                    <div class="preview">
                        <img src=src alt=messages::PREVIEW_ALT />
                        <span class="badge">"✔ " {messages::LOADED_BADGE}</span>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="upload-icon">"📷"</div>
                    <p>{messages::DROP_PROMPT}</p>
                    <p class="text-muted">{format_hint.get()}</p>
                }.into_any(),
            }}
        </div>
        <input
            node_ref=input_ref
            type="file"
            accept=ACCEPT_ATTRIBUTE
            class="hidden"
            on:change=on_change
        />
    }
}
