//! Componente principal

use crate::api::analyze::{build_config, Analyzer};
use crate::components::{
    action_buttons::ActionButtons,
    alert_box::AlertBox,
    header::Header,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use anpr_common::{messages, AnalysisPort, Controller, ResultView, SelectedFile};
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[component]
pub fn App() -> impl IntoView {
    let config = build_config();
    let analyzer = Analyzer::from_config(&config);
    let controller = RwSignal::new(Controller::new(config.upload_limits()));

    // vistas derivadas del controlador
    let preview = Signal::derive(move || controller.with(|c| c.preview().map(str::to_string)));
    let error_message = Signal::derive(move || controller.with(Controller::error_message));
    let can_submit = Signal::derive(move || controller.with(Controller::can_submit));
    let is_analyzing = Signal::derive(move || controller.with(Controller::is_analyzing));
    let has_record = Signal::derive(move || controller.with(|c| c.record().is_some()));
    let format_hint =
        Signal::derive(move || controller.with(|c| messages::format_hint(c.limits().max_bytes)));
    let state = Signal::derive(move || controller.with(|c| c.state().as_str()));
    let result = Memo::new(move |_| controller.with(ResultView::of));

    // Selección de imagen: validar antes de leer los bytes.
    // Una lectura que termina después de otra selección o de un reset se descarta.
    let on_file = move |file: File| {
        let mime_type = file.type_();
        let mut screened = None;
        controller.update(|c| screened = c.screen_candidate(&mime_type, file.size() as u64).ok());
        let Some(selection) = screened else {
            return;
        };

        spawn_local(async move {
            let name = file.name();
            let blob = gloo::file::File::from(file);
            match gloo::file::futures::read_as_bytes(&blob).await {
                Ok(bytes) => {
                    let mut applied = Ok(false);
                    controller.update(|c| {
                        let file = SelectedFile::new(name, mime_type, bytes);
                        applied = c.select_file_if_current(selection, file);
                    });
                    match applied {
                        Ok(true) => {}
                        Ok(false) => {
                            console::debug!("Lectura obsoleta descartada");
                        }
                        Err(e) => {
                            console::warn!("Imagen rechazada:", e.to_string());
                        }
                    }
                }
                Err(e) => {
                    console::error!("No se pudo leer la imagen:", e.to_string());
                }
            }
        });
    };

    // Análisis
    let on_submit = move |_: ()| {
        let mut ticket = None;
        controller.update(|c| ticket = c.begin_analysis().ok());
        let Some(ticket) = ticket else {
            return;
        };

        let analyzer = analyzer.clone();
        spawn_local(async move {
            let outcome = analyzer.analyze(ticket.file()).await;
            if let Err(e) = &outcome {
                console::warn!("Análisis fallido:", e.to_string());
            }
            controller.update(|c| {
                c.finish_analysis(ticket.generation(), outcome);
            });
        });
    };

    let on_reset = move |_: ()| controller.update(Controller::reset);

    view! {
        <div class="container" data-state=move || state.get()>
            <Header />

            <main class="grid">
                <section class="card upload-card">
                    <div class="card-accent" />
                    <div class="card-header">
                        <h2>{messages::UPLOAD_TITLE}</h2>
                        <p class="text-muted">{messages::UPLOAD_DESCRIPTION}</p>
                    </div>

                    <UploadArea preview=preview format_hint=format_hint on_file=on_file />
                    <AlertBox message=error_message />
                    <ActionButtons
                        can_submit=can_submit
                        is_analyzing=is_analyzing
                        on_submit=on_submit
                        on_reset=on_reset
                    />
                </section>

                <ResultsPanel result=result has_record=has_record />
            </main>
        </div>
    }
}
