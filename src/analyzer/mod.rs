//! Adaptadores del puerto de análisis para la CLI
//!
//! - MockAnalyzer: espera el retardo configurado y devuelve el registro fijo
//! - HttpAnalyzer: envía la imagen al backend como multipart (campo `image`)

mod http;
mod mock;

pub use http::HttpAnalyzer;
pub use mock::MockAnalyzer;

use crate::config::{validate_endpoint, Config};
use crate::error::Result;
use anpr_common::{AnalysisError, AnalysisPort, AnalysisRecord, Controller, SelectedFile};

/// Adaptador elegido en tiempo de ejecución
pub enum Backend {
    Mock(MockAnalyzer),
    Http(HttpAnalyzer),
}

impl Backend {
    /// `--mock` gana; si no, el endpoint explícito, luego el de la configuración
    pub fn select(config: &Config, endpoint: Option<String>, force_mock: bool) -> Result<Self> {
        if force_mock {
            return Ok(Backend::Mock(MockAnalyzer::new(config.analyzer.mock_delay())));
        }

        match endpoint.or_else(|| config.endpoint()) {
            Some(url) => Ok(Backend::Http(HttpAnalyzer::new(
                validate_endpoint(&url)?,
                config.timeout_seconds,
            )?)),
            None => Ok(Backend::Mock(MockAnalyzer::new(config.analyzer.mock_delay()))),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Backend::Mock(_) => "simulado".to_string(),
            Backend::Http(http) => http.endpoint().to_string(),
        }
    }
}

impl AnalysisPort for Backend {
    async fn analyze(&self, image: &SelectedFile) -> std::result::Result<AnalysisRecord, AnalysisError> {
        match self {
            Backend::Mock(mock) => mock.analyze(image).await,
            Backend::Http(http) => http.analyze(image).await,
        }
    }
}

/// Envía la imagen seleccionada y devuelve el registro.
///
/// El controlador termina en Success o Failed; sin imagen o con un análisis
/// en curso no se llama al puerto.
pub async fn analyze_selected<P: AnalysisPort>(
    controller: &mut Controller,
    port: &P,
) -> Result<AnalysisRecord> {
    let ticket = controller.begin_analysis()?;
    let outcome = port.analyze(ticket.file()).await;
    controller.finish_analysis(ticket.generation(), outcome.clone());
    Ok(outcome?)
}
