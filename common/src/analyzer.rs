//! Puerto de análisis
//!
//! El controlador no sabe si el resultado viene de un temporizador simulado
//! o de un backend HTTP: sólo ve este trait. Cada front-end aporta sus
//! adaptadores (la Web con `fetch`, la CLI con `reqwest`).

use crate::error::AnalysisError;
use crate::types::{AnalysisRecord, SelectedFile};
use std::cell::Cell;

/// Capacidad de analizar una imagen
///
/// Los futures no son `Send`: en el navegador todo corre en el hilo de la UI.
#[allow(async_fn_in_trait)]
pub trait AnalysisPort {
    async fn analyze(&self, image: &SelectedFile) -> Result<AnalysisRecord, AnalysisError>;
}

/// Doble de pruebas: devuelve siempre el mismo resultado sin esperar
#[derive(Debug, Clone)]
pub struct StaticAnalyzer {
    outcome: Result<AnalysisRecord, AnalysisError>,
    calls: Cell<usize>,
}

impl StaticAnalyzer {
    pub fn returning(record: AnalysisRecord) -> Self {
        Self {
            outcome: Ok(record),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: AnalysisError) -> Self {
        Self {
            outcome: Err(error),
            calls: Cell::new(0),
        }
    }

    /// Número de llamadas a `analyze`
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Default for StaticAnalyzer {
    fn default() -> Self {
        Self::returning(AnalysisRecord::mock())
    }
}

impl AnalysisPort for StaticAnalyzer {
    async fn analyze(&self, _image: &SelectedFile) -> Result<AnalysisRecord, AnalysisError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}
