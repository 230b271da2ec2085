//! Controlador subir-analizar-mostrar
//!
//! Todo el estado de la interfaz vive aquí y sólo cambia a través de las
//! transiciones (`select_file`, `begin_analysis`, `finish_analysis`, `reset`).
//! El estado visible (`InteractionState`) se deriva, no se guarda.
//!
//! Cada análisis lleva un número de generación. `reset` y cada nuevo envío
//! avanzan la generación, de modo que una respuesta que llega tarde se
//! descarta en vez de pisar el estado actual. Las lecturas de imagen
//! asíncronas usan un contador de selección con la misma regla.

use crate::analyzer::AnalysisPort;
use crate::error::{AnalysisError, SubmitError, ValidationError};
use crate::messages;
use crate::preview::to_data_url;
use crate::types::{AnalysisRecord, SelectedFile};
use crate::validation::{validate_candidate, UploadLimits};
use tracing::{debug, info, warn};

/// Alerta visible para el usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    InvalidFileType,
    FileTooLarge { limit: u64 },
    NoFileSelected,
    AnalysisFailed,
}

impl Alert {
    pub fn message(&self) -> String {
        match self {
            Alert::InvalidFileType => messages::INVALID_FILE_TYPE.to_string(),
            Alert::FileTooLarge { limit } => messages::file_too_large(*limit),
            Alert::NoFileSelected => messages::NO_FILE_SELECTED.to_string(),
            Alert::AnalysisFailed => messages::ANALYSIS_FAILED.to_string(),
        }
    }
}

impl From<&ValidationError> for Alert {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::InvalidFileType(_) => Alert::InvalidFileType,
            ValidationError::FileTooLarge { limit, .. } => Alert::FileTooLarge { limit: *limit },
        }
    }
}

/// Estado de la interacción (derivado)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    FileSelected,
    Analyzing,
    Success,
    Failed,
}

impl InteractionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::FileSelected => "file-selected",
            InteractionState::Analyzing => "analyzing",
            InteractionState::Success => "success",
            InteractionState::Failed => "failed",
        }
    }
}

/// Análisis en curso: generación + copia de la imagen enviada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
    file: SelectedFile,
}

impl AnalysisTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    file: Option<SelectedFile>,
    preview: Option<String>,
    record: Option<AnalysisRecord>,
    in_flight: bool,
    alert: Option<Alert>,
    generation: u64,
    selection: u64,
    limits: UploadLimits,
}

impl Controller {
    pub fn new(limits: UploadLimits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    // =============================================
    // Lectura
    // =============================================

    pub fn state(&self) -> InteractionState {
        if self.in_flight {
            InteractionState::Analyzing
        } else if self.record.is_some() {
            InteractionState::Success
        } else if self.alert == Some(Alert::AnalysisFailed) {
            InteractionState::Failed
        } else if self.file.is_some() {
            InteractionState::FileSelected
        } else {
            InteractionState::Idle
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn record(&self) -> Option<&AnalysisRecord> {
        self.record.as_ref()
    }

    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    pub fn error_message(&self) -> Option<String> {
        self.alert.map(|a| a.message())
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight
    }

    /// El botón de envío sólo se habilita con imagen y sin análisis en curso
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.in_flight
    }

    pub fn limits(&self) -> UploadLimits {
        self.limits
    }

    // =============================================
    // Transiciones
    // =============================================

    /// Pasa el candidato por la puerta de validación antes de leerlo.
    ///
    /// Si se acepta, devuelve el número de selección que debe acompañar a
    /// `select_file_if_current` cuando terminen de leerse los bytes. Si se
    /// rechaza, sólo cambia la alerta: la imagen, la vista previa y los
    /// resultados anteriores se conservan.
    pub fn screen_candidate(&mut self, mime_type: &str, size: u64) -> Result<u64, ValidationError> {
        self.check(mime_type, size)?;
        self.selection += 1;
        Ok(self.selection)
    }

    /// Guarda la imagen aceptada y genera su vista previa.
    /// Los resultados anteriores siguen visibles hasta `reset`.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), ValidationError> {
        self.check(&file.mime_type, file.size())?;
        self.selection += 1;
        self.store(file);
        Ok(())
    }

    /// Igual que `select_file`, pero descarta la imagen si desde
    /// `screen_candidate` hubo otra selección o un `reset`.
    ///
    /// Devuelve `Ok(false)` cuando la lectura quedó obsoleta.
    pub fn select_file_if_current(
        &mut self,
        selection: u64,
        file: SelectedFile,
    ) -> Result<bool, ValidationError> {
        if selection != self.selection {
            debug!(selection, current = self.selection, name = %file.name, "lectura obsoleta descartada");
            return Ok(false);
        }

        self.check(&file.mime_type, file.size())?;
        self.store(file);
        Ok(true)
    }

    fn check(&mut self, mime_type: &str, size: u64) -> Result<(), ValidationError> {
        if let Err(error) = validate_candidate(mime_type, size, &self.limits) {
            warn!(mime_type, size, %error, "imagen rechazada");
            self.alert = Some(Alert::from(&error));
            return Err(error);
        }
        Ok(())
    }

    fn store(&mut self, file: SelectedFile) {
        debug!(name = %file.name, mime_type = %file.mime_type, size = file.size(), "imagen seleccionada");
        self.preview = Some(to_data_url(&file.mime_type, &file.bytes));
        self.file = Some(file);
        self.alert = None;
    }

    /// Inicia un análisis. Sin imagen se muestra la alerta y no hay transición.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::AlreadyAnalyzing);
        }

        let Some(file) = self.file.clone() else {
            warn!("envío sin imagen seleccionada");
            self.alert = Some(Alert::NoFileSelected);
            return Err(SubmitError::NoFileSelected);
        };

        self.generation += 1;
        self.in_flight = true;
        self.alert = None;
        debug!(generation = self.generation, name = %file.name, "análisis iniciado");

        Ok(AnalysisTicket {
            generation: self.generation,
            file,
        })
    }

    /// Aplica el resultado de un análisis.
    ///
    /// Devuelve `false` si la generación ya no es la actual (hubo `reset`);
    /// en ese caso el estado no cambia.
    pub fn finish_analysis(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisRecord, AnalysisError>,
    ) -> bool {
        if !self.in_flight || generation != self.generation {
            debug!(generation, current = self.generation, "resultado obsoleto descartado");
            return false;
        }

        self.in_flight = false;
        match outcome {
            Ok(record) => {
                info!(generation, plate = %record.license_plate.number, "análisis completado");
                self.record = Some(record);
                self.alert = None;
            }
            Err(error) => {
                warn!(generation, %error, "análisis fallido");
                self.record = None;
                self.alert = Some(Alert::AnalysisFailed);
            }
        }
        true
    }

    /// begin + analyze + finish en una sola llamada
    pub async fn submit<P: AnalysisPort>(&mut self, port: &P) -> Result<InteractionState, SubmitError> {
        let ticket = self.begin_analysis()?;
        let outcome = port.analyze(ticket.file()).await;
        self.finish_analysis(ticket.generation(), outcome);
        Ok(self.state())
    }

    /// Vuelve a Idle desde cualquier estado
    pub fn reset(&mut self) {
        self.file = None;
        self.preview = None;
        self.record = None;
        self.alert = None;
        self.in_flight = false;
        self.generation += 1;
        self.selection += 1;
        debug!(generation = self.generation, "estado reiniciado");
    }
}
