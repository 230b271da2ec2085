use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnprError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("Error de validación: {0}")]
    Validation(#[from] anpr_common::ValidationError),

    #[error("No se pudo enviar: {0}")]
    Submit(#[from] anpr_common::SubmitError),

    #[error("Error del análisis: {0}")]
    Analysis(#[from] anpr_common::AnalysisError),

    #[error("Error de cliente HTTP: {0}")]
    HttpClient(String),

    #[error("Error de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnprError>;
