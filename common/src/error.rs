//! Definición de errores

use thiserror::Error;

/// Rechazo de la puerta de validación
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("tipo de archivo no permitido: {0}")]
    InvalidFileType(String),

    #[error("archivo demasiado grande: {size} bytes (máximo {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },
}

/// Envío rechazado antes de llamar al analizador
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no hay ninguna imagen seleccionada")]
    NoFileSelected,

    #[error("ya hay un análisis en curso")]
    AlreadyAnalyzing,
}

/// Fallo del puerto de análisis.
///
/// El detalle sólo se registra; al usuario se le muestra el mensaje genérico.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("error de transporte: {0}")]
    Transport(String),

    #[error("el servicio respondió con estado {0}")]
    Status(u16),

    #[error("respuesta mal formada: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::InvalidFileType("application/pdf".to_string());
        assert_eq!(error.to_string(), "tipo de archivo no permitido: application/pdf");

        let error = ValidationError::FileTooLarge { size: 20, limit: 10 };
        let display = error.to_string();
        assert!(display.contains("20 bytes"));
        assert!(display.contains("10 bytes"));
    }

    #[test]
    fn test_analysis_error_display() {
        assert_eq!(
            AnalysisError::Status(502).to_string(),
            "el servicio respondió con estado 502"
        );
        assert!(AnalysisError::Transport("connection refused".into())
            .to_string()
            .contains("connection refused"));
    }
}
