//! Puerta de validación
//!
//! Sólo decide si un candidato se acepta. No toca el estado: quien la llama
//! (el controlador) se encarga de mostrar la alerta sin descartar lo anterior.

use crate::error::ValidationError;

/// Tipos MIME aceptados (coincidencia exacta)
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// Valor del atributo `accept` del selector de archivos
pub const ACCEPT_ATTRIBUTE: &str = "image/jpeg, image/png, image/jpg";

/// Tamaño que anuncia la interfaz (10MB)
pub const SIZE_HINT_BYTES: u64 = 10 * 1024 * 1024;

/// Límites de subida. Sin `max_bytes` no se comprueba el tamaño.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_bytes: Option<u64>,
}

impl UploadLimits {
    pub fn unlimited() -> Self {
        Self { max_bytes: None }
    }

    pub fn max_bytes(limit: u64) -> Self {
        Self {
            max_bytes: Some(limit),
        }
    }
}

pub fn is_accepted_mime(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

pub fn validate_mime(mime_type: &str) -> Result<(), ValidationError> {
    if is_accepted_mime(mime_type) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFileType(mime_type.to_string()))
    }
}

/// Tipo primero, luego tamaño
pub fn validate_candidate(
    mime_type: &str,
    size: u64,
    limits: &UploadLimits,
) -> Result<(), ValidationError> {
    validate_mime(mime_type)?;

    match limits.max_bytes {
        Some(limit) if size > limit => Err(ValidationError::FileTooLarge { size, limit }),
        _ => Ok(()),
    }
}
