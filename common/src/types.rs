//! Tipos compartidos entre la CLI y la Web (WASM)
//!
//! - SelectedFile: imagen elegida por el usuario
//! - AnalysisRecord: resultado estructurado del análisis (esquema estricto)

use serde::{Deserialize, Serialize};

/// Imagen elegida por el usuario (selector o arrastrar y soltar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Tipo MIME declarado (no se inspecciona el contenido)
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Datos del vehículo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub color: String,
}

/// Datos de la placa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateInfo {
    pub number: String,
    pub country: String,
    pub region: String,
}

/// Contexto de la escena
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub location_type: String,
    pub weather: String,
    pub time_of_day: String,
}

/// Observaciones auxiliares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub occupants_visible: String,
    pub damage: String,
}

/// Resultado del análisis.
///
/// Todos los campos son obligatorios: un JSON al que le falte cualquiera de
/// ellos no se deserializa, así nunca se pinta un registro parcial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub car: VehicleInfo,
    pub license_plate: PlateInfo,
    pub environment: EnvironmentInfo,
    pub additional_info: AdditionalInfo,
}

impl AnalysisRecord {
    /// Registro fijo que devuelve el analizador simulado
    pub fn mock() -> Self {
        Self {
            car: VehicleInfo {
                make: "Toyota".into(),
                model: "Corolla".into(),
                color: "Plateado".into(),
            },
            license_plate: PlateInfo {
                number: "ABC123".into(),
                country: "México".into(),
                region: "Ciudad de México".into(),
            },
            environment: EnvironmentInfo {
                location_type: "Calle".into(),
                weather: "Soleado".into(),
                time_of_day: "Día".into(),
            },
            additional_info: AdditionalInfo {
                occupants_visible: "Sí".into(),
                damage: "No visible".into(),
            },
        }
    }
}
