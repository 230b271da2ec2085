//! Configuración del analizador (compartida por la CLI y la Web)

use crate::validation::UploadLimits;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retardo del analizador simulado
pub const DEFAULT_MOCK_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// URL del backend (multipart, campo `image`). Sin URL se usa el simulado.
    pub endpoint: Option<String>,
    pub mock_delay_ms: u64,
    pub max_upload_bytes: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            mock_delay_ms: DEFAULT_MOCK_DELAY_MS,
            max_upload_bytes: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    pub fn upload_limits(&self) -> UploadLimits {
        UploadLimits {
            max_bytes: self.max_upload_bytes,
        }
    }

    /// Endpoint no vacío
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.endpoint(), None);
        assert_eq!(config.mock_delay(), Duration::from_secs(2));
        assert_eq!(config.upload_limits(), UploadLimits::unlimited());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"max_upload_bytes": 1024}"#).expect("deserialización falló");
        assert_eq!(config.mock_delay_ms, DEFAULT_MOCK_DELAY_MS);
        assert_eq!(config.upload_limits(), UploadLimits::max_bytes(1024));
    }

    #[test]
    fn test_blank_endpoint_ignored() {
        let config = AnalyzerConfig {
            endpoint: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), None);

        let config = AnalyzerConfig {
            endpoint: Some(" http://localhost:8000/api/analyze ".into()),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), Some("http://localhost:8000/api/analyze"));
    }
}
