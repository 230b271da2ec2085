use crate::error::{AnprError, Result};
use anpr_common::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Variable de entorno que tiene prioridad sobre el endpoint del archivo
pub const ENDPOINT_ENV: &str = "ANPR_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub analyzer: AnalyzerConfig,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AnprError::Config("No se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("anpr-demo").join("config.json"))
    }

    /// Endpoint efectivo: variable de entorno primero, luego el archivo
    pub fn endpoint(&self) -> Option<String> {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                return Some(endpoint.to_string());
            }
        }

        self.analyzer.endpoint().map(str::to_string)
    }

    pub fn set_endpoint(&mut self, endpoint: Option<String>) -> Result<()> {
        self.analyzer.endpoint = endpoint.as_deref().map(validate_endpoint).transpose()?;
        Ok(())
    }
}

/// URL http(s) con host, sin espacios alrededor
pub fn validate_endpoint(url: &str) -> Result<String> {
    let url = url.trim();
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));

    match rest {
        Some(rest) if !rest.is_empty() && !rest.contains(char::is_whitespace) => Ok(url.to_string()),
        _ => Err(AnprError::Config(format!("URL no válida: {:?}", url))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.analyzer.mock_delay_ms, 2000);
        assert!(config.analyzer.max_upload_bytes.is_none());
    }

    #[test]
    fn test_flattened_json_shape() {
        let json = serde_json::to_string(&Config::default()).expect("serialización falló");
        assert!(json.contains("\"mock_delay_ms\":2000"));
        assert!(json.contains("\"timeout_seconds\":30"));
        assert!(!json.contains("\"analyzer\""));
    }

    #[test]
    fn test_set_endpoint_rejects_non_http() {
        let mut config = Config::default();
        assert!(config.set_endpoint(Some("ftp://example.com".into())).is_err());
        assert!(config.analyzer.endpoint.is_none());

        config
            .set_endpoint(Some("http://localhost:8000/api/analyze".into()))
            .unwrap();
        assert_eq!(
            config.analyzer.endpoint.as_deref(),
            Some("http://localhost:8000/api/analyze")
        );

        config.set_endpoint(None).unwrap();
        assert!(config.analyzer.endpoint.is_none());
    }

    #[test]
    fn test_validate_endpoint() {
        assert_eq!(
            validate_endpoint("  https://anpr.local/api/analyze \n").unwrap(),
            "https://anpr.local/api/analyze"
        );

        for bad in ["", "   ", "http://", "localhost:8000", "htp://typo", "http://a b"] {
            assert!(
                matches!(validate_endpoint(bad), Err(AnprError::Config(_))),
                "aceptó {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_set_endpoint_stores_trimmed_url() {
        let mut config = Config::default();
        config.set_endpoint(Some(" http://localhost:8000/api/analyze ".into())).unwrap();
        assert_eq!(
            config.analyzer.endpoint.as_deref(),
            Some("http://localhost:8000/api/analyze")
        );
    }
}
