//! Analizadores del navegador: simulado (temporizador) y HTTP (multipart)

use anpr_common::{
    parse_analysis_record, AnalysisError, AnalysisPort, AnalysisRecord, AnalyzerConfig,
    SelectedFile,
};
use gloo::file::Blob;
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// URL del backend fijada al compilar (`ANPR_ENDPOINT=... trunk build`)
const BUILD_ENDPOINT: Option<&str> = option_env!("ANPR_ENDPOINT");

pub fn build_config() -> AnalyzerConfig {
    AnalyzerConfig {
        endpoint: BUILD_ENDPOINT.map(str::to_string),
        ..AnalyzerConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockAnalyzer {
    delay_ms: u32,
}

impl MockAnalyzer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms: u32::try_from(delay_ms).unwrap_or(u32::MAX),
        }
    }
}

impl AnalysisPort for MockAnalyzer {
    async fn analyze(&self, _image: &SelectedFile) -> Result<AnalysisRecord, AnalysisError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(AnalysisRecord::mock())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpAnalyzer {
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn form(image: &SelectedFile) -> Result<FormData, AnalysisError> {
        let blob = Blob::new_with_options(image.bytes.as_slice(), Some(image.mime_type.as_str()));
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("image", &web_sys::Blob::from(blob), &image.name)
            .map_err(js_error)?;
        Ok(form)
    }
}

fn js_error(value: JsValue) -> AnalysisError {
    AnalysisError::Transport(format!("{:?}", value))
}

impl AnalysisPort for HttpAnalyzer {
    async fn analyze(&self, image: &SelectedFile) -> Result<AnalysisRecord, AnalysisError> {
        let response = Request::post(&self.endpoint)
            .body(Self::form(image)?)
            .map_err(|e| AnalysisError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AnalysisError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        parse_analysis_record(&body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Analyzer {
    Mock(MockAnalyzer),
    Http(HttpAnalyzer),
}

impl Analyzer {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        match config.endpoint() {
            Some(endpoint) => Analyzer::Http(HttpAnalyzer::new(endpoint)),
            None => Analyzer::Mock(MockAnalyzer::new(config.mock_delay_ms)),
        }
    }
}

impl AnalysisPort for Analyzer {
    async fn analyze(&self, image: &SelectedFile) -> Result<AnalysisRecord, AnalysisError> {
        match self {
            Analyzer::Mock(mock) => mock.analyze(image).await,
            Analyzer::Http(http) => http.analyze(image).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_mock() {
        let analyzer = Analyzer::from_config(&AnalyzerConfig::default());
        assert_eq!(analyzer, Analyzer::Mock(MockAnalyzer::new(2000)));
    }

    #[test]
    fn test_endpoint_selects_http() {
        let config = AnalyzerConfig {
            endpoint: Some(" http://localhost:8080/api/analyze ".to_string()),
            ..AnalyzerConfig::default()
        };
        assert_eq!(
            Analyzer::from_config(&config),
            Analyzer::Http(HttpAnalyzer::new("http://localhost:8080/api/analyze"))
        );
    }

    #[test]
    fn test_blank_endpoint_stays_mock() {
        let config = AnalyzerConfig {
            endpoint: Some("   ".to_string()),
            mock_delay_ms: 10,
            ..AnalyzerConfig::default()
        };
        assert_eq!(Analyzer::from_config(&config), Analyzer::Mock(MockAnalyzer::new(10)));
    }

    #[test]
    fn test_mock_delay_saturates() {
        assert_eq!(MockAnalyzer::new(u64::MAX).delay_ms, u32::MAX);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn mock_returns_sample_record() {
        let image = SelectedFile::new("car.png", "image/png", vec![0x89, 0x50]);
        let record = MockAnalyzer::new(1).analyze(&image).await.unwrap();
        assert_eq!(record, AnalysisRecord::mock());
    }

    #[wasm_bindgen_test]
    fn form_carries_image_field() {
        let image = SelectedFile::new("car.png", "image/png", vec![1, 2, 3]);
        let form = HttpAnalyzer::form(&image).unwrap();
        assert!(form.has("image"));
    }
}
