use crate::error::{AnprError, Result};
use anpr_common::{parse_analysis_record, AnalysisError, AnalysisPort, AnalysisRecord, SelectedFile};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Backend real: POST multipart con el campo `image`
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| AnprError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form(image: &SelectedFile) -> std::result::Result<Form, AnalysisError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;
        Ok(Form::new().part("image", part))
    }
}

impl AnalysisPort for HttpAnalyzer {
    async fn analyze(&self, image: &SelectedFile) -> std::result::Result<AnalysisRecord, AnalysisError> {
        tracing::debug!(endpoint = %self.endpoint, name = %image.name, "enviando imagen");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(Self::form(image)?)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        parse_analysis_record(&body)
    }
}
