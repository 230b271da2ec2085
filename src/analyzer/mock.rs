use anpr_common::{AnalysisError, AnalysisPort, AnalysisRecord, SelectedFile};
use std::time::Duration;

/// Analizador simulado: retardo fijo y registro fijo
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    delay: Duration,
}

impl MockAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl AnalysisPort for MockAnalyzer {
    async fn analyze(&self, image: &SelectedFile) -> Result<AnalysisRecord, AnalysisError> {
        tracing::debug!(name = %image.name, delay_ms = self.delay.as_millis() as u64, "análisis simulado");
        tokio::time::sleep(self.delay).await;
        Ok(AnalysisRecord::mock())
    }
}
