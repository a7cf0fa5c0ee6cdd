// libs/diagnosis-cell/src/services/engine.rs
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

/// Thin client for the external symptom-checker engine. The engine is
/// opaque to this service: symptoms go in, a diagnosis payload comes back.
pub struct DiagnosisEngineClient {
    client: Client,
    base_url: String,
}

impl DiagnosisEngineClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.diagnosis_engine_url.clone(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn predict(&self, symptoms: &[String]) -> Result<Value> {
        let url = format!("{}/predict", self.base_url);
        debug!("Requesting prediction from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "symptoms": symptoms }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Diagnosis engine error ({}): {}", status, error_text);
            return Err(anyhow!("Engine error ({}): {}", status, error_text));
        }

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
