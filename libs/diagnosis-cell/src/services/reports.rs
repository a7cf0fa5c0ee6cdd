// libs/diagnosis-cell/src/services/reports.rs
use std::collections::HashMap;

use chrono::Utc;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::AuthUser;

use crate::models::{CreateDiagnosisRequest, DiagnosisError, DiagnosisReport};
use crate::services::engine::DiagnosisEngineClient;

pub struct ReportService {
    engine: DiagnosisEngineClient,
    records: RwLock<HashMap<Uuid, DiagnosisReport>>,
}

impl ReportService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_engine(DiagnosisEngineClient::new(config))
    }

    pub fn with_engine(engine: DiagnosisEngineClient) -> Self {
        Self {
            engine,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Forward symptoms to the engine and return its payload untouched.
    /// Nothing is persisted until the caller saves a report explicitly.
    pub async fn check_symptoms(&self, symptoms: &[String]) -> Result<Value, DiagnosisError> {
        if symptoms.is_empty() {
            return Err(DiagnosisError::ValidationError(
                "Symptoms are required".to_string(),
            ));
        }

        self.engine
            .predict(symptoms)
            .await
            .map_err(|e| DiagnosisError::EngineError(e.to_string()))
    }

    pub async fn save_report(
        &self,
        patient_id: Uuid,
        request: CreateDiagnosisRequest,
    ) -> Result<DiagnosisReport, DiagnosisError> {
        if request.symptoms.is_empty() || request.disease.trim().is_empty() {
            return Err(DiagnosisError::ValidationError(
                "Symptoms and disease are required".to_string(),
            ));
        }

        let report = DiagnosisReport {
            id: Uuid::new_v4(),
            patient_id,
            symptoms: request.symptoms,
            disease: request.disease,
            confidence: request.confidence,
            history: request.history.unwrap_or_else(|| json!({})),
            created_at: Utc::now(),
        };

        info!("Saving diagnosis report {} for patient {}", report.id, patient_id);
        self.records.write().await.insert(report.id, report.clone());

        Ok(report)
    }

    pub async fn list_for_patient(&self, patient_id: Uuid) -> Vec<DiagnosisReport> {
        let mut reports: Vec<DiagnosisReport> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports
    }

    /// A report is visible to its owner and to clinical staff; other
    /// patients are turned away.
    pub async fn get_report(
        &self,
        report_id: Uuid,
        requester: &AuthUser,
    ) -> Result<DiagnosisReport, DiagnosisError> {
        debug!("Fetching diagnosis report {}", report_id);

        let report = self
            .records
            .read()
            .await
            .get(&report_id)
            .cloned()
            .ok_or(DiagnosisError::NotFound)?;

        if report.patient_id != requester.id && requester.is_patient() {
            return Err(DiagnosisError::NotAuthorized);
        }

        Ok(report)
    }
}
