// libs/diagnosis-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use shared_models::error::AppError;

/// A persisted symptom-checker report. The engine that produced the payload
/// is an external service; this cell only stores and serves the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub symptoms: Vec<String>,
    pub disease: String,
    pub confidence: Option<f64>,
    pub history: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDiagnosisRequest {
    pub symptoms: Vec<String>,
    pub disease: String,
    pub confidence: Option<f64>,
    pub history: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCheckRequest {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DiagnosisError {
    #[error("Report not found")]
    NotFound,

    #[error("Not authorized to view this report")]
    NotAuthorized,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Diagnosis engine error: {0}")]
    EngineError(String),
}

impl From<DiagnosisError> for AppError {
    fn from(err: DiagnosisError) -> Self {
        match err {
            DiagnosisError::NotFound => AppError::NotFound("Report not found".to_string()),
            DiagnosisError::NotAuthorized => {
                AppError::Forbidden("Not authorized to view this report".to_string())
            }
            DiagnosisError::ValidationError(msg) => AppError::ValidationError(msg),
            DiagnosisError::EngineError(msg) => AppError::ExternalService(msg),
        }
    }
}
