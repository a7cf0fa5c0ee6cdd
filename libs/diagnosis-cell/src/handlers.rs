use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::models::{CreateDiagnosisRequest, SymptomCheckRequest};
use crate::router::DiagnosisCellState;

#[axum::debug_handler]
pub async fn check_symptoms(
    State(state): State<DiagnosisCellState>,
    Json(request): Json<SymptomCheckRequest>,
) -> Result<Json<Value>, AppError> {
    let payload = state.reports.check_symptoms(&request.symptoms).await?;

    Ok(Json(payload))
}

#[axum::debug_handler]
pub async fn create_diagnosis(
    State(state): State<DiagnosisCellState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateDiagnosisRequest>,
) -> Result<Json<Value>, AppError> {
    let report = state.reports.save_report(user.id, request).await?;

    Ok(Json(json!(report)))
}

#[axum::debug_handler]
pub async fn get_my_reports(
    State(state): State<DiagnosisCellState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let reports = state.reports.list_for_patient(user.id).await;

    Ok(Json(json!({
        "reports": reports,
        "total": reports.len()
    })))
}

#[axum::debug_handler]
pub async fn get_report(
    State(state): State<DiagnosisCellState>,
    Extension(user): Extension<AuthUser>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let report = state.reports.get_report(report_id, &user).await?;

    Ok(Json(json!(report)))
}
