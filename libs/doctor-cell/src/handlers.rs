use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{CreateDepartmentRequest, CreateDoctorRequest, UpdateDoctorRequest};
use crate::router::DoctorCellState;

// ==============================================================================
// PUBLIC HANDLERS (NO AUTHENTICATION REQUIRED)
// ==============================================================================

#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<DoctorCellState>,
) -> Result<Json<Value>, AppError> {
    let departments = state.directory.list_departments().await;

    Ok(Json(json!({
        "departments": departments,
        "total": departments.len()
    })))
}

#[axum::debug_handler]
pub async fn get_department(
    State(state): State<DoctorCellState>,
    Path(department_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let department = state.directory.get_department(department_id).await?;

    Ok(Json(json!(department)))
}

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<DoctorCellState>) -> Result<Json<Value>, AppError> {
    let doctors = state.directory.list_doctors().await;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<DoctorCellState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.directory.get_doctor(doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors_by_department(
    State(state): State<DoctorCellState>,
    Path(department_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.directory.list_by_department(department_id).await;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

// ==============================================================================
// PROTECTED HANDLERS (ADMINISTRATION)
// ==============================================================================

#[axum::debug_handler]
pub async fn create_department(
    State(state): State<DoctorCellState>,
    Json(request): Json<CreateDepartmentRequest>,
) -> Result<Json<Value>, AppError> {
    let department = state.directory.create_department(request).await;

    Ok(Json(json!(department)))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<DoctorCellState>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.directory.create_doctor(request).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<DoctorCellState>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.directory.update_doctor(doctor_id, request).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<DoctorCellState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state.directory.delete_doctor(doctor_id).await?;

    Ok(Json(json!({ "deleted": doctor_id })))
}
