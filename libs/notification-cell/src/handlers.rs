use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::router::NotificationCellState;

#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<NotificationCellState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let notifications = state.notifications.list_for_user(user.id).await;
    let unread = state.notifications.unread_count(user.id).await;

    Ok(Json(json!({
        "notifications": notifications,
        "total": notifications.len(),
        "unread": unread
    })))
}

#[axum::debug_handler]
pub async fn mark_notification_read(
    State(state): State<NotificationCellState>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let notification = state.notifications.mark_read(notification_id).await?;

    Ok(Json(json!(notification)))
}
