use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::services::notify::NotificationService;

#[derive(Clone)]
pub struct NotificationCellState {
    pub notifications: Arc<NotificationService>,
    pub config: Arc<AppConfig>,
}

pub fn notification_routes(state: NotificationCellState) -> Router {
    // All notification operations require authentication
    let protected_routes = Router::new()
        .route("/", get(handlers::list_notifications))
        .route(
            "/{notification_id}/read",
            patch(handlers::mark_notification_read),
        )
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    Router::new().merge(protected_routes).with_state(state)
}
