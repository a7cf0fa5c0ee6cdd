use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::services::reports::ReportService;

#[derive(Clone)]
pub struct DiagnosisCellState {
    pub reports: Arc<ReportService>,
    pub config: Arc<AppConfig>,
}

pub fn diagnosis_routes(state: DiagnosisCellState) -> Router {
    // All diagnosis operations require authentication
    let protected_routes = Router::new()
        .route("/check", post(handlers::check_symptoms))
        .route("/", post(handlers::create_diagnosis))
        .route("/my-reports", get(handlers::get_my_reports))
        .route("/{report_id}", get(handlers::get_report))
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    Router::new().merge(protected_routes).with_state(state)
}
