use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::services::directory::DoctorDirectory;

#[derive(Clone)]
pub struct DoctorCellState {
    pub directory: Arc<DoctorDirectory>,
    pub config: Arc<AppConfig>,
}

pub fn doctor_routes(state: DoctorCellState) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route(
            "/department/{department_id}",
            get(handlers::list_doctors_by_department),
        );

    // Protected routes (administration)
    let protected_routes = Router::new()
        .route("/", post(handlers::create_doctor))
        .route("/{doctor_id}", put(handlers::update_doctor))
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

pub fn department_routes(state: DoctorCellState) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::list_departments))
        .route("/{department_id}", get(handlers::get_department));

    let protected_routes = Router::new()
        .route("/", post(handlers::create_department))
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
