// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::services::booking::AppointmentBookingService;

#[derive(Clone)]
pub struct AppointmentCellState {
    pub booking: Arc<AppointmentBookingService>,
    pub config: Arc<AppConfig>,
}

pub fn appointment_routes(state: AppointmentCellState) -> Router {
    // Slot computation is public so patients can browse before logging in
    let public_routes = Router::new().route(
        "/slots/{doctor_id}",
        get(handlers::get_available_slots),
    );

    // Booking and lifecycle operations require authentication
    let protected_routes = Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/my-appointments", get(handlers::get_my_appointments))
        .route("/doctor/{doctor_id}", get(handlers::get_doctor_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route(
            "/{appointment_id}/status",
            patch(handlers::update_appointment_status),
        )
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
