use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, AppointmentBookingService, AppointmentCellState};
use diagnosis_cell::{diagnosis_routes, DiagnosisCellState, ReportService};
use doctor_cell::services::directory::DoctorDirectory;
use doctor_cell::{department_routes, doctor_routes, DoctorCellState};
use notification_cell::{notification_routes, NotificationCellState, NotificationService};
use shared_config::AppConfig;

pub fn create_router(config: AppConfig) -> Router {
    let config = Arc::new(config);

    // Shared in-process services; the cells hand each other Arcs rather
    // than reaching for ambient globals.
    let directory = Arc::new(DoctorDirectory::new());
    let notifications = Arc::new(NotificationService::new());
    let booking = Arc::new(AppointmentBookingService::new(
        directory.clone(),
        notifications.clone(),
    ));
    let reports = Arc::new(ReportService::new(&config));

    let doctor_state = DoctorCellState {
        directory,
        config: config.clone(),
    };

    Router::new()
        .route("/", get(|| async { "CityCare Hospital API is running!" }))
        .nest("/departments", department_routes(doctor_state.clone()))
        .nest("/doctors", doctor_routes(doctor_state))
        .nest(
            "/appointments",
            appointment_routes(AppointmentCellState {
                booking,
                config: config.clone(),
            }),
        )
        .nest(
            "/notifications",
            notification_routes(NotificationCellState {
                notifications,
                config: config.clone(),
            }),
        )
        .nest(
            "/diagnosis",
            diagnosis_routes(DiagnosisCellState {
                reports,
                config,
            }),
        )
}
