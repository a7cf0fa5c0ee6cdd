pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use router::{department_routes, doctor_routes, DoctorCellState};
