pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use router::{diagnosis_routes, DiagnosisCellState};
pub use services::reports::ReportService;
