// libs/appointment-cell/src/services/lifecycle.rs
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{Appointment, AppointmentError, AppointmentStatus};

pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that an explicit status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: &AppointmentStatus,
        new_status: &AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!(
            "Validating status transition from {} to {}",
            current_status, new_status
        );

        if !self.valid_transitions(current_status).contains(new_status) {
            warn!(
                "Invalid status transition attempted: {} -> {}",
                current_status, new_status
            );
            return Err(AppointmentError::InvalidStatusTransition {
                from: *current_status,
                to: *new_status,
            });
        }

        Ok(())
    }

    /// All valid next statuses for a given current status
    pub fn valid_transitions(&self, current_status: &AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::Cancelled,
                AppointmentStatus::Completed,
            ],
            // Terminal states - no transitions allowed
            AppointmentStatus::Cancelled => vec![],
            AppointmentStatus::Completed => vec![],
        }
    }

    /// Status a record reports at read time: a confirmed appointment whose
    /// scheduled instant has passed reads as completed. The stored value is
    /// left untouched and no notification is emitted for the inference.
    pub fn status_as_of(
        &self,
        appointment: &Appointment,
        now: DateTime<Utc>,
    ) -> AppointmentStatus {
        if appointment.status == AppointmentStatus::Confirmed
            && appointment.scheduled_instant() < now
        {
            return AppointmentStatus::Completed;
        }
        appointment.status
    }

    /// Clone-with-inference applied by every read path that materializes
    /// appointments for a caller.
    pub fn apply_time_inference(
        &self,
        mut appointment: Appointment,
        now: DateTime<Utc>,
    ) -> Appointment {
        appointment.status = self.status_as_of(&appointment, now);
        appointment
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}
