// libs/appointment-cell/src/services/booking.rs
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::services::directory::DoctorDirectory;
use notification_cell::NotificationService;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest, NewAppointment,
    DEFAULT_REASON,
};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::slots;
use crate::store::{AppointmentRepository, InMemoryAppointmentStore};

pub struct AppointmentBookingService {
    store: Arc<dyn AppointmentRepository>,
    directory: Arc<DoctorDirectory>,
    notifications: Arc<NotificationService>,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentBookingService {
    pub fn new(directory: Arc<DoctorDirectory>, notifications: Arc<NotificationService>) -> Self {
        Self::with_store(
            Arc::new(InMemoryAppointmentStore::new()),
            directory,
            notifications,
        )
    }

    pub fn with_store(
        store: Arc<dyn AppointmentRepository>,
        directory: Arc<DoctorDirectory>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            store,
            directory,
            notifications,
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    /// Bookable time points for a doctor on a date: the availability
    /// template walk minus actively booked times.
    pub async fn available_slots(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, AppointmentError> {
        let doctor = self
            .directory
            .get_doctor(doctor_id)
            .await
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        let booked = self.store.booked_times(doctor_id, date).await;
        let today = Utc::now().date_naive();

        let available = slots::generate_slots(
            doctor.availability.schedule_for(date),
            date,
            &booked,
            today,
        );

        debug!(
            "Found {} available slots for doctor {} on {}",
            available.len(),
            doctor_id,
            date
        );
        Ok(available)
    }

    pub async fn book_appointment(
        &self,
        patient_id: Uuid,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!(
            "Booking appointment for patient {} with doctor {}",
            patient_id, request.doctor_id
        );

        let doctor = self
            .directory
            .get_doctor(request.doctor_id)
            .await
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        // The requested time must be a point the template actually offers
        // for that date; occupancy is enforced by the store insert below.
        let today = Utc::now().date_naive();
        let offered = slots::generate_slots(
            doctor.availability.schedule_for(request.date),
            request.date,
            &HashSet::new(),
            today,
        );
        if !offered.contains(&request.time) {
            warn!(
                "Requested time {} on {} is not bookable for doctor {}",
                request.time, request.date, request.doctor_id
            );
            return Err(AppointmentError::InvalidTime(format!(
                "doctor is not bookable at {} on {}",
                request.time, request.date
            )));
        }

        let reason = request
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REASON.to_string());

        let appointment = self
            .store
            .insert(NewAppointment {
                patient_id,
                doctor_id: request.doctor_id,
                department_id: request.department_id,
                date: request.date,
                time: request.time,
                reason,
            })
            .await?;

        self.notifications
            .notify(
                patient_id,
                "Your appointment request has been received and is pending confirmation.",
            )
            .await;

        info!(
            "Appointment {} booked with doctor {}",
            appointment.id, request.doctor_id
        );
        Ok(appointment)
    }

    /// Apply an explicit status transition and notify the patient.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment {} to {}", id, new_status);

        let appointment = self.store.transition(id, new_status).await?;

        let message = match appointment.status {
            AppointmentStatus::Confirmed => "Your appointment has been confirmed.",
            AppointmentStatus::Cancelled => "Your appointment has been cancelled.",
            AppointmentStatus::Completed => "Your appointment has been marked as completed.",
            _ => "Your appointment status has been updated.",
        };
        self.notifications.notify(appointment.patient_id, message).await;

        info!("Appointment {} is now {}", appointment.id, appointment.status);
        Ok(appointment)
    }

    pub async fn get_appointment(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        let appointment = self.store.get(id).await?;
        Ok(self.lifecycle.apply_time_inference(appointment, Utc::now()))
    }

    pub async fn list_all(&self) -> Vec<Appointment> {
        self.materialize(self.store.list_all().await)
    }

    pub async fn list_by_patient(&self, patient_id: Uuid) -> Vec<Appointment> {
        self.materialize(self.store.list_by_patient(patient_id).await)
    }

    pub async fn list_by_doctor(&self, doctor_id: Uuid) -> Vec<Appointment> {
        self.materialize(self.store.list_by_doctor(doctor_id).await)
    }

    // Every read path that hands records to a caller reports the
    // time-inferred status, evaluated against a single "now".
    fn materialize(&self, appointments: Vec<Appointment>) -> Vec<Appointment> {
        let now = Utc::now();
        appointments
            .into_iter()
            .map(|a| self.lifecycle.apply_time_inference(a, now))
            .collect()
    }
}
