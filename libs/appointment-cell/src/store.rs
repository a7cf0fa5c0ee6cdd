// libs/appointment-cell/src/store.rs
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentError, AppointmentStatus, NewAppointment};
use crate::services::lifecycle::AppointmentLifecycleService;

/// Persistence boundary for appointment records. Any durable store that
/// honors the active-booking uniqueness and single-record atomicity
/// guarantees can stand in for the in-memory implementation.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Insert a pending appointment. Fails with `SlotNotAvailable` when an
    /// active booking already holds the same (doctor, date, time) key; the
    /// check and the insert are indivisible.
    async fn insert(&self, draft: NewAppointment) -> Result<Appointment, AppointmentError>;

    async fn get(&self, id: Uuid) -> Result<Appointment, AppointmentError>;

    /// Apply an explicit status transition, validating it against the
    /// lifecycle table. Validation and mutation are atomic per record.
    async fn transition(
        &self,
        id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError>;

    async fn list_all(&self) -> Vec<Appointment>;

    async fn list_by_patient(&self, patient_id: Uuid) -> Vec<Appointment>;

    async fn list_by_doctor(&self, doctor_id: Uuid) -> Vec<Appointment>;

    /// Times held by an active booking for one doctor-day.
    async fn booked_times(&self, doctor_id: Uuid, date: NaiveDate) -> HashSet<NaiveTime>;
}

pub struct InMemoryAppointmentStore {
    records: RwLock<HashMap<Uuid, Appointment>>,
    lifecycle: AppointmentLifecycleService,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            lifecycle: AppointmentLifecycleService::new(),
        }
    }
}

impl Default for InMemoryAppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

// Listings come back newest first: date descending, then time descending.
fn sort_newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.date.cmp(&a.date).then(b.time.cmp(&a.time)));
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentStore {
    async fn insert(&self, draft: NewAppointment) -> Result<Appointment, AppointmentError> {
        // The occupancy check and the insert share one write guard: two
        // concurrent bookings for the same doctor-slot serialize here.
        let mut records = self.records.write().await;

        let taken = records.values().any(|existing| {
            existing.doctor_id == draft.doctor_id
                && existing.date == draft.date
                && existing.time == draft.time
                && existing.status.is_active()
        });
        if taken {
            debug!(
                "Slot {} {} already held for doctor {}",
                draft.date, draft.time, draft.doctor_id
            );
            return Err(AppointmentError::SlotNotAvailable);
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: draft.patient_id,
            doctor_id: draft.doctor_id,
            department_id: draft.department_id,
            date: draft.date,
            time: draft.time,
            reason: draft.reason,
            status: AppointmentStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        records.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn get(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppointmentError::NotFound)
    }

    async fn transition(
        &self,
        id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let mut records = self.records.write().await;
        let appointment = records.get_mut(&id).ok_or(AppointmentError::NotFound)?;

        self.lifecycle
            .validate_status_transition(&appointment.status, &new_status)?;

        appointment.status = new_status;
        appointment.updated_at = Utc::now();

        Ok(appointment.clone())
    }

    async fn list_all(&self) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> =
            self.records.read().await.values().cloned().collect();
        sort_newest_first(&mut appointments);
        appointments
    }

    async fn list_by_patient(&self, patient_id: Uuid) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self
            .records
            .read()
            .await
            .values()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        sort_newest_first(&mut appointments);
        appointments
    }

    async fn list_by_doctor(&self, doctor_id: Uuid) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self
            .records
            .read()
            .await
            .values()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect();
        sort_newest_first(&mut appointments);
        appointments
    }

    async fn booked_times(&self, doctor_id: Uuid, date: NaiveDate) -> HashSet<NaiveTime> {
        self.records
            .read()
            .await
            .values()
            .filter(|a| a.doctor_id == doctor_id && a.date == date && a.status.is_active())
            .map(|a| a.time)
            .collect()
    }
}
