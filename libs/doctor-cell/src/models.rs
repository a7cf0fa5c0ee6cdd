// libs/doctor-cell/src/models.rs
use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;

// ==============================================================================
// REFERENCE DATA MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub department_id: Uuid,
    pub specialization: String,
    pub image_url: Option<String>,
    pub availability: AvailabilityTemplate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A doctor's recurring weekly open hours, keyed by weekday name
/// ("Monday".."Sunday"). Days without an entry are not practiced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityTemplate {
    schedules: HashMap<String, DaySchedule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub slot_duration_minutes: u32,
}

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl AvailabilityTemplate {
    pub fn new(schedules: HashMap<String, DaySchedule>) -> Self {
        Self { schedules }
    }

    /// The schedule for the weekday `date` falls on, if the doctor
    /// practices that day.
    pub fn schedule_for(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.schedules.get(weekday_name(date.weekday()))
    }

    pub fn day(&self, day: &str) -> Option<&DaySchedule> {
        self.schedules.get(day)
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn validate(&self) -> Result<(), DoctorError> {
        for (day, schedule) in &self.schedules {
            if !WEEKDAY_NAMES.contains(&day.as_str()) {
                return Err(DoctorError::InvalidSchedule(format!(
                    "unknown weekday name: {}",
                    day
                )));
            }
            if schedule.start >= schedule.end {
                return Err(DoctorError::InvalidSchedule(format!(
                    "{}: start time must be before end time",
                    day
                )));
            }
            if schedule.slot_duration_minutes == 0 {
                return Err(DoctorError::InvalidSchedule(format!(
                    "{}: slot duration must be positive",
                    day
                )));
            }
        }
        Ok(())
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub department_id: Uuid,
    pub specialization: String,
    pub image_url: Option<String>,
    pub availability: AvailabilityTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub department_id: Option<Uuid>,
    pub specialization: Option<String>,
    pub image_url: Option<String>,
    pub availability: Option<AvailabilityTemplate>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Department not found")]
    DepartmentNotFound,

    #[error("Invalid availability schedule: {0}")]
    InvalidSchedule(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
            DoctorError::DepartmentNotFound => {
                AppError::NotFound("Department not found".to_string())
            }
            DoctorError::InvalidSchedule(msg) => AppError::ValidationError(msg),
        }
    }
}
