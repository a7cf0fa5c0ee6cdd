use std::collections::HashMap;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use doctor_cell::models::{
    AvailabilityTemplate, CreateDepartmentRequest, CreateDoctorRequest, DaySchedule, DoctorError,
    UpdateDoctorRequest,
};
use doctor_cell::services::directory::DoctorDirectory;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn template(day: &str, start: NaiveTime, end: NaiveTime, slot_duration_minutes: u32) -> AvailabilityTemplate {
    let mut schedules = HashMap::new();
    schedules.insert(
        day.to_string(),
        DaySchedule {
            start,
            end,
            slot_duration_minutes,
        },
    );
    AvailabilityTemplate::new(schedules)
}

async fn directory_with_department() -> (DoctorDirectory, Uuid) {
    let directory = DoctorDirectory::new();
    let department = directory
        .create_department(CreateDepartmentRequest {
            name: "Dermatology".to_string(),
            description: "Skin care".to_string(),
            image_url: None,
        })
        .await;
    (directory, department.id)
}

fn doctor_request(department_id: Uuid, availability: AvailabilityTemplate) -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: "Dr. Elena Petrova".to_string(),
        department_id,
        specialization: "Dermatologist".to_string(),
        image_url: None,
        availability,
    }
}

#[tokio::test]
async fn test_create_and_fetch_doctor() {
    let (directory, department_id) = directory_with_department().await;

    let doctor = directory
        .create_doctor(doctor_request(
            department_id,
            template("Wednesday", t(13, 0), t(17, 0), 20),
        ))
        .await
        .unwrap();

    let fetched = directory.get_doctor(doctor.id).await.unwrap();
    assert_eq!(fetched.name, "Dr. Elena Petrova");

    // Wednesday is scheduled, the rest of the week is not.
    let wednesday = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
    let thursday = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
    assert!(fetched.availability.schedule_for(wednesday).is_some());
    assert!(fetched.availability.schedule_for(thursday).is_none());
}

#[tokio::test]
async fn test_schedule_with_inverted_window_is_rejected() {
    let (directory, department_id) = directory_with_department().await;

    let result = directory
        .create_doctor(doctor_request(
            department_id,
            template("Monday", t(17, 0), t(9, 0), 30),
        ))
        .await;

    assert_matches!(result, Err(DoctorError::InvalidSchedule(_)));
}

#[tokio::test]
async fn test_schedule_with_zero_slot_duration_is_rejected() {
    let (directory, department_id) = directory_with_department().await;

    let result = directory
        .create_doctor(doctor_request(
            department_id,
            template("Monday", t(9, 0), t(17, 0), 0),
        ))
        .await;

    assert_matches!(result, Err(DoctorError::InvalidSchedule(_)));
}

#[tokio::test]
async fn test_schedule_with_unknown_weekday_is_rejected() {
    let (directory, department_id) = directory_with_department().await;

    let result = directory
        .create_doctor(doctor_request(
            department_id,
            template("Funday", t(9, 0), t(17, 0), 30),
        ))
        .await;

    assert_matches!(result, Err(DoctorError::InvalidSchedule(_)));
}

#[tokio::test]
async fn test_doctor_requires_existing_department() {
    let directory = DoctorDirectory::new();

    let result = directory
        .create_doctor(doctor_request(
            Uuid::new_v4(),
            template("Monday", t(9, 0), t(17, 0), 30),
        ))
        .await;

    assert_matches!(result, Err(DoctorError::DepartmentNotFound));
}

#[tokio::test]
async fn test_update_validates_replacement_availability() {
    let (directory, department_id) = directory_with_department().await;
    let doctor = directory
        .create_doctor(doctor_request(
            department_id,
            template("Monday", t(9, 0), t(17, 0), 30),
        ))
        .await
        .unwrap();

    let result = directory
        .update_doctor(
            doctor.id,
            UpdateDoctorRequest {
                name: None,
                department_id: None,
                specialization: None,
                image_url: None,
                availability: Some(template("Monday", t(9, 0), t(9, 0), 30)),
            },
        )
        .await;
    assert_matches!(result, Err(DoctorError::InvalidSchedule(_)));

    // The stored template is untouched by the failed update.
    let unchanged = directory.get_doctor(doctor.id).await.unwrap();
    assert_eq!(unchanged.availability.day("Monday").unwrap().end, t(17, 0));
}

#[tokio::test]
async fn test_delete_and_list_by_department() {
    let (directory, department_id) = directory_with_department().await;
    let doctor = directory
        .create_doctor(doctor_request(
            department_id,
            template("Friday", t(9, 0), t(12, 0), 15),
        ))
        .await
        .unwrap();

    assert_eq!(directory.list_by_department(department_id).await.len(), 1);
    assert!(directory.list_by_department(Uuid::new_v4()).await.is_empty());

    directory.delete_doctor(doctor.id).await.unwrap();
    assert_matches!(
        directory.get_doctor(doctor.id).await,
        Err(DoctorError::NotFound)
    );
    assert_matches!(
        directory.delete_doctor(doctor.id).await,
        Err(DoctorError::NotFound)
    );
}
