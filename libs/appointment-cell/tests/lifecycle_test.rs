use assert_matches::assert_matches;
use chrono::{Duration, NaiveTime, Utc};
use uuid::Uuid;

use appointment_cell::models::{Appointment, AppointmentError, AppointmentStatus};
use appointment_cell::services::lifecycle::AppointmentLifecycleService;

use appointment_cell::models::AppointmentStatus::{Cancelled, Completed, Confirmed, Pending};

fn appointment_with(status: AppointmentStatus, offset: Duration) -> Appointment {
    let scheduled = Utc::now() + offset;
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        doctor_id: Uuid::new_v4(),
        department_id: Uuid::new_v4(),
        date: scheduled.date_naive(),
        time: scheduled.time(),
        reason: "General consultation".to_string(),
        status,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_transition_table_is_exactly_the_allowed_pairs() {
    let lifecycle = AppointmentLifecycleService::new();
    let statuses = [Pending, Confirmed, Cancelled, Completed];
    let allowed = [
        (Pending, Confirmed),
        (Pending, Cancelled),
        (Confirmed, Cancelled),
        (Confirmed, Completed),
    ];

    let mut accepted = 0;
    for from in statuses {
        for to in statuses {
            let result = lifecycle.validate_status_transition(&from, &to);
            if allowed.contains(&(from, to)) {
                assert!(result.is_ok(), "{} -> {} should be allowed", from, to);
                accepted += 1;
            } else {
                assert_matches!(
                    result,
                    Err(AppointmentError::InvalidStatusTransition { .. }),
                    "{} -> {} should be rejected",
                    from,
                    to
                );
            }
        }
    }
    assert_eq!(accepted, 4);
}

#[test]
fn test_terminal_states_have_no_exits() {
    let lifecycle = AppointmentLifecycleService::new();

    assert!(lifecycle.valid_transitions(&Cancelled).is_empty());
    assert!(lifecycle.valid_transitions(&Completed).is_empty());
}

#[test]
fn test_confirmed_past_appointment_reads_as_completed() {
    let lifecycle = AppointmentLifecycleService::new();
    let appointment = appointment_with(Confirmed, Duration::hours(-2));

    assert_eq!(
        lifecycle.status_as_of(&appointment, Utc::now()),
        Completed
    );
    // The record itself is untouched.
    assert_eq!(appointment.status, Confirmed);
}

#[test]
fn test_confirmed_future_appointment_stays_confirmed() {
    let lifecycle = AppointmentLifecycleService::new();
    let appointment = appointment_with(Confirmed, Duration::hours(2));

    assert_eq!(
        lifecycle.status_as_of(&appointment, Utc::now()),
        Confirmed
    );
}

#[test]
fn test_inference_only_applies_to_confirmed() {
    let lifecycle = AppointmentLifecycleService::new();
    let now = Utc::now();

    for status in [Pending, Cancelled, Completed] {
        let appointment = appointment_with(status, Duration::hours(-2));
        assert_eq!(lifecycle.status_as_of(&appointment, now), status);
    }
}

#[test]
fn test_inference_boundary_is_strict() {
    let lifecycle = AppointmentLifecycleService::new();
    let mut appointment = appointment_with(Confirmed, Duration::hours(1));
    appointment.time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    // Exactly at the scheduled instant the appointment is not yet past.
    let at_scheduled = appointment.scheduled_instant();
    assert_eq!(lifecycle.status_as_of(&appointment, at_scheduled), Confirmed);

    let one_second_later = at_scheduled + Duration::seconds(1);
    assert_eq!(
        lifecycle.status_as_of(&appointment, one_second_later),
        Completed
    );
}
