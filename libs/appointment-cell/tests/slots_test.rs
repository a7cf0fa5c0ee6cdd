use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use appointment_cell::services::slots::generate_slots;
use doctor_cell::models::DaySchedule;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn schedule(start: NaiveTime, end: NaiveTime, slot_duration_minutes: u32) -> DaySchedule {
    DaySchedule {
        start,
        end,
        slot_duration_minutes,
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[test]
fn test_partial_trailing_slot_is_dropped() {
    // 09:00-10:15 with 30 minute slots: the walk stops before 10:30.
    let sched = schedule(t(9, 0), t(10, 15), 30);
    let slots = generate_slots(Some(&sched), today(), &HashSet::new(), today());

    assert_eq!(slots, vec![t(9, 0), t(9, 30), t(10, 0)]);
}

#[test]
fn test_booked_times_are_excluded() {
    let sched = schedule(t(9, 0), t(10, 15), 30);
    let booked: HashSet<NaiveTime> = [t(9, 30)].into_iter().collect();

    let slots = generate_slots(Some(&sched), today(), &booked, today());

    assert_eq!(slots, vec![t(9, 0), t(10, 0)]);
}

#[test]
fn test_past_dates_yield_no_slots() {
    let sched = schedule(t(9, 0), t(17, 0), 30);
    let yesterday = today() - Duration::days(1);

    let slots = generate_slots(Some(&sched), yesterday, &HashSet::new(), today());

    assert!(slots.is_empty());
}

#[test]
fn test_unscheduled_day_yields_no_slots() {
    let slots = generate_slots(None, today(), &HashSet::new(), today());

    assert!(slots.is_empty());
}

#[test]
fn test_fully_booked_day_yields_no_slots() {
    let sched = schedule(t(9, 0), t(10, 0), 30);
    let booked: HashSet<NaiveTime> = [t(9, 0), t(9, 30)].into_iter().collect();

    let slots = generate_slots(Some(&sched), today(), &booked, today());

    assert!(slots.is_empty());
}

#[test]
fn test_generation_is_deterministic() {
    let sched = schedule(t(8, 0), t(12, 0), 20);
    let booked: HashSet<NaiveTime> = [t(8, 40), t(10, 20)].into_iter().collect();
    let date = today() + Duration::days(3);

    let first = generate_slots(Some(&sched), date, &booked, today());
    let second = generate_slots(Some(&sched), date, &booked, today());

    assert_eq!(first, second);
}

#[test]
fn test_slots_are_ascending() {
    let sched = schedule(t(9, 0), t(17, 0), 45);
    let slots = generate_slots(Some(&sched), today(), &HashSet::new(), today());

    assert!(!slots.is_empty());
    assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_window_near_midnight_terminates() {
    let sched = schedule(t(23, 0), t(23, 45), 30);
    let slots = generate_slots(Some(&sched), today(), &HashSet::new(), today());

    assert_eq!(slots, vec![t(23, 0), t(23, 30)]);
}
