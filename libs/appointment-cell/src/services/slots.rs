// libs/appointment-cell/src/services/slots.rs
use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime};

use doctor_cell::models::DaySchedule;

/// Derive the bookable time points for one doctor-day.
///
/// Walks the day's window from `start` in `slot_duration_minutes` steps and
/// emits every point strictly before `end`; a trailing window shorter than
/// one full slot is dropped. Points already taken by an active booking are
/// suppressed. Dates before `today` and weekdays without a schedule yield
/// nothing. Output is ascending and recomputed fresh on every call.
pub fn generate_slots(
    schedule: Option<&DaySchedule>,
    date: NaiveDate,
    booked: &HashSet<NaiveTime>,
    today: NaiveDate,
) -> Vec<NaiveTime> {
    // Booking into the past is never offered.
    if date < today {
        return Vec::new();
    }

    let Some(schedule) = schedule else {
        return Vec::new();
    };

    let step = Duration::minutes(schedule.slot_duration_minutes as i64);
    let mut slots = Vec::new();
    let mut current = schedule.start;

    while current < schedule.end {
        if !booked.contains(&current) {
            slots.push(current);
        }

        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            // Stepped past midnight; the window is over.
            break;
        }
        current = next;
    }

    slots
}
