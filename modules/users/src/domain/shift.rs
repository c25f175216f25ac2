//! Shift policy engine: pure decision logic for starting a shift.
//!
//! Given "now" and the user's currently recorded shift, decides
//! whether a new shift may start and, if so, what boundaries to
//! persist. No I/O and no hidden state; calling [`decide`] twice with
//! the same arguments yields the same result.

use chrono::{DateTime, Datelike, Timelike, Utc};

use super::model::ShiftBand;

/// The shift fields of an existing user record, as read from storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftState {
    pub start_time: Option<i32>,
    pub end_time: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
}

/// Outcome of a shift-start request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// New shift boundaries to persist.
    Accept {
        start_time: i32,
        end_time: i32,
        start_date: DateTime<Utc>,
    },
    /// The transition is disallowed for the current calendar day.
    Reject { reason: String },
    /// The requested shift hours failed band validation.
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Decide whether a new shift may be started.
///
/// The same-day rejection fires *before* the requested band is
/// validated, so an out-of-set request against a blocked day is a
/// `Reject`, not an `Invalid`.
///
/// The day comparison uses day-of-month only (1-31), not the full
/// date: a record from the same day-of-month in another month blocks
/// "today". Kept for wire compatibility; see DESIGN.md.
#[must_use]
pub fn decide(now: DateTime<Utc>, existing: Option<&ShiftState>, requested: &str) -> Decision {
    let state = existing.copied().unwrap_or_default();

    // A record with no recorded start date (or no usable bounds) has
    // nothing to block on.
    let (Some(start_date), Some(end_time)) = (state.start_date, state.end_time) else {
        return validate_and_accept(now, requested);
    };
    let start_time = state.start_time.unwrap_or(0);

    if start_date.day() != now.day() {
        return validate_and_accept(now, requested);
    }

    #[allow(clippy::cast_possible_wrap)] // hour() is 0..=23
    let hour = now.hour() as i32;
    if hour != 0 {
        if end_time < hour {
            // The window already elapsed today, yet the same calendar
            // day still blocks a restart.
            Decision::Reject {
                reason: format!("Shift for today held within {start_time}-{end_time} hours"),
            }
        } else {
            Decision::Reject {
                reason: format!("Shift for today is within {start_time}-{end_time} hours"),
            }
        }
    } else if end_time > 0 {
        Decision::Reject {
            reason: format!("Shift for today is within {start_time}-{end_time} hours"),
        }
    } else {
        validate_and_accept(now, requested)
    }
}

fn validate_and_accept(now: DateTime<Utc>, requested: &str) -> Decision {
    match requested.parse::<ShiftBand>() {
        Ok(band) => {
            let (start_time, end_time) = band.bounds();
            Decision::Accept {
                start_time,
                end_time,
                start_date: now,
            }
        }
        Err(e) => Decision::Invalid {
            field: "shiftHours",
            message: e.to_string(),
        },
    }
}
