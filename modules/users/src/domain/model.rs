use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// One of the three fixed 8-hour clock intervals a user can be
/// scheduled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftBand {
    /// `0-8`
    Early,
    /// `8-16`
    Middle,
    /// `16-24`
    Late,
}

impl ShiftBand {
    /// Hour-of-day bounds as a half-open interval `[start, end)`.
    /// `end > start` for every band; overnight-wrapping bands are not
    /// representable.
    #[must_use]
    pub fn bounds(self) -> (i32, i32) {
        match self {
            Self::Early => (0, 8),
            Self::Middle => (8, 16),
            Self::Late => (16, 24),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Early => "0-8",
            Self::Middle => "8-16",
            Self::Late => "16-24",
        }
    }
}

impl fmt::Display for ShiftBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a shift-hours value outside the fixed band set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidShiftBand;

impl fmt::Display for InvalidShiftBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Shift Hours must be one of [0-8, 8-16, 16-24]")
    }
}

impl std::error::Error for InvalidShiftBand {}

impl FromStr for ShiftBand {
    type Err = InvalidShiftBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-8" => Ok(Self::Early),
            "8-16" => Ok(Self::Middle),
            "16-24" => Ok(Self::Late),
            _ => Err(InvalidShiftBand),
        }
    }
}

/// A user record. `shift_*` fields hold only the *current* shift; no
/// history is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// PHC-format Argon2 hash. Never serialized outward.
    pub password_hash: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub shift_hours: Option<ShiftBand>,
    pub shift_start_time: Option<i32>,
    pub shift_end_time: Option<i32>,
    pub shift_start_date: Option<DateTime<Utc>>,
}

/// Input for user registration. The password arrives plaintext and is
/// hashed by the service before it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub shift_hours: Option<String>,
}

/// Partial update for a user record; `None` fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub shift_hours: Option<ShiftBand>,
}

impl UserPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.shift_hours.is_none()
    }
}

/// The patch actually persisted: password already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserRecordPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub shift_hours: Option<ShiftBand>,
}

/// The shift fields written by an accepted transition. All three are
/// overwritten together; the stored band selection (`shift_hours`)
/// is not part of the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftUpdate {
    pub start_time: i32,
    pub end_time: i32,
    pub start_date: DateTime<Utc>,
}
