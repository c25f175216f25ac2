use chrono::{DateTime, Utc};

/// A sample record. `test` is its only payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub id: i64,
    pub test: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewSample {
    pub test: i32,
}

/// Partial update; `None` fields stay untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePatch {
    pub test: Option<i32>,
}

impl SamplePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.test.is_none()
    }
}
