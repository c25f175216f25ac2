use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::DomainError;
use super::model::{NewUser, ShiftUpdate, User, UserRecordPatch};

/// Repository trait for user persistence operations.
///
/// Conditions mirror the record lifecycle: reads and updates that
/// serve business flows are restricted to active, non-deleted records.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a new user. `password_hash` replaces the plaintext
    /// password from `new_user`.
    async fn insert(&self, new_user: &NewUser, password_hash: &str) -> Result<User, DomainError>;

    /// Find an active, non-deleted user by id.
    async fn find_active_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find an active user by email (login lookup).
    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All active, non-deleted users.
    async fn list_active(&self) -> Result<Vec<User>, DomainError>;

    /// Apply a partial update to the record `{id, is_active,
    /// !is_deleted}`. Returns the updated record, or `None` when no
    /// such record exists.
    async fn update_active(
        &self,
        id: i64,
        patch: UserRecordPatch,
    ) -> Result<Option<User>, DomainError>;

    /// Overwrite the shift fields of the record `{id, is_active,
    /// !is_deleted}`, guarded by the previously observed
    /// `shift_start_date` (optimistic concurrency). Returns `None`
    /// when the guard matched no rows.
    async fn apply_shift(
        &self,
        id: i64,
        observed_start_date: Option<DateTime<Utc>>,
        shift: ShiftUpdate,
    ) -> Result<Option<User>, DomainError>;

    /// Hard-delete by id; `true` when a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
