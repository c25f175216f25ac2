use std::sync::Arc;

use auth::TokenService;
use chrono::Utc;
use tracing::{debug, info, instrument};

use super::error::DomainError;
use super::model::{NewUser, ShiftBand, ShiftUpdate, User, UserPatch, UserRecordPatch};
use super::repo::UsersRepository;
use super::shift::{self, Decision, ShiftState};

// ============================================================================
// Service Configuration
// ============================================================================

pub struct ServiceConfig {
    pub password_min: usize,
    pub password_max: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            password_min: 6,
            password_max: 50,
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Users service. Holds an explicit repository reference passed at
/// construction; nothing is resolved from ambient state.
pub struct Service<R: UsersRepository> {
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: ServiceConfig,
}

impl<R: UsersRepository> Service<R> {
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: ServiceConfig) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    /// Register a new user; the password is hashed before persistence.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        self.validate_new_user(&new_user)?;

        let password_hash = auth::password::hash_password(&new_user.password)
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let user = self.repo.insert(&new_user, &password_hash).await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), DomainError> {
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email", "Email must be valid"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password", "Password is required"));
        }

        let user = self
            .repo
            .find_active_by_email(email)
            .await?
            .ok_or(DomainError::UserDoesNotExist)?;

        let correct = auth::password::verify_password(password, &user.password_hash)
            .map_err(|e| DomainError::internal(e.to_string()))?;
        if !correct {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id)
            .map_err(|e| DomainError::internal(e.to_string()))?;

        debug!(user_id = user.id, "login succeeded");
        Ok((user, token))
    }

    /// Start a shift for the caller: read the current record, run the
    /// policy engine, and persist the accepted boundaries.
    ///
    /// Exactly one read and, on acceptance, exactly one write. The
    /// write is guarded by the observed `shift_start_date`; a guard
    /// miss surfaces as [`DomainError::Conflict`].
    #[instrument(skip(self), fields(user_id = caller_id))]
    pub async fn start_shift(
        &self,
        caller_id: i64,
        requested_shift_hours: &str,
    ) -> Result<User, DomainError> {
        let user = self
            .repo
            .find_active_by_id(caller_id)
            .await?
            .ok_or(DomainError::NotFound { id: caller_id })?;

        let state = ShiftState {
            start_time: user.shift_start_time,
            end_time: user.shift_end_time,
            start_date: user.shift_start_date,
        };

        match shift::decide(Utc::now(), Some(&state), requested_shift_hours) {
            Decision::Invalid { field, message } => Err(DomainError::validation(field, message)),
            Decision::Reject { reason } => {
                debug!(%reason, "shift start rejected");
                Err(DomainError::shift_blocked(reason))
            }
            Decision::Accept {
                start_time,
                end_time,
                start_date,
            } => {
                let updated = self
                    .repo
                    .apply_shift(
                        caller_id,
                        user.shift_start_date,
                        ShiftUpdate {
                            start_time,
                            end_time,
                            start_date,
                        },
                    )
                    .await?;
                let updated = updated.ok_or(DomainError::Conflict)?;
                info!(user_id = caller_id, start_time, end_time, "shift started");
                Ok(updated)
            }
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list_active().await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .find_active_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Apply a partial update; an all-`None` patch is a validation
    /// error, and a present password is re-hashed.
    #[instrument(skip(self, patch), fields(user_id = id))]
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::validation("body", "Update requires a field."));
        }
        if let Some(ref email) = patch.email
            && !email.contains('@')
        {
            return Err(DomainError::validation("email", "Email must be valid"));
        }
        if let Some(ref password) = patch.password {
            self.validate_password(password)?;
        }

        let password_hash = match patch.password {
            Some(ref password) => Some(
                auth::password::hash_password(password)
                    .map_err(|e| DomainError::internal(e.to_string()))?,
            ),
            None => None,
        };

        let record_patch = UserRecordPatch {
            first_name: patch.first_name,
            last_name: patch.last_name,
            email: patch.email,
            password_hash,
            shift_hours: patch.shift_hours,
        };

        self.repo
            .update_active(id, record_patch)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            info!(user_id = id, "user deleted");
            Ok(())
        } else {
            Err(DomainError::NotFound { id })
        }
    }

    fn validate_new_user(&self, new_user: &NewUser) -> Result<(), DomainError> {
        if new_user.first_name.trim().is_empty() {
            return Err(DomainError::validation("firstName", "First Name is required"));
        }
        if new_user.last_name.trim().is_empty() {
            return Err(DomainError::validation("lastName", "Last Name is required"));
        }
        if !new_user.email.contains('@') {
            return Err(DomainError::validation("email", "Email must be valid"));
        }
        self.validate_password(&new_user.password)?;
        if let Some(ref band) = new_user.shift_hours
            && band.parse::<ShiftBand>().is_err()
        {
            return Err(DomainError::validation(
                "shiftHours",
                "Shift Hours must be one of [0-8, 8-16, 16-24]",
            ));
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), DomainError> {
        if password.len() < self.config.password_min || password.len() > self.config.password_max {
            return Err(DomainError::validation(
                "password",
                format!(
                    "Password length must be between {} and {} characters",
                    self.config.password_min, self.config.password_max
                ),
            ));
        }
        Ok(())
    }
}
