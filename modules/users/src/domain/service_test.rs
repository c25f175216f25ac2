use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenService;
use chrono::{DateTime, Duration, Utc};

use super::error::DomainError;
use super::model::{NewUser, ShiftUpdate, User, UserRecordPatch};
use super::repo::UsersRepository;
use super::service::{Service, ServiceConfig};

/// In-memory repository driving the service tests. `fail` makes every
/// call report a store failure.
struct MockRepository {
    users: Mutex<Vec<User>>,
    fail: bool,
}

impl MockRepository {
    fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::database("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UsersRepository for MockRepository {
    async fn insert(&self, new_user: &NewUser, password_hash: &str) -> Result<User, DomainError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::email_already_exists(new_user.email.clone()));
        }
        let now = Utc::now();
        let user = User {
            id: i64::try_from(users.len()).unwrap() + 1,
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            email: new_user.email.clone(),
            password_hash: password_hash.to_owned(),
            is_active: true,
            is_deleted: false,
            created_on: now,
            updated_on: now,
            shift_hours: new_user.shift_hours.as_deref().and_then(|s| s.parse().ok()),
            shift_start_time: None,
            shift_end_time: None,
            shift_start_date: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_active_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id == id && u.is_active && !u.is_deleted)
            .cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email && u.is_active)
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<User>, DomainError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| u.is_active && !u.is_deleted)
            .cloned()
            .collect())
    }

    async fn update_active(
        &self,
        id: i64,
        patch: UserRecordPatch,
    ) -> Result<Option<User>, DomainError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let Some(user) = users
            .iter_mut()
            .find(|u| u.id == id && u.is_active && !u.is_deleted)
        else {
            return Ok(None);
        };
        if let Some(v) = patch.first_name {
            user.first_name = v;
        }
        if let Some(v) = patch.last_name {
            user.last_name = v;
        }
        if let Some(v) = patch.email {
            user.email = v;
        }
        if let Some(v) = patch.password_hash {
            user.password_hash = v;
        }
        if let Some(v) = patch.shift_hours {
            user.shift_hours = Some(v);
        }
        user.updated_on = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn apply_shift(
        &self,
        id: i64,
        observed_start_date: Option<DateTime<Utc>>,
        shift: ShiftUpdate,
    ) -> Result<Option<User>, DomainError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| {
            u.id == id && u.is_active && !u.is_deleted && u.shift_start_date == observed_start_date
        }) else {
            return Ok(None);
        };
        user.shift_start_time = Some(shift.start_time);
        user.shift_end_time = Some(shift.end_time);
        user.shift_start_date = Some(shift.start_date);
        user.updated_on = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

fn test_tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new("test-signature", 3600))
}

fn service(repo: MockRepository) -> Service<MockRepository> {
    Service::new(Arc::new(repo), test_tokens(), ServiceConfig::default())
}

fn seeded_user(id: i64, email: &str, password: &str) -> User {
    let now = Utc::now();
    User {
        id,
        first_name: "Olayiwola".to_owned(),
        last_name: "Sobowale".to_owned(),
        email: email.to_owned(),
        password_hash: auth::password::hash_password(password).unwrap(),
        is_active: true,
        is_deleted: false,
        created_on: now,
        updated_on: now,
        shift_hours: None,
        shift_start_time: None,
        shift_end_time: None,
        shift_start_date: None,
    }
}

#[tokio::test]
async fn create_user_hashes_password_and_persists() {
    let svc = service(MockRepository::new(vec![]));
    let user = svc
        .create_user(NewUser {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "password".to_owned(),
            shift_hours: Some("0-8".to_owned()),
        })
        .await
        .unwrap();

    assert_ne!(user.password_hash, "password");
    assert!(auth::password::verify_password("password", &user.password_hash).unwrap());
    assert_eq!(user.shift_hours.map(|b| b.as_str()), Some("0-8"));
    assert!(user.shift_start_date.is_none());
}

#[tokio::test]
async fn create_user_rejects_short_password() {
    let svc = service(MockRepository::new(vec![]));
    let err = svc
        .create_user(NewUser {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "short".to_owned(),
            shift_hours: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn create_user_rejects_out_of_set_band() {
    let svc = service(MockRepository::new(vec![]));
    let err = svc
        .create_user(NewUser {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "password".to_owned(),
            shift_hours: Some("3-9".to_owned()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn login_issues_verifiable_token() {
    let svc = service(MockRepository::new(vec![seeded_user(
        1,
        "user@example.com",
        "password",
    )]));
    let (user, token) = svc.login("user@example.com", "password").await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(test_tokens().verify(&token).unwrap().sub, 1);
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let svc = service(MockRepository::new(vec![seeded_user(
        1,
        "user@example.com",
        "password",
    )]));
    let err = svc.login("user@example.com", "wrong-pass").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));
}

#[tokio::test]
async fn login_unknown_email_fails() {
    let svc = service(MockRepository::new(vec![]));
    let err = svc.login("ghost@example.com", "password").await.unwrap_err();
    assert!(matches!(err, DomainError::UserDoesNotExist));
}

#[tokio::test]
async fn start_shift_first_time_persists_boundaries() {
    let svc = service(MockRepository::new(vec![seeded_user(
        1,
        "user@example.com",
        "password",
    )]));
    let user = svc.start_shift(1, "8-16").await.unwrap();
    assert_eq!(user.shift_start_time, Some(8));
    assert_eq!(user.shift_end_time, Some(16));
    assert!(user.shift_start_date.is_some());
}

#[tokio::test]
async fn start_shift_same_day_is_blocked() {
    let mut user = seeded_user(1, "user@example.com", "password");
    user.shift_start_time = Some(0);
    user.shift_end_time = Some(24);
    user.shift_start_date = Some(Utc::now());
    let svc = service(MockRepository::new(vec![user]));

    let err = svc.start_shift(1, "8-16").await.unwrap_err();
    assert!(matches!(err, DomainError::ShiftBlocked { .. }));
}

#[tokio::test]
async fn start_shift_different_day_overwrites_previous() {
    let mut user = seeded_user(1, "user@example.com", "password");
    user.shift_start_time = Some(16);
    user.shift_end_time = Some(24);
    // Yesterday-ish; 40 days back avoids the same-day-of-month trap.
    user.shift_start_date = Some(Utc::now() - Duration::days(40));
    let svc = service(MockRepository::new(vec![user]));

    let updated = svc.start_shift(1, "0-8").await.unwrap();
    assert_eq!(updated.shift_start_time, Some(0));
    assert_eq!(updated.shift_end_time, Some(8));
}

#[tokio::test]
async fn start_shift_invalid_band_is_validation_error() {
    let svc = service(MockRepository::new(vec![seeded_user(
        1,
        "user@example.com",
        "password",
    )]));
    let err = svc.start_shift(1, "3-9").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn start_shift_unknown_user_is_not_found() {
    let svc = service(MockRepository::new(vec![]));
    let err = svc.start_shift(99, "0-8").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 99 }));
}

#[tokio::test]
async fn start_shift_store_failure_is_database_error() {
    let svc = service(MockRepository::failing());
    let err = svc.start_shift(1, "0-8").await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn update_user_requires_a_field() {
    let svc = service(MockRepository::new(vec![seeded_user(
        1,
        "user@example.com",
        "password",
    )]));
    let err = svc
        .update_user(1, super::model::UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn update_user_rehashes_password() {
    let svc = service(MockRepository::new(vec![seeded_user(
        1,
        "user@example.com",
        "password",
    )]));
    let updated = svc
        .update_user(
            1,
            super::model::UserPatch {
                password: Some("new-password".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(auth::password::verify_password("new-password", &updated.password_hash).unwrap());
}

#[tokio::test]
async fn delete_missing_user_is_not_found() {
    let svc = service(MockRepository::new(vec![]));
    let err = svc.delete_user(5).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 5 }));
}
