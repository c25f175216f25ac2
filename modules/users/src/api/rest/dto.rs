//! Wire DTOs for the users API. Field names follow the camelCase
//! wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::{NewUser, User, UserPatch};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Optional preferred band; one of `0-8`, `8-16`, `16-24`.
    #[serde(default)]
    pub shift_hours: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            shift_hours: req.shift_hours,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartShiftRequest {
    pub shift_hours: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub shift_hours: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_end_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start_date: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            is_active: u.is_active,
            is_deleted: u.is_deleted,
            created_on: u.created_on,
            updated_on: u.updated_on,
            shift_hours: u.shift_hours.map(|b| b.as_str().to_owned()),
            shift_start_time: u.shift_start_time,
            shift_end_time: u.shift_end_time,
            shift_start_date: u.shift_start_date,
        }
    }
}

/// Login success payload: the user record with its bearer token
/// attached.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserDto,
    pub token: String,
}
