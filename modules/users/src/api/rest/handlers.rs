use std::sync::Arc;

use auth::CallerIdentity;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::model::UserPatch;
use crate::domain::repo::UsersRepository;
use crate::domain::service::Service;

use super::ApiResult;
use super::dto::{
    CreateUserRequest, LoginRequest, LoginResponse, StartShiftRequest, UpdateUserRequest, UserDto,
};

pub async fn create_user<R: UsersRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let user = svc.create_user(req.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn login<R: UsersRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (user, token) = svc.login(&req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        user: user.into(),
        token,
    }))
}

/// Start a shift for the authenticated caller. The identity comes
/// from the verified bearer token, never from the body.
pub async fn start_shift<R: UsersRepository>(
    caller: CallerIdentity,
    Extension(svc): Extension<Arc<Service<R>>>,
    Json(req): Json<StartShiftRequest>,
) -> ApiResult<Json<UserDto>> {
    let requested = req.shift_hours.unwrap_or_default();
    let user = svc.start_shift(caller.user_id, &requested).await?;
    Ok(Json(user.into()))
}

pub async fn list_users<R: UsersRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = svc.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn get_user<R: UsersRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserDto>> {
    let user = svc.get_user(id).await?;
    Ok(Json(user.into()))
}

pub async fn update_user<R: UsersRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let band = match req.shift_hours {
        Some(ref s) => Some(s.parse().map_err(|_| {
            crate::domain::error::DomainError::validation(
                "shiftHours",
                "Shift Hours must be one of [0-8, 8-16, 16-24]",
            )
        })?),
        None => None,
    };
    let patch = UserPatch {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
        shift_hours: band,
    };
    let user = svc.update_user(id, patch).await?;
    Ok(Json(user.into()))
}

pub async fn delete_user<R: UsersRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    svc.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
