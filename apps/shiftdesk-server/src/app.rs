use std::sync::Arc;

use auth::TokenService;
use axum::routing::get;
use axum::{Json, Router};
use http_problem::Problem;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::AppConfig;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shiftdesk API",
        description = "Users, samples and shift scheduling",
        version = "0.1.0"
    ),
    components(schemas(
        users::api::rest::dto::CreateUserRequest,
        users::api::rest::dto::LoginRequest,
        users::api::rest::dto::LoginResponse,
        users::api::rest::dto::StartShiftRequest,
        users::api::rest::dto::UpdateUserRequest,
        users::api::rest::dto::UserDto,
        samples::api::rest::dto::CreateSampleRequest,
        samples::api::rest::dto::UpdateSampleRequest,
        samples::api::rest::dto::SampleDto,
        http_problem::Problem,
        http_problem::ValidationViolation,
    ))
)]
pub struct ApiDoc;

/// Assemble the full application router: one nested sub-router per
/// module, the OpenAPI document, trace layer and a problem-shaped 404.
pub fn build_router(db: &DatabaseConnection, config: &AppConfig) -> Router {
    let tokens = Arc::new(TokenService::new(
        &config.auth.secret,
        config.auth.token_ttl_seconds,
    ));

    let users_service = Arc::new(users::domain::service::Service::new(
        Arc::new(users::infra::storage::SeaOrmUsersRepository::new(db.clone())),
        Arc::clone(&tokens),
        users::domain::service::ServiceConfig::default(),
    ));
    let samples_service = Arc::new(samples::domain::service::Service::new(Arc::new(
        samples::infra::storage::SeaOrmSamplesRepository::new(db.clone()),
    )));

    Router::new()
        .nest(
            "/users",
            users::api::rest::routes::router(users_service, tokens),
        )
        .nest(
            "/samples",
            samples::api::rest::routes::router(samples_service),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

#[allow(clippy::unused_async)]
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[allow(clippy::unused_async)]
async fn not_found() -> Problem {
    http_problem::not_found("Resource not found")
}
