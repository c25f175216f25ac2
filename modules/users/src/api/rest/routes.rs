use std::sync::Arc;

use auth::TokenService;
use axum::Router;
use axum::extract::Extension;
use axum::routing::{get, post, put};

use crate::domain::service::Service;
use crate::infra::storage::sea_orm_repo::SeaOrmUsersRepository;

use super::handlers;

type Repo = SeaOrmUsersRepository;

/// Build the `/users` router. The service and token verifier are
/// injected as extensions so handlers stay free of global state.
pub fn router(service: Arc<Service<Repo>>, tokens: Arc<TokenService>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::create_user::<Repo>).get(handlers::list_users::<Repo>),
        )
        .route("/login", post(handlers::login::<Repo>))
        .route("/period/start-shift", put(handlers::start_shift::<Repo>))
        .route(
            "/{id}",
            get(handlers::get_user::<Repo>)
                .put(handlers::update_user::<Repo>)
                .delete(handlers::delete_user::<Repo>),
        )
        .layer(Extension(service))
        .layer(Extension(tokens))
}
