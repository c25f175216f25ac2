use std::sync::Arc;

use axum::Router;
use axum::extract::Extension;
use axum::routing::{get, post};

use crate::domain::service::Service;
use crate::infra::storage::sea_orm_repo::SeaOrmSamplesRepository;

use super::handlers;

type Repo = SeaOrmSamplesRepository;

/// Build the `/samples` router.
pub fn router(service: Arc<Service<Repo>>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::create_sample::<Repo>).get(handlers::list_samples::<Repo>),
        )
        .route(
            "/{id}",
            get(handlers::get_sample::<Repo>)
                .put(handlers::update_sample::<Repo>)
                .delete(handlers::delete_sample::<Repo>),
        )
        .layer(Extension(service))
}
