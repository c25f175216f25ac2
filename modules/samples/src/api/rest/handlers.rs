use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::repo::SamplesRepository;
use crate::domain::service::Service;

use super::ApiResult;
use super::dto::{CreateSampleRequest, SampleDto, UpdateSampleRequest};

pub async fn create_sample<R: SamplesRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Json(req): Json<CreateSampleRequest>,
) -> ApiResult<(StatusCode, Json<SampleDto>)> {
    let sample = svc.create_sample(req.into()).await?;
    Ok((StatusCode::CREATED, Json(sample.into())))
}

pub async fn list_samples<R: SamplesRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
) -> ApiResult<Json<Vec<SampleDto>>> {
    let samples = svc.list_samples().await?;
    Ok(Json(samples.into_iter().map(Into::into).collect()))
}

pub async fn get_sample<R: SamplesRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<SampleDto>> {
    let sample = svc.get_sample(id).await?;
    Ok(Json(sample.into()))
}

pub async fn update_sample<R: SamplesRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSampleRequest>,
) -> ApiResult<Json<SampleDto>> {
    let sample = svc.update_sample(id, req.into()).await?;
    Ok(Json(sample.into()))
}

pub async fn delete_sample<R: SamplesRepository>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    svc.delete_sample(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
