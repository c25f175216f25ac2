use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::{NewSample, Sample, SamplePatch};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSampleRequest {
    pub test: i32,
}

impl From<CreateSampleRequest> for NewSample {
    fn from(req: CreateSampleRequest) -> Self {
        Self { test: req.test }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSampleRequest {
    #[serde(default)]
    pub test: Option<i32>,
}

impl From<UpdateSampleRequest> for SamplePatch {
    fn from(req: UpdateSampleRequest) -> Self {
        Self { test: req.test }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleDto {
    pub id: i64,
    pub test: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<Sample> for SampleDto {
    fn from(s: Sample) -> Self {
        Self {
            id: s.id,
            test: s.test,
            is_active: s.is_active,
            is_deleted: s.is_deleted,
            created_on: s.created_on,
            updated_on: s.updated_on,
        }
    }
}
