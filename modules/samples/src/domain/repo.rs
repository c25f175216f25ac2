use async_trait::async_trait;

use super::error::DomainError;
use super::model::{NewSample, Sample, SamplePatch};

/// Storage abstraction for sample records. Lookups see only active,
/// non-deleted rows.
#[async_trait]
pub trait SamplesRepository: Send + Sync {
    async fn insert(&self, new_sample: NewSample) -> Result<Sample, DomainError>;

    async fn find_active_by_id(&self, id: i64) -> Result<Option<Sample>, DomainError>;

    async fn list_active(&self) -> Result<Vec<Sample>, DomainError>;

    async fn update_active(
        &self,
        id: i64,
        patch: SamplePatch,
    ) -> Result<Option<Sample>, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
