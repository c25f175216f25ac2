use std::sync::Arc;

use tracing::{info, instrument};

use super::error::DomainError;
use super::model::{NewSample, Sample, SamplePatch};
use super::repo::SamplesRepository;

/// Samples service. Plain CRUD over the repository; the only rule is
/// that an update must carry at least one field.
pub struct Service<R: SamplesRepository> {
    repo: Arc<R>,
}

impl<R: SamplesRepository> Service<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create_sample(&self, new_sample: NewSample) -> Result<Sample, DomainError> {
        let sample = self.repo.insert(new_sample).await?;
        info!(sample_id = sample.id, "sample created");
        Ok(sample)
    }

    pub async fn list_samples(&self) -> Result<Vec<Sample>, DomainError> {
        self.repo.list_active().await
    }

    pub async fn get_sample(&self, id: i64) -> Result<Sample, DomainError> {
        self.repo
            .find_active_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    #[instrument(skip(self, patch), fields(sample_id = id))]
    pub async fn update_sample(&self, id: i64, patch: SamplePatch) -> Result<Sample, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::validation("body", "Update requires a field."));
        }
        self.repo
            .update_active(id, patch)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn delete_sample(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            info!(sample_id = id, "sample deleted");
            Ok(())
        } else {
            Err(DomainError::NotFound { id })
        }
    }
}
