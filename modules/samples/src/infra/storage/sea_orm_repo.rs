use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::domain::error::DomainError;
use crate::domain::model::{NewSample, Sample, SamplePatch};
use crate::domain::repo::SamplesRepository;

use super::entity::{self, Column, Entity as SamplesEntity};

pub struct SeaOrmSamplesRepository {
    db: DatabaseConnection,
}

impl SeaOrmSamplesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active(&self, id: i64) -> Result<Option<entity::Model>, DomainError> {
        SamplesEntity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }
}

#[async_trait]
impl SamplesRepository for SeaOrmSamplesRepository {
    async fn insert(&self, new_sample: NewSample) -> Result<Sample, DomainError> {
        let now = Utc::now();
        let model = entity::ActiveModel {
            id: ActiveValue::NotSet,
            test: ActiveValue::Set(new_sample.test),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        };
        model
            .insert(&self.db)
            .await
            .map(Into::into)
            .map_err(|e| DomainError::database(e.to_string()))
    }

    async fn find_active_by_id(&self, id: i64) -> Result<Option<Sample>, DomainError> {
        Ok(self.find_active(id).await?.map(Into::into))
    }

    async fn list_active(&self) -> Result<Vec<Sample>, DomainError> {
        SamplesEntity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .all(&self.db)
            .await
            .map(|models| models.into_iter().map(Into::into).collect())
            .map_err(|e| DomainError::database(e.to_string()))
    }

    async fn update_active(
        &self,
        id: i64,
        patch: SamplePatch,
    ) -> Result<Option<Sample>, DomainError> {
        let Some(existing) = self.find_active(id).await? else {
            return Ok(None);
        };

        let mut model: entity::ActiveModel = existing.into();
        if let Some(test) = patch.test {
            model.test = ActiveValue::Set(test);
        }
        model.updated_on = ActiveValue::Set(Utc::now());

        model
            .update(&self.db)
            .await
            .map(|m| Some(m.into()))
            .map_err(|e| DomainError::database(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        SamplesEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map(|r| r.rows_affected > 0)
            .map_err(|e| DomainError::database(e.to_string()))
    }
}
