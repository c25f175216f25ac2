use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr,
};

use crate::domain::error::DomainError;
use crate::domain::model::{NewUser, ShiftUpdate, User, UserRecordPatch};
use crate::domain::repo::UsersRepository;

use super::entity::{self, Column, Entity as UsersEntity};

pub struct SeaOrmUsersRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active(&self, id: i64) -> Result<Option<entity::Model>, DomainError> {
        UsersEntity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn insert(&self, new_user: &NewUser, password_hash: &str) -> Result<User, DomainError> {
        let now = Utc::now();
        let model = entity::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(new_user.first_name.clone()),
            last_name: ActiveValue::Set(new_user.last_name.clone()),
            email: ActiveValue::Set(new_user.email.clone()),
            password_hash: ActiveValue::Set(password_hash.to_owned()),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
            shift_hours: ActiveValue::Set(new_user.shift_hours.clone()),
            shift_start_time: ActiveValue::Set(None),
            shift_end_time: ActiveValue::Set(None),
            shift_start_date: ActiveValue::Set(None),
        };

        match model.insert(&self.db).await {
            Ok(inserted) => Ok(inserted.into()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(DomainError::email_already_exists(new_user.email.clone()))
                }
                _ => Err(DomainError::database(e.to_string())),
            },
        }
    }

    async fn find_active_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.find_active(id).await?.map(Into::into))
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        UsersEntity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map(|m| m.map(Into::into))
            .map_err(|e| DomainError::database(e.to_string()))
    }

    async fn list_active(&self) -> Result<Vec<User>, DomainError> {
        UsersEntity::find()
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
        patch: UserRecordPatch,
    ) -> Result<Option<User>, DomainError> {
        let Some(existing) = self.find_active(id).await? else {
            return Ok(None);
        };

        let effective_email = patch.email.clone().unwrap_or_else(|| existing.email.clone());
        let mut model: entity::ActiveModel = existing.into();
        if let Some(v) = patch.first_name {
            model.first_name = ActiveValue::Set(v);
        }
        if let Some(v) = patch.last_name {
            model.last_name = ActiveValue::Set(v);
        }
        if let Some(v) = patch.email {
            model.email = ActiveValue::Set(v);
        }
        if let Some(v) = patch.password_hash {
            model.password_hash = ActiveValue::Set(v);
        }
        if let Some(v) = patch.shift_hours {
            model.shift_hours = ActiveValue::Set(Some(v.as_str().to_owned()));
        }
        model.updated_on = ActiveValue::Set(Utc::now());

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(DomainError::email_already_exists(effective_email))
                }
                _ => Err(DomainError::database(e.to_string())),
            },
        }
    }

    async fn apply_shift(
        &self,
        id: i64,
        observed_start_date: Option<DateTime<Utc>>,
        shift: ShiftUpdate,
    ) -> Result<Option<User>, DomainError> {
        // Conditional write: besides the lifecycle flags, the filter
        // pins the shift_start_date observed by the caller's read so
        // a concurrent start cannot be silently overwritten.
        let guard = match observed_start_date {
            Some(d) => Column::ShiftStartDate.eq(d),
            None => Column::ShiftStartDate.is_null(),
        };

        let result = UsersEntity::update_many()
            .col_expr(Column::ShiftStartTime, Expr::value(shift.start_time))
            .col_expr(Column::ShiftEndTime, Expr::value(shift.end_time))
            .col_expr(Column::ShiftStartDate, Expr::value(shift.start_date))
            .col_expr(Column::UpdatedOn, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
            .filter(guard)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.find_active_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        UsersEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map(|r| r.rows_affected > 0)
            .map_err(|e| DomainError::database(e.to_string()))
    }
}
