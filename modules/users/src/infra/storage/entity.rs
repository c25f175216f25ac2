use sea_orm::entity::prelude::*;

use crate::domain::model::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_on: DateTimeUtc,
    pub updated_on: DateTimeUtc,
    pub shift_hours: Option<String>,
    pub shift_start_time: Option<i32>,
    pub shift_end_time: Option<i32>,
    pub shift_start_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            password_hash: m.password_hash,
            is_active: m.is_active,
            is_deleted: m.is_deleted,
            created_on: m.created_on,
            updated_on: m.updated_on,
            // An out-of-set stored value maps to None rather than
            // poisoning every read of the record.
            shift_hours: m.shift_hours.as_deref().and_then(|s| s.parse().ok()),
            shift_start_time: m.shift_start_time,
            shift_end_time: m.shift_end_time,
            shift_start_date: m.shift_start_date,
        }
    }
}
