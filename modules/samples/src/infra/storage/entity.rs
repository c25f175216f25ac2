use sea_orm::entity::prelude::*;

use crate::domain::model::Sample;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "samples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub test: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_on: DateTimeUtc,
    pub updated_on: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sample {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            test: m.test,
            is_active: m.is_active,
            is_deleted: m.is_deleted,
            created_on: m.created_on,
            updated_on: m.updated_on,
        }
    }
}
