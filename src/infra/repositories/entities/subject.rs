//! Subject database entity for SeaORM.
//!
//! Maps the legacy `materia` table layout onto the domain model.

use sea_orm::entity::prelude::*;

use crate::domain::Subject;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "materia")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "codigo")]
    pub code: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Subject {
    fn from(model: Model) -> Self {
        Subject {
            code: model.code,
            name: model.name,
        }
    }
}
