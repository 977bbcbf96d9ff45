use brewlog_core::audited::AuditedEntity;
use sea_orm::entity::prelude::*;

/// Coffee roaster. `name` is unique among live rows, enforced at the
/// repository layer so soft-deleted roasters do not block re-creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roasters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::coffees::Entity")]
    Coffees,
}

impl Related<super::coffees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coffees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl AuditedEntity for Entity {
    fn id_col() -> Self::Column {
        Column::Id
    }
    fn created_at_col() -> Self::Column {
        Column::CreatedAt
    }
    fn updated_at_col() -> Self::Column {
        Column::UpdatedAt
    }
    fn created_by_col() -> Self::Column {
        Column::CreatedBy
    }
    fn updated_by_col() -> Self::Column {
        Column::UpdatedBy
    }
    fn deleted_at_col() -> Self::Column {
        Column::DeletedAt
    }
    fn deleted_by_col() -> Self::Column {
        Column::DeletedBy
    }
}
