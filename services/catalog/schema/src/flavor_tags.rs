use brewlog_core::audited::AuditedEntity;
use sea_orm::entity::prelude::*;

/// Flavor descriptor. `name` is globally unique, compared case-insensitively
/// at the repository layer; the stored value keeps the first writer's casing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flavor_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    // e.g. "fruity", "nutty", "floral".
    pub category: Option<String>,
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
    #[sea_orm(has_many = "super::coffee_flavors::Entity")]
    CoffeeFlavors,
    #[sea_orm(has_many = "super::tasting_notes::Entity")]
    TastingNotes,
}

impl Related<super::coffee_flavors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoffeeFlavors.def()
    }
}

impl Related<super::tasting_notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TastingNotes.def()
    }
}

impl Related<super::coffees::Entity> for Entity {
    fn to() -> RelationDef {
        super::coffee_flavors::Relation::Coffee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::coffee_flavors::Relation::FlavorTag.def().rev())
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
