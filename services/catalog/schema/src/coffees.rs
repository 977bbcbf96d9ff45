use brewlog_core::audited::AuditedEntity;
use sea_orm::entity::prelude::*;

use super::enums::{ProcessingMethod, RoastLevel};

/// A specific coffee offering from a roaster. `(name, roaster_id)` is unique
/// among live rows, enforced at the repository layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "coffees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub roaster_id: Uuid,
    pub origin_country: Option<String>,
    pub origin_region: Option<String>,
    pub farm_name: Option<String>,
    pub producer: Option<String>,
    // Free text, e.g. "1200-1400m".
    pub altitude: Option<String>,
    pub processing_method: Option<ProcessingMethod>,
    pub variety: Option<String>,
    pub roast_level: Option<RoastLevel>,
    // Flexible date format, stored as entered.
    pub roast_date: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub bag_size: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roasters::Entity",
        from = "Column::RoasterId",
        to = "super::roasters::Column::Id"
    )]
    Roaster,
    #[sea_orm(has_many = "super::tasting_sessions::Entity")]
    TastingSessions,
    #[sea_orm(has_many = "super::coffee_flavors::Entity")]
    CoffeeFlavors,
}

impl Related<super::roasters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roaster.def()
    }
}

impl Related<super::tasting_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TastingSessions.def()
    }
}

impl Related<super::coffee_flavors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoffeeFlavors.def()
    }
}

// M2M with flavor tags through the association table.
impl Related<super::flavor_tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::coffee_flavors::Relation::FlavorTag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::coffee_flavors::Relation::Coffee.def().rev())
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
