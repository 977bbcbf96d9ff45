use brewlog_core::audited::AuditedEntity;
use sea_orm::entity::prelude::*;

use super::enums::{BrewMethod, GrindSize};

/// A brewing-and-tasting session. Owned by `user_id` (the token subject);
/// only the owner may read or mutate it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasting_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub coffee_id: Uuid,
    pub user_id: String,
    pub brew_method: BrewMethod,
    pub grind_size: Option<GrindSize>,
    // Dose and water in grams; temperature in celsius.
    #[sea_orm(column_type = "Decimal(Some((5, 1)))", nullable)]
    pub coffee_dose: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((6, 1)))", nullable)]
    pub water_amount: Option<Decimal>,
    pub water_temperature: Option<i32>,
    // e.g. "4:30", "2m 30s".
    pub brew_time: Option<String>,
    pub grinder: Option<String>,
    pub brewing_device: Option<String>,
    pub filter_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub session_notes: Option<String>,
    // 1-10 scale.
    pub overall_rating: Option<i32>,
    pub would_buy_again: Option<bool>,
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
        belongs_to = "super::coffees::Entity",
        from = "Column::CoffeeId",
        to = "super::coffees::Column::Id"
    )]
    Coffee,
    #[sea_orm(has_many = "super::tasting_notes::Entity")]
    TastingNotes,
}

impl Related<super::coffees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coffee.def()
    }
}

impl Related<super::tasting_notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TastingNotes.def()
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
