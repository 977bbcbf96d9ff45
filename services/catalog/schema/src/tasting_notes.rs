use brewlog_core::audited::AuditedEntity;
use sea_orm::entity::prelude::*;

/// One flavor observation within a tasting session. Composition child of
/// `tasting_sessions`; deleted with its session (FK cascade).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasting_notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tasting_session_id: Uuid,
    pub flavor_tag_id: Uuid,
    // 1-10 scale.
    pub intensity: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    // Phases the flavor was detected in.
    pub aroma: bool,
    pub flavor: bool,
    pub aftertaste: bool,
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
        belongs_to = "super::tasting_sessions::Entity",
        from = "Column::TastingSessionId",
        to = "super::tasting_sessions::Column::Id"
    )]
    TastingSession,
    #[sea_orm(
        belongs_to = "super::flavor_tags::Entity",
        from = "Column::FlavorTagId",
        to = "super::flavor_tags::Column::Id"
    )]
    FlavorTag,
}

impl Related<super::tasting_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TastingSession.def()
    }
}

impl Related<super::flavor_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlavorTag.def()
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
