use sea_orm::entity::prelude::*;

/// Coffee ↔ flavor-tag association. Plain composite-key join, no audit
/// columns; rows live and die with their coffee's tag set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coffee_flavors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub coffee_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub flavor_tag_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::coffees::Entity",
        from = "Column::CoffeeId",
        to = "super::coffees::Column::Id"
    )]
    Coffee,
    #[sea_orm(
        belongs_to = "super::flavor_tags::Entity",
        from = "Column::FlavorTagId",
        to = "super::flavor_tags::Column::Id"
    )]
    FlavorTag,
}

impl Related<super::coffees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coffee.def()
    }
}

impl Related<super::flavor_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlavorTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
