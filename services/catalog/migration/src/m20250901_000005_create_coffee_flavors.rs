use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoffeeFlavors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CoffeeFlavors::CoffeeId).uuid().not_null())
                    .col(
                        ColumnDef::new(CoffeeFlavors::FlavorTagId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CoffeeFlavors::CoffeeId)
                            .col(CoffeeFlavors::FlavorTagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CoffeeFlavors::Table, CoffeeFlavors::CoffeeId)
                            .to(Coffees::Table, Coffees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CoffeeFlavors::Table, CoffeeFlavors::FlavorTagId)
                            .to(FlavorTags::Table, FlavorTags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoffeeFlavors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CoffeeFlavors {
    Table,
    CoffeeId,
    FlavorTagId,
}

#[derive(Iden)]
enum Coffees {
    Table,
    Id,
}

#[derive(Iden)]
enum FlavorTags {
    Table,
    Id,
}
