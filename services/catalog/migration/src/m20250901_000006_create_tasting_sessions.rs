use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TastingSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TastingSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TastingSessions::CoffeeId).uuid().not_null())
                    .col(ColumnDef::new(TastingSessions::UserId).string().not_null())
                    .col(
                        ColumnDef::new(TastingSessions::BrewMethod)
                            .custom(Alias::new("brew_method_enum"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TastingSessions::GrindSize)
                            .custom(Alias::new("grind_size_enum")),
                    )
                    .col(ColumnDef::new(TastingSessions::CoffeeDose).decimal_len(5, 1))
                    .col(ColumnDef::new(TastingSessions::WaterAmount).decimal_len(6, 1))
                    .col(ColumnDef::new(TastingSessions::WaterTemperature).integer())
                    .col(ColumnDef::new(TastingSessions::BrewTime).string())
                    .col(ColumnDef::new(TastingSessions::Grinder).string())
                    .col(ColumnDef::new(TastingSessions::BrewingDevice).string())
                    .col(ColumnDef::new(TastingSessions::FilterType).string())
                    .col(ColumnDef::new(TastingSessions::SessionNotes).text())
                    .col(ColumnDef::new(TastingSessions::OverallRating).integer())
                    .col(ColumnDef::new(TastingSessions::WouldBuyAgain).boolean())
                    .col(
                        ColumnDef::new(TastingSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TastingSessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TastingSessions::CreatedBy).string())
                    .col(ColumnDef::new(TastingSessions::UpdatedBy).string())
                    .col(ColumnDef::new(TastingSessions::DeletedBy).string())
                    .col(ColumnDef::new(TastingSessions::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TastingSessions::Table, TastingSessions::CoffeeId)
                            .to(Coffees::Table, Coffees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(TastingSessions::Table)
                    .col(TastingSessions::UserId)
                    .name("idx_tasting_sessions_user_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(TastingSessions::Table)
                    .col(TastingSessions::CoffeeId)
                    .name("idx_tasting_sessions_coffee_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TastingSessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TastingSessions {
    Table,
    Id,
    CoffeeId,
    UserId,
    BrewMethod,
    GrindSize,
    CoffeeDose,
    WaterAmount,
    WaterTemperature,
    BrewTime,
    Grinder,
    BrewingDevice,
    FilterType,
    SessionNotes,
    OverallRating,
    WouldBuyAgain,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
    DeletedBy,
    DeletedAt,
}

#[derive(Iden)]
enum Coffees {
    Table,
    Id,
}
