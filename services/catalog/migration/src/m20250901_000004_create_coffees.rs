use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coffees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Coffees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Coffees::Name).string().not_null())
                    .col(ColumnDef::new(Coffees::RoasterId).uuid().not_null())
                    .col(ColumnDef::new(Coffees::OriginCountry).string())
                    .col(ColumnDef::new(Coffees::OriginRegion).string())
                    .col(ColumnDef::new(Coffees::FarmName).string())
                    .col(ColumnDef::new(Coffees::Producer).string())
                    .col(ColumnDef::new(Coffees::Altitude).string())
                    .col(
                        ColumnDef::new(Coffees::ProcessingMethod)
                            .custom(Alias::new("processing_method_enum")),
                    )
                    .col(ColumnDef::new(Coffees::Variety).string())
                    .col(
                        ColumnDef::new(Coffees::RoastLevel)
                            .custom(Alias::new("roast_level_enum")),
                    )
                    .col(ColumnDef::new(Coffees::RoastDate).string())
                    .col(ColumnDef::new(Coffees::Description).text())
                    .col(ColumnDef::new(Coffees::Price).decimal_len(10, 2))
                    .col(ColumnDef::new(Coffees::BagSize).string())
                    .col(
                        ColumnDef::new(Coffees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Coffees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Coffees::CreatedBy).string())
                    .col(ColumnDef::new(Coffees::UpdatedBy).string())
                    .col(ColumnDef::new(Coffees::DeletedBy).string())
                    .col(ColumnDef::new(Coffees::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Coffees::Table, Coffees::RoasterId)
                            .to(Roasters::Table, Roasters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Coffees::Table)
                    .col(Coffees::RoasterId)
                    .name("idx_coffees_roaster_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Coffees::Table)
                    .col(Coffees::Name)
                    .name("idx_coffees_name")
                    .to_owned(),
            )
            .await?;

        // Backstop for the app-level live (name, roaster) uniqueness check.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX uq_coffees_live_name_roaster \
                 ON coffees (name, roaster_id) WHERE deleted_at IS NULL",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coffees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Coffees {
    Table,
    Id,
    Name,
    RoasterId,
    OriginCountry,
    OriginRegion,
    FarmName,
    Producer,
    Altitude,
    ProcessingMethod,
    Variety,
    RoastLevel,
    RoastDate,
    Description,
    Price,
    BagSize,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
    DeletedBy,
    DeletedAt,
}

#[derive(Iden)]
enum Roasters {
    Table,
    Id,
}
