use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roasters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roasters::Name).string().not_null())
                    .col(ColumnDef::new(Roasters::Location).string())
                    .col(ColumnDef::new(Roasters::Website).string())
                    .col(ColumnDef::new(Roasters::Description).text())
                    .col(
                        ColumnDef::new(Roasters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Roasters::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Roasters::CreatedBy).string())
                    .col(ColumnDef::new(Roasters::UpdatedBy).string())
                    .col(ColumnDef::new(Roasters::DeletedBy).string())
                    .col(ColumnDef::new(Roasters::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Roasters::Table)
                    .col(Roasters::Name)
                    .name("idx_roasters_name")
                    .to_owned(),
            )
            .await?;

        // Live rows only, so a soft-deleted roaster never blocks re-creation.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX uq_roasters_live_name \
                 ON roasters (name) WHERE deleted_at IS NULL",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roasters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Roasters {
    Table,
    Id,
    Name,
    Location,
    Website,
    Description,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
    DeletedBy,
    DeletedAt,
}
