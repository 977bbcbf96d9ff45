use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlavorTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FlavorTags::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FlavorTags::Name).string().not_null())
                    .col(ColumnDef::new(FlavorTags::Category).string())
                    .col(ColumnDef::new(FlavorTags::Description).text())
                    .col(
                        ColumnDef::new(FlavorTags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlavorTags::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FlavorTags::CreatedBy).string())
                    .col(ColumnDef::new(FlavorTags::UpdatedBy).string())
                    .col(ColumnDef::new(FlavorTags::DeletedBy).string())
                    .col(ColumnDef::new(FlavorTags::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Tag names are compared case-insensitively everywhere.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX uq_flavor_tags_lower_name \
                 ON flavor_tags (LOWER(name))",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlavorTags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FlavorTags {
    Table,
    Id,
    Name,
    Category,
    Description,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
    DeletedBy,
    DeletedAt,
}
