use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TastingNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TastingNotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::TastingSessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TastingNotes::FlavorTagId).uuid().not_null())
                    .col(ColumnDef::new(TastingNotes::Intensity).integer())
                    .col(ColumnDef::new(TastingNotes::Notes).text())
                    .col(
                        ColumnDef::new(TastingNotes::Aroma)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::Flavor)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::Aftertaste)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TastingNotes::CreatedBy).string())
                    .col(ColumnDef::new(TastingNotes::UpdatedBy).string())
                    .col(ColumnDef::new(TastingNotes::DeletedBy).string())
                    .col(ColumnDef::new(TastingNotes::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TastingNotes::Table, TastingNotes::TastingSessionId)
                            .to(TastingSessions::Table, TastingSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TastingNotes::Table, TastingNotes::FlavorTagId)
                            .to(FlavorTags::Table, FlavorTags::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(TastingNotes::Table)
                    .col(TastingNotes::TastingSessionId)
                    .name("idx_tasting_notes_session_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(TastingNotes::Table)
                    .col(TastingNotes::FlavorTagId)
                    .name("idx_tasting_notes_flavor_tag_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TastingNotes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TastingNotes {
    Table,
    Id,
    TastingSessionId,
    FlavorTagId,
    Intensity,
    Notes,
    Aroma,
    Flavor,
    Aftertaste,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
    DeletedBy,
    DeletedAt,
}

#[derive(Iden)]
enum TastingSessions {
    Table,
    Id,
}

#[derive(Iden)]
enum FlavorTags {
    Table,
    Id,
}
