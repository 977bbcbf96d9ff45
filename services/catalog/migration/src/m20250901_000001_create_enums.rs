use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("processing_method_enum"))
                    .values([
                        Alias::new("washed"),
                        Alias::new("natural"),
                        Alias::new("honey"),
                        Alias::new("semi_washed"),
                        Alias::new("wet_hulled"),
                        Alias::new("carbonic_maceration"),
                        Alias::new("other"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("roast_level_enum"))
                    .values([
                        Alias::new("light"),
                        Alias::new("medium_light"),
                        Alias::new("medium"),
                        Alias::new("medium_dark"),
                        Alias::new("dark"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("brew_method_enum"))
                    .values([
                        Alias::new("pour_over"),
                        Alias::new("french_press"),
                        Alias::new("espresso"),
                        Alias::new("aeropress"),
                        Alias::new("chemex"),
                        Alias::new("v60"),
                        Alias::new("kalita"),
                        Alias::new("siphon"),
                        Alias::new("cold_brew"),
                        Alias::new("moka_pot"),
                        Alias::new("drip"),
                        Alias::new("other"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("grind_size_enum"))
                    .values([
                        Alias::new("extra_fine"),
                        Alias::new("fine"),
                        Alias::new("medium_fine"),
                        Alias::new("medium"),
                        Alias::new("medium_coarse"),
                        Alias::new("coarse"),
                        Alias::new("extra_coarse"),
                    ])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "grind_size_enum",
            "brew_method_enum",
            "roast_level_enum",
            "processing_method_enum",
        ] {
            manager
                .drop_type(Type::drop().name(Alias::new(name)).to_owned())
                .await?;
        }
        Ok(())
    }
}
