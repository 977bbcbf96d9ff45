use sea_orm_migration::prelude::*;

mod m20250901_000001_create_enums;
mod m20250901_000002_create_roasters;
mod m20250901_000003_create_flavor_tags;
mod m20250901_000004_create_coffees;
mod m20250901_000005_create_coffee_flavors;
mod m20250901_000006_create_tasting_sessions;
mod m20250901_000007_create_tasting_notes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_enums::Migration),
            Box::new(m20250901_000002_create_roasters::Migration),
            Box::new(m20250901_000003_create_flavor_tags::Migration),
            Box::new(m20250901_000004_create_coffees::Migration),
            Box::new(m20250901_000005_create_coffee_flavors::Migration),
            Box::new(m20250901_000006_create_tasting_sessions::Migration),
            Box::new(m20250901_000007_create_tasting_notes::Migration),
        ]
    }
}
