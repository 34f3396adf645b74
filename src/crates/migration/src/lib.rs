pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_catalog_domain;
mod m20240101_000002_create_stats_domain;
mod m20240101_000003_seed_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_catalog_domain::Migration),
            Box::new(m20240101_000002_create_stats_domain::Migration),
            Box::new(m20240101_000003_seed_data::Migration),
        ]
    }
}
