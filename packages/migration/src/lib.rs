pub use sea_orm_migration::prelude::*;

mod m20220516_000001_create_catalog_schema;
mod m20220516_000002_add_ownership_and_geography;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220516_000001_create_catalog_schema::Migration),
            Box::new(m20220516_000002_add_ownership_and_geography::Migration),
        ]
    }
}
