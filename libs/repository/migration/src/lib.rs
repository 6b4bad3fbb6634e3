pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_category_table;
mod m20261016_000002_create_post_table;
mod m20261016_000003_create_video_table;
mod m20261016_000004_create_admin_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_category_table::Migration),
            Box::new(m20261016_000002_create_post_table::Migration),
            Box::new(m20261016_000003_create_video_table::Migration),
            Box::new(m20261016_000004_create_admin_table::Migration),
        ]
    }
}
