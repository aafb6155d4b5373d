pub use sea_orm_migration::prelude::*;

mod m20250310_092412_init;
mod m20250311_143055_seed_test_data;
mod seeder;
mod seeder_consts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_092412_init::Migration),
            Box::new(m20250311_143055_seed_test_data::Migration),
        ]
    }
}
