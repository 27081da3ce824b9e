//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_question;
mod m20220101_000002_create_option;
mod m20220101_000003_create_survey_user;
mod m20220101_000004_create_answer;
mod m20220101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_question::Migration),
            Box::new(m20220101_000002_create_option::Migration),
            Box::new(m20220101_000003_create_survey_user::Migration),
            Box::new(m20220101_000004_create_answer::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000005_add_indexes::Migration),
        ]
    }
}
