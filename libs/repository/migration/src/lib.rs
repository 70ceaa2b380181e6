pub use sea_orm_migration::prelude::*;

mod m20261019_081502_create_project_table;
mod m20261019_081517_create_prompt_table;
mod m20261019_082240_create_index_at_prompt;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_081502_create_project_table::Migration),
            Box::new(m20261019_081517_create_prompt_table::Migration),
            Box::new(m20261019_082240_create_index_at_prompt::Migration),
        ]
    }
}
