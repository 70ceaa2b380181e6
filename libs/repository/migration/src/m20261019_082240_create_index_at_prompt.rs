use sea_orm_migration::prelude::*;

use crate::m20261019_081517_create_prompt_table::Prompt;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Prompt::Table)
                    .name("idx_prompt_created_at")
                    .if_not_exists()
                    .col(Prompt::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Prompt::Table)
                    .name("idx_prompt_created_at")
                    .to_owned(),
            )
            .await
    }
}
