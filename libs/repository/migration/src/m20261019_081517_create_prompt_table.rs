use sea_orm_migration::prelude::*;

use crate::m20261019_081502_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prompt::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prompt::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prompt::Title).string().not_null())
                    .col(ColumnDef::new(Prompt::Content).text().not_null())
                    .col(ColumnDef::new(Prompt::Tags).json().not_null())
                    .col(ColumnDef::new(Prompt::ProjectId).integer().null())
                    .col(
                        ColumnDef::new(Prompt::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    // prompts of a removed project become unassigned
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_prompt_project_id")
                            .from(Prompt::Table, Prompt::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prompt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prompt {
    Table,
    Id,
    Title,
    Content,
    Tags,
    ProjectId,
    CreatedAt,
}
