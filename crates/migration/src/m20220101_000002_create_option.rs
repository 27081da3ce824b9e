//! Create `option` table.
//!
//! `question_id` points at `question.id` but carries no FK constraint;
//! options may outlive or predate their question.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuestionOption::Table)
                    .if_not_exists()
                    .col(pk_auto(QuestionOption::Id))
                    .col(string_len(QuestionOption::Text, 255).not_null())
                    .col(integer(QuestionOption::Order).not_null().default(0))
                    .col(integer(QuestionOption::QuestionId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(QuestionOption::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum QuestionOption {
    #[sea_orm(iden = "option")]
    Table,
    Id,
    Text,
    Order,
    QuestionId,
}
