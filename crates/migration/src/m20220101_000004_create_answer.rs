//! Create `answer` table: one user's pick of one option.
//!
//! Like `option.question_id`, the references are plain integers.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Answer::Table)
                    .if_not_exists()
                    .col(pk_auto(Answer::Id))
                    .col(integer(Answer::UserId).not_null())
                    .col(integer(Answer::OptionId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Answer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Answer { Table, Id, UserId, OptionId }
