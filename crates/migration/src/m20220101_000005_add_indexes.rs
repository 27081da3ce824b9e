use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Option: lookup by parent question
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_option_question")
                    .table(QuestionOption::Table)
                    .col(QuestionOption::QuestionId)
                    .to_owned(),
            )
            .await?;

        // Answer: lookup by user, and by option for reverse navigation
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_answer_user")
                    .table(Answer::Table)
                    .col(Answer::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_answer_option")
                    .table(Answer::Table)
                    .col(Answer::OptionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_answer_option").table(Answer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_answer_user").table(Answer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_option_question").table(QuestionOption::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum QuestionOption {
    #[sea_orm(iden = "option")]
    Table,
    QuestionId,
}

#[derive(DeriveIden)]
enum Answer { Table, UserId, OptionId }
