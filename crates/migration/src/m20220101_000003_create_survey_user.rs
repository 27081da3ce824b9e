//! Create `survey_user` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyUser::Id))
                    .col(string_len(SurveyUser::FirstName, 128).not_null())
                    .col(string_len(SurveyUser::LastName, 128).not_null())
                    .col(date(SurveyUser::DateOfBirth).not_null())
                    // 0 = male, 1 = female, 2 = other
                    .col(integer(SurveyUser::Gender).not_null())
                    .col(string_len(SurveyUser::Country, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SurveyUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SurveyUser { Table, Id, FirstName, LastName, DateOfBirth, Gender, Country }
