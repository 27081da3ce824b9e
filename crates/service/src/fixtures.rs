//! Fixed seed data for SQLite test stores.
//!
//! Rows are written with explicit ids through the Base -> Entity mapping, so
//! this must not be run against a store whose id sequence is already in use.

use chrono::NaiveDate;
use models::{answer, option, question, survey_user, survey_user::Gender};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::projection::{Answers, Options, Questions, SurveyUsers};
use crate::resource::Resource;
use crate::views::{AnswerBase, OptionBase, QuestionBase, SurveyUserBase};

/// Questions 1..=4 (`Question1`..`Question4`).
pub fn questions() -> Vec<QuestionBase> {
    (1..=4)
        .map(|i| QuestionBase { id: i, text: format!("Text{i}"), description: format!("Question{i}") })
        .collect()
}

/// Options 1..=3 (`Option1`..`Option3`); option 1 belongs to question 1,
/// options 2 and 3 to question 2.
pub fn options() -> Vec<OptionBase> {
    vec![
        OptionBase { id: 1, text: "Option1".into(), order: 1, question_id: 1 },
        OptionBase { id: 2, text: "Option2".into(), order: 1, question_id: 2 },
        OptionBase { id: 3, text: "Option3".into(), order: 2, question_id: 2 },
    ]
}

pub fn survey_users() -> Vec<SurveyUserBase> {
    vec![SurveyUserBase {
        id: 1,
        first_name: "Leo".into(),
        last_name: "Konstantinovski".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 14).unwrap_or_default(),
        gender: Gender::Male,
        country: "MK".into(),
    }]
}

/// User 1 picked option 1.
pub fn answers() -> Vec<AnswerBase> {
    vec![AnswerBase { id: 1, user_id: 1, option_id: 1 }]
}

pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    question::Entity::insert_many(questions().into_iter().map(Questions::from_base)).exec(db).await?;
    option::Entity::insert_many(options().into_iter().map(Options::from_base)).exec(db).await?;
    survey_user::Entity::insert_many(survey_users().into_iter().map(SurveyUsers::from_base)).exec(db).await?;
    answer::Entity::insert_many(answers().into_iter().map(Answers::from_base)).exec(db).await?;
    Ok(())
}
