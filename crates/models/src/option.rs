use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{answer, errors, question};

pub const TEXT_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    pub order: i32,
    /// Not checked against `question`; an orphaned option is a valid row.
    pub question_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Question,
    Answers,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Question => Entity::belongs_to(question::Entity)
                .from(Column::QuestionId)
                .to(question::Column::Id)
                .into(),
            Relation::Answers => Entity::has_many(answer::Entity).into(),
        }
    }
}

impl Related<question::Entity> for Entity {
    fn to() -> RelationDef { Relation::Question.def() }
}

impl Related<answer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Answers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_text(text: &str) -> Result<(), errors::ModelError> {
    errors::require_text("text", text, TEXT_MAX)
}

pub fn validate_question_id(question_id: i32) -> Result<(), errors::ModelError> {
    errors::require_ref("questionId", question_id)
}
