use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, option, survey_user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "answer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub option_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SurveyUser,
    Option,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SurveyUser => Entity::belongs_to(survey_user::Entity)
                .from(Column::UserId)
                .to(survey_user::Column::Id)
                .into(),
            Relation::Option => Entity::belongs_to(option::Entity)
                .from(Column::OptionId)
                .to(option::Column::Id)
                .into(),
        }
    }
}

impl Related<survey_user::Entity> for Entity {
    fn to() -> RelationDef { Relation::SurveyUser.def() }
}

impl Related<option::Entity> for Entity {
    fn to() -> RelationDef { Relation::Option.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_refs(user_id: i32, option_id: i32) -> Result<(), errors::ModelError> {
    errors::require_ref("userId", user_id)?;
    errors::require_ref("optionId", option_id)
}
