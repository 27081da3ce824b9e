use models::answer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{OptionBase, SurveyUserBase, Validate};
use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCreate {
    pub user_id: i32,
    pub option_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerUpdate {
    #[serde(default)]
    pub id: i32,
    pub user_id: i32,
    pub option_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerBase {
    pub id: i32,
    pub user_id: i32,
    pub option_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerExtended {
    pub id: i32,
    pub user_id: i32,
    pub option_id: i32,
    pub user: Option<SurveyUserBase>,
    pub option: Option<OptionBase>,
}

impl Validate for AnswerCreate {
    fn validate(&self) -> Result<(), ServiceError> {
        answer::validate_refs(self.user_id, self.option_id)?;
        Ok(())
    }
}

impl Validate for AnswerUpdate {
    fn validate(&self) -> Result<(), ServiceError> {
        answer::validate_refs(self.user_id, self.option_id)?;
        Ok(())
    }
}
