use models::option;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Validate};
use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionCreate {
    pub text: String,
    #[serde(default)]
    pub order: i32,
    pub question_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionUpdate {
    #[serde(default)]
    pub id: i32,
    pub text: String,
    #[serde(default)]
    pub order: i32,
    pub question_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionBase {
    pub id: i32,
    pub text: String,
    pub order: i32,
    pub question_id: i32,
}

/// Option plus the description of the question it belongs to.
/// `question_description` is `None` when the question row does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionExtended {
    pub id: i32,
    pub text: String,
    pub order: i32,
    pub question_id: i32,
    pub question_description: Option<String>,
}

impl Validate for OptionCreate {
    fn validate(&self) -> Result<(), ServiceError> {
        option::validate_text(&self.text)?;
        option::validate_question_id(self.question_id)?;
        Ok(())
    }
}

impl Validate for OptionUpdate {
    fn validate(&self) -> Result<(), ServiceError> {
        option::validate_text(&self.text)?;
        option::validate_question_id(self.question_id)?;
        Ok(())
    }
}
