use models::question;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{OptionBase, Validate};
use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCreate {
    #[serde(default)]
    pub text: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdate {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub text: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBase {
    pub id: i32,
    pub text: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionExtended {
    pub id: i32,
    pub text: String,
    pub description: String,
    pub options: Vec<OptionBase>,
}

impl Validate for QuestionCreate {
    fn validate(&self) -> Result<(), ServiceError> {
        question::validate_text(&self.text)?;
        question::validate_description(&self.description)?;
        Ok(())
    }
}

impl Validate for QuestionUpdate {
    fn validate(&self) -> Result<(), ServiceError> {
        question::validate_text(&self.text)?;
        question::validate_description(&self.description)?;
        Ok(())
    }
}
