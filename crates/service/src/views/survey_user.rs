use chrono::{NaiveDate, Utc};
use models::survey_user::{self, Gender};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AnswerBase, Validate};
use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyUserUpdate {
    #[serde(default)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyUserBase {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyUserExtended {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub country: String,
    pub answers: Vec<AnswerBase>,
}

fn validate_person(first_name: &str, last_name: &str, date_of_birth: NaiveDate, country: &str) -> Result<(), ServiceError> {
    survey_user::validate_name("firstName", first_name)?;
    survey_user::validate_name("lastName", last_name)?;
    survey_user::validate_date_of_birth(date_of_birth, Utc::now().date_naive())?;
    survey_user::validate_country(country)?;
    Ok(())
}

impl Validate for SurveyUserCreate {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_person(&self.first_name, &self.last_name, self.date_of_birth, &self.country)
    }
}

impl Validate for SurveyUserUpdate {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_person(&self.first_name, &self.last_name, self.date_of_birth, &self.country)
    }
}
