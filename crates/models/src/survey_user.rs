use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{answer, errors};

pub const NAME_MAX: usize = 128;
pub const COUNTRY_MAX: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Gender {
    #[sea_orm(num_value = 0)]
    Male,
    #[sea_orm(num_value = 1)]
    Female,
    #[sea_orm(num_value = 2)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "survey_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub gender: Gender,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Answers,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Answers => Entity::has_many(answer::Entity).into(),
        }
    }
}

impl Related<answer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Answers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(field: &str, name: &str) -> Result<(), errors::ModelError> {
    errors::require_text(field, name, NAME_MAX)
}

pub fn validate_country(country: &str) -> Result<(), errors::ModelError> {
    errors::require_text("country", country, COUNTRY_MAX)
}

pub fn validate_date_of_birth(date_of_birth: NaiveDate, today: NaiveDate) -> Result<(), errors::ModelError> {
    if date_of_birth > today {
        return Err(errors::ModelError::Validation("dateOfBirth cannot be in the future".into()));
    }
    Ok(())
}
