use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, option};

pub const TEXT_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Options,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Options => Entity::has_many(option::Entity).into(),
        }
    }
}

impl Related<option::Entity> for Entity {
    fn to() -> RelationDef { Relation::Options.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// The label is optional; when given it must fit the column.
pub fn validate_text(text: &str) -> Result<(), errors::ModelError> {
    if text.chars().count() > TEXT_MAX {
        return Err(errors::ModelError::Validation(format!("text must be at most {TEXT_MAX} characters")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    errors::require_text("description", description, DESCRIPTION_MAX)
}
