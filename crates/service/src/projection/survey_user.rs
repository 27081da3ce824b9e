use async_trait::async_trait;
use models::{answer, survey_user};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, DbErr, ModelTrait, QueryOrder, Set};

use super::Answers;
use crate::resource::Resource;
use crate::views::{SurveyUserBase, SurveyUserCreate, SurveyUserExtended, SurveyUserUpdate};

pub struct SurveyUsers;

#[async_trait]
impl Resource for SurveyUsers {
    type Entity = survey_user::Entity;
    type Model = survey_user::Model;
    type ActiveModel = survey_user::ActiveModel;
    type Create = SurveyUserCreate;
    type Update = SurveyUserUpdate;
    type Base = SurveyUserBase;
    type Extended = SurveyUserExtended;

    const NAME: &'static str = "survey_user";

    fn id_column() -> survey_user::Column { survey_user::Column::Id }

    fn to_base(model: &survey_user::Model) -> SurveyUserBase {
        let survey_user::Model { id, first_name, last_name, date_of_birth, gender, country } = model;
        SurveyUserBase {
            id: *id,
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            date_of_birth: *date_of_birth,
            gender: *gender,
            country: country.clone(),
        }
    }

    fn from_base(view: SurveyUserBase) -> survey_user::ActiveModel {
        let SurveyUserBase { id, first_name, last_name, date_of_birth, gender, country } = view;
        survey_user::ActiveModel {
            id: Set(id),
            first_name: Set(first_name),
            last_name: Set(last_name),
            date_of_birth: Set(date_of_birth),
            gender: Set(gender),
            country: Set(country),
        }
    }

    fn from_create(view: SurveyUserCreate) -> survey_user::ActiveModel {
        let SurveyUserCreate { first_name, last_name, date_of_birth, gender, country } = view;
        survey_user::ActiveModel {
            id: NotSet,
            first_name: Set(first_name),
            last_name: Set(last_name),
            date_of_birth: Set(date_of_birth),
            gender: Set(gender),
            country: Set(country),
        }
    }

    fn apply_update(active: &mut survey_user::ActiveModel, view: SurveyUserUpdate) {
        let SurveyUserUpdate { id: _, first_name, last_name, date_of_birth, gender, country } = view;
        active.first_name = Set(first_name);
        active.last_name = Set(last_name);
        active.date_of_birth = Set(date_of_birth);
        active.gender = Set(gender);
        active.country = Set(country);
    }

    async fn to_extended(db: &DatabaseConnection, model: survey_user::Model) -> Result<SurveyUserExtended, DbErr> {
        let answers = model
            .find_related(answer::Entity)
            .order_by_asc(answer::Column::Id)
            .all(db)
            .await?;
        let survey_user::Model { id, first_name, last_name, date_of_birth, gender, country } = model;
        Ok(SurveyUserExtended {
            id,
            first_name,
            last_name,
            date_of_birth,
            gender,
            country,
            answers: answers.iter().map(Answers::to_base).collect(),
        })
    }
}
