use async_trait::async_trait;
use models::{answer, option, survey_user};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, DbErr, ModelTrait, Set};

use super::{Options, SurveyUsers};
use crate::errors::ServiceError;
use crate::resource::Resource;
use crate::resource_service::ResourceService;
use crate::views::{AnswerBase, AnswerCreate, AnswerExtended, AnswerUpdate};

pub struct Answers;

#[async_trait]
impl Resource for Answers {
    type Entity = answer::Entity;
    type Model = answer::Model;
    type ActiveModel = answer::ActiveModel;
    type Create = AnswerCreate;
    type Update = AnswerUpdate;
    type Base = AnswerBase;
    type Extended = AnswerExtended;

    const NAME: &'static str = "answer";

    fn id_column() -> answer::Column { answer::Column::Id }

    fn to_base(model: &answer::Model) -> AnswerBase {
        let answer::Model { id, user_id, option_id } = model;
        AnswerBase { id: *id, user_id: *user_id, option_id: *option_id }
    }

    fn from_base(view: AnswerBase) -> answer::ActiveModel {
        let AnswerBase { id, user_id, option_id } = view;
        answer::ActiveModel { id: Set(id), user_id: Set(user_id), option_id: Set(option_id) }
    }

    fn from_create(view: AnswerCreate) -> answer::ActiveModel {
        let AnswerCreate { user_id, option_id } = view;
        answer::ActiveModel { id: NotSet, user_id: Set(user_id), option_id: Set(option_id) }
    }

    fn apply_update(active: &mut answer::ActiveModel, view: AnswerUpdate) {
        let AnswerUpdate { id: _, user_id, option_id } = view;
        active.user_id = Set(user_id);
        active.option_id = Set(option_id);
    }

    async fn to_extended(db: &DatabaseConnection, model: answer::Model) -> Result<AnswerExtended, DbErr> {
        let user = model.find_related(survey_user::Entity).one(db).await?;
        let picked = model.find_related(option::Entity).one(db).await?;
        let answer::Model { id, user_id, option_id } = model;
        Ok(AnswerExtended {
            id,
            user_id,
            option_id,
            user: user.as_ref().map(SurveyUsers::to_base),
            option: picked.as_ref().map(Options::to_base),
        })
    }
}

impl ResourceService<Answers> {
    /// Answers given by one survey user; empty when there are none.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<AnswerExtended>, ServiceError> {
        self.get_by_column(answer::Column::UserId, user_id).await
    }
}
