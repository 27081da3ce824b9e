use async_trait::async_trait;
use models::{option, question};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, DbErr, ModelTrait, Set};

use crate::resource::Resource;
use crate::resource_service::ResourceService;
use crate::errors::ServiceError;
use crate::views::{OptionBase, OptionCreate, OptionExtended, OptionUpdate};

pub struct Options;

#[async_trait]
impl Resource for Options {
    type Entity = option::Entity;
    type Model = option::Model;
    type ActiveModel = option::ActiveModel;
    type Create = OptionCreate;
    type Update = OptionUpdate;
    type Base = OptionBase;
    type Extended = OptionExtended;

    const NAME: &'static str = "option";

    fn id_column() -> option::Column { option::Column::Id }

    fn to_base(model: &option::Model) -> OptionBase {
        let option::Model { id, text, order, question_id } = model;
        OptionBase { id: *id, text: text.clone(), order: *order, question_id: *question_id }
    }

    fn from_base(view: OptionBase) -> option::ActiveModel {
        let OptionBase { id, text, order, question_id } = view;
        option::ActiveModel { id: Set(id), text: Set(text), order: Set(order), question_id: Set(question_id) }
    }

    fn from_create(view: OptionCreate) -> option::ActiveModel {
        let OptionCreate { text, order, question_id } = view;
        option::ActiveModel { id: NotSet, text: Set(text), order: Set(order), question_id: Set(question_id) }
    }

    fn apply_update(active: &mut option::ActiveModel, view: OptionUpdate) {
        let OptionUpdate { id: _, text, order, question_id } = view;
        active.text = Set(text);
        active.order = Set(order);
        active.question_id = Set(question_id);
    }

    async fn to_extended(db: &DatabaseConnection, model: option::Model) -> Result<OptionExtended, DbErr> {
        let question_description = model
            .find_related(question::Entity)
            .one(db)
            .await?
            .map(|q| q.description);
        let option::Model { id, text, order, question_id } = model;
        Ok(OptionExtended { id, text, order, question_id, question_description })
    }
}

impl ResourceService<Options> {
    /// Options whose `question_id` matches; empty when there are none.
    pub async fn get_by_question_id(&self, question_id: i32) -> Result<Vec<OptionExtended>, ServiceError> {
        self.get_by_column(option::Column::QuestionId, question_id).await
    }
}
