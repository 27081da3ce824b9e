use async_trait::async_trait;
use models::{option, question};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, DbErr, ModelTrait, QueryOrder, Set};

use super::Options;
use crate::resource::Resource;
use crate::views::{QuestionBase, QuestionCreate, QuestionExtended, QuestionUpdate};

pub struct Questions;

#[async_trait]
impl Resource for Questions {
    type Entity = question::Entity;
    type Model = question::Model;
    type ActiveModel = question::ActiveModel;
    type Create = QuestionCreate;
    type Update = QuestionUpdate;
    type Base = QuestionBase;
    type Extended = QuestionExtended;

    const NAME: &'static str = "question";

    fn id_column() -> question::Column { question::Column::Id }

    fn to_base(model: &question::Model) -> QuestionBase {
        let question::Model { id, text, description } = model;
        QuestionBase { id: *id, text: text.clone(), description: description.clone() }
    }

    fn from_base(view: QuestionBase) -> question::ActiveModel {
        let QuestionBase { id, text, description } = view;
        question::ActiveModel { id: Set(id), text: Set(text), description: Set(description) }
    }

    fn from_create(view: QuestionCreate) -> question::ActiveModel {
        let QuestionCreate { text, description } = view;
        question::ActiveModel { id: NotSet, text: Set(text), description: Set(description) }
    }

    fn apply_update(active: &mut question::ActiveModel, view: QuestionUpdate) {
        let QuestionUpdate { id: _, text, description } = view;
        active.text = Set(text);
        active.description = Set(description);
    }

    async fn to_extended(db: &DatabaseConnection, model: question::Model) -> Result<QuestionExtended, DbErr> {
        let options = model
            .find_related(option::Entity)
            .order_by_asc(option::Column::Order)
            .order_by_asc(option::Column::Id)
            .all(db)
            .await?;
        let question::Model { id, text, description } = model;
        Ok(QuestionExtended {
            id,
            text,
            description,
            options: options.iter().map(Options::to_base).collect(),
        })
    }
}
