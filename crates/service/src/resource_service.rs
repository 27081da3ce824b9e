use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, SqlErr,
};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::resource::Resource;
use crate::views::Keyed;

/// Read/insert/update/delete for one resource type.
///
/// Holds nothing but a pooled connection handle; build one per request.
/// Reads return detached values, so changing a returned view never reaches
/// storage. Updates are read-then-write with no version check: the last
/// writer wins.
pub struct ResourceService<R: Resource> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _resource: PhantomData } }

    /// Every row as a Base view, ordered by id. Empty when the table is.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get(&self) -> Result<Vec<R::Base>, ServiceError> {
        let rows = R::Entity::find().order_by_asc(R::id_column()).all(&self.db).await?;
        debug!(count = rows.len(), "listed");
        Ok(rows.iter().map(R::to_base).collect())
    }

    /// Extended view of one row, `None` when the id does not exist.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<R::Extended>, ServiceError> {
        let Some(model) = self.find(id).await? else {
            debug!(id, "no such row");
            return Ok(None);
        };
        Ok(Some(R::to_extended(&self.db, model).await?))
    }

    /// Extended views of every row whose `column` equals `value`.
    pub(crate) async fn get_by_column(
        &self,
        column: <R::Entity as EntityTrait>::Column,
        value: i32,
    ) -> Result<Vec<R::Extended>, ServiceError> {
        let rows = R::Entity::find()
            .filter(column.eq(value))
            .order_by_asc(R::id_column())
            .all(&self.db)
            .await?;
        debug!(resource = R::NAME, value, count = rows.len(), "listed by reference");
        let mut out = Vec::with_capacity(rows.len());
        for model in rows {
            out.push(R::to_extended(&self.db, model).await?);
        }
        Ok(out)
    }

    /// Persist a new row; the store assigns its id.
    ///
    /// Returns `Conflict` when the store reports that nothing was persisted.
    #[instrument(skip(self, view), fields(resource = R::NAME))]
    pub async fn insert(&self, view: R::Create) -> Result<R::Base, ServiceError> {
        let created = R::from_create(view)
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(R::NAME, e))?;
        let base = R::to_base(&created);
        info!(id = base.id(), "inserted");
        Ok(base)
    }

    /// Overwrite the mutable fields of an existing row.
    ///
    /// Returns `NotFound` when the id does not exist, including when the row
    /// disappears between the read and the write.
    #[instrument(skip(self, view), fields(resource = R::NAME, id = view.id()))]
    pub async fn update(&self, view: R::Update) -> Result<R::Base, ServiceError> {
        let Some(model) = self.find(view.id()).await? else {
            debug!("update target missing");
            return Err(ServiceError::not_found(R::NAME));
        };
        let mut active = model.into_active_model();
        R::apply_update(&mut active, view);
        let updated = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ServiceError::not_found(R::NAME),
            e => ServiceError::Db(e),
        })?;
        info!("updated");
        Ok(R::to_base(&updated))
    }

    /// Hard delete. `false` means there was nothing to delete.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&self.db)
            .await?;
        info!(rows_affected = res.rows_affected, "deleted");
        Ok(res.rows_affected > 0)
    }

    async fn find(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find().filter(R::id_column().eq(id)).one(&self.db).await
    }
}

fn insert_error(resource: &str, e: DbErr) -> ServiceError {
    if matches!(e, DbErr::RecordNotInserted)
        || matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    {
        return ServiceError::conflict(resource);
    }
    ServiceError::Db(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{Answers, Options, Questions, SurveyUsers};
    use crate::test_support::{get_db, get_seeded_db};
    use crate::views::*;
    use sea_orm::ConnectionTrait;

    fn question_create(description: &str) -> QuestionCreate {
        QuestionCreate { text: String::new(), description: description.into() }
    }

    #[tokio::test]
    async fn get_options_returns_all_seeded_rows() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Options>::new(get_seeded_db().await?);
        let all = svc.get().await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn get_on_empty_table_is_empty_not_error() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Answers>::new(get_db().await?);
        assert!(svc.get().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_returns_extended_or_none() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Options>::new(get_seeded_db().await?);
        let found = svc.get_by_id(1).await?.unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.question_description.as_deref(), Some("Question1"));
        assert!(svc.get_by_id(404).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_by_question_id_returns_matching_subset() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Options>::new(get_seeded_db().await?);

        let under_one = svc.get_by_question_id(1).await?;
        assert_eq!(under_one.len(), 1);
        assert!(under_one.iter().all(|o| o.question_id == 1));

        let under_two = svc.get_by_question_id(2).await?;
        assert_eq!(under_two.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2, 3]);

        assert!(svc.get_by_question_id(4).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn insert_then_get_by_id_round_trips() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Questions>::new(get_seeded_db().await?);
        let created = svc.insert(question_create("VisualStudio 2019")).await?;
        assert_ne!(created.id, 0);
        assert_eq!(created.description, "VisualStudio 2019");

        let fetched = svc.get_by_id(created.id).await?.unwrap();
        assert_eq!(fetched.id, created.id);
        assert!(fetched.options.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids_after_seed() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Options>::new(get_seeded_db().await?);
        let created = svc
            .insert(OptionCreate { text: "Mock".into(), order: 4, question_id: 3 })
            .await?;
        assert!(created.id > 3);
        assert_eq!(created.question_id, 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Questions>::new(get_db().await?);
        let created = svc.insert(question_create("VisualStudio 2019")).await?;

        let updated = svc
            .update(QuestionUpdate { id: created.id, text: String::new(), description: "X".into() })
            .await?;
        assert_eq!(updated, QuestionBase { id: created.id, text: String::new(), description: "X".into() });
        Ok(())
    }

    #[tokio::test]
    async fn update_may_point_option_at_missing_question() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Options>::new(get_seeded_db().await?);
        let updated = svc
            .update(OptionUpdate { id: 1, text: "Mock".into(), order: 2, question_id: 7 })
            .await?;
        assert_eq!((updated.id, updated.order, updated.question_id), (1, 2, 7));

        let extended = svc.get_by_id(1).await?.unwrap();
        assert_eq!(extended.question_description, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Options>::new(get_seeded_db().await?);
        let err = svc
            .update(OptionUpdate { id: 10, text: "Mock".into(), order: 1, question_id: 9 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref msg) if msg == "option not found"));
        // nothing was created under the requested id
        assert!(svc.get_by_id(10).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Questions>::new(get_seeded_db().await?);
        assert!(svc.delete(1).await?);
        assert!(svc.get_by_id(1).await?.is_none());
        assert!(!svc.delete(1).await?);
        assert!(!svc.delete(-5).await?);
        assert!(svc.get_by_id(-5).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_question_leaves_its_options() -> Result<(), anyhow::Error> {
        let db = get_seeded_db().await?;
        let questions = ResourceService::<Questions>::new(db.clone());
        let options = ResourceService::<Options>::new(db);

        assert!(questions.delete(2).await?);
        let orphans = options.get_by_question_id(2).await?;
        assert_eq!(orphans.len(), 2);
        assert!(orphans.iter().all(|o| o.question_description.is_none()));
        Ok(())
    }

    #[tokio::test]
    async fn question_extended_lists_exactly_its_options() -> Result<(), anyhow::Error> {
        let db = get_seeded_db().await?;
        let questions = ResourceService::<Questions>::new(db.clone());
        let options = ResourceService::<Options>::new(db);
        options.insert(OptionCreate { text: "first".into(), order: 0, question_id: 2 }).await?;

        let extended = questions.get_by_id(2).await?.unwrap();
        let children = options.get_by_question_id(2).await?;
        assert_eq!(extended.options.len(), children.len());
        let mut from_parent: Vec<i32> = extended.options.iter().map(|o| o.id).collect();
        let mut from_children: Vec<i32> = children.iter().map(|o| o.id).collect();
        // the parent view orders by position
        assert_eq!(extended.options[0].text, "first");
        from_parent.sort();
        from_children.sort();
        assert_eq!(from_parent, from_children);
        Ok(())
    }

    #[tokio::test]
    async fn answers_by_user_carry_user_and_option() -> Result<(), anyhow::Error> {
        let db = get_seeded_db().await?;
        let answers = ResourceService::<Answers>::new(db.clone());

        let given = answers.get_by_user_id(1).await?;
        assert_eq!(given.len(), 1);
        let only = &given[0];
        assert_eq!(only.user.as_ref().map(|u| u.first_name.as_str()), Some("Leo"));
        assert_eq!(only.option.as_ref().map(|o| o.text.as_str()), Some("Option1"));
        assert!(answers.get_by_user_id(2).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn survey_user_extended_lists_answers() -> Result<(), anyhow::Error> {
        let db = get_seeded_db().await?;
        let users = ResourceService::<SurveyUsers>::new(db.clone());
        let answers = ResourceService::<Answers>::new(db);
        answers.insert(AnswerCreate { user_id: 1, option_id: 3 }).await?;

        let user = users.get_by_id(1).await?.unwrap();
        assert_eq!(user.answers.iter().map(|a| a.option_id).collect::<Vec<_>>(), vec![1, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn survey_user_update_replaces_fields() -> Result<(), anyhow::Error> {
        let users = ResourceService::<SurveyUsers>::new(get_seeded_db().await?);
        let view = SurveyUserUpdate {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Petrova".into(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            gender: models::survey_user::Gender::Female,
            country: "BG".into(),
        };
        let updated = users.update(view.clone()).await?;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.first_name, view.first_name);
        assert_eq!(updated.gender, view.gender);
        assert_eq!(updated.date_of_birth, view.date_of_birth);
        Ok(())
    }

    #[tokio::test]
    async fn returned_views_are_detached() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Questions>::new(get_seeded_db().await?);
        let mut snapshot = svc.get_by_id(1).await?.unwrap();
        snapshot.description = "edited locally".into();
        let again = svc.get_by_id(1).await?.unwrap();
        assert_eq!(again.description, "Question1");
        Ok(())
    }

    #[tokio::test]
    async fn insert_rejected_by_unique_index_is_a_conflict() -> Result<(), anyhow::Error> {
        let db = get_seeded_db().await?;
        db.execute_unprepared("CREATE UNIQUE INDEX ux_question_description ON question (description)")
            .await?;
        let svc = ResourceService::<Questions>::new(db);

        let err = svc.insert(question_create("Question1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref msg) if msg == "question was not persisted"));
        assert_eq!(svc.get().await?.len(), 4);

        let fresh = svc.insert(question_create("Question5")).await?;
        assert_eq!(fresh.id, 5);
        Ok(())
    }
}
