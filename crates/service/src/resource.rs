use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::views::{Keyed, UpdateView, Validate};

/// Binds one survey entity to its four views and the projection rules between them.
///
/// Implementations map fields by exhaustive destructuring, so a column added
/// to an entity without a matching projection fails to build.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;

    type Create: Validate + DeserializeOwned + Send + 'static;
    type Update: UpdateView + Validate + DeserializeOwned + Send + 'static;
    type Base: Keyed + Serialize + Send + 'static;
    type Extended: Keyed + Serialize + Send + 'static;

    /// Singular name used in logs and error messages.
    const NAME: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Entity -> Base.
    fn to_base(model: &Self::Model) -> Self::Base;

    /// Base -> Entity, id included.
    fn from_base(view: Self::Base) -> Self::ActiveModel;

    /// Create -> Entity. The id stays unset so the store assigns it.
    fn from_create(view: Self::Create) -> Self::ActiveModel;

    /// Overlay the mutable fields of an Update view. The id is never touched.
    fn apply_update(active: &mut Self::ActiveModel, view: Self::Update);

    /// Entity -> Extended. Related rows are read, never written.
    async fn to_extended(db: &DatabaseConnection, model: Self::Model) -> Result<Self::Extended, DbErr>;
}
