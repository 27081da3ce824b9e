//! Generic CRUD handlers, instantiated once per survey resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use service::views::{Keyed, UpdateView, Validate};
use service::{Answers, Options, ResourceService};
use tracing::{debug, info};

use crate::endpoint::{item_path, Endpoint};
use crate::errors::JsonApiError;
use crate::state::AppState;

type HandlerResult = Result<Response, JsonApiError>;

fn no_content() -> Response { StatusCode::NO_CONTENT.into_response() }

/// `GET /api/{Resource}`: Base views, 204 when there are none.
pub async fn list<R: Endpoint>(State(state): State<AppState>) -> HandlerResult {
    let rows = ResourceService::<R>::new(state.db).get().await?;
    if rows.is_empty() {
        return Ok(no_content());
    }
    Ok(Json(rows).into_response())
}

/// `GET /api/{Resource}/:id`: Extended view, 204 when absent.
pub async fn get_by_id<R: Endpoint>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult {
    let Path(id) = id?;
    match ResourceService::<R>::new(state.db).get_by_id(id).await? {
        Some(view) => Ok(Json(view).into_response()),
        None => {
            debug!(resource = R::PATH, id, "lookup miss");
            Ok(no_content())
        }
    }
}

/// `POST /api/{Resource}`: 201 with `Location`.
pub async fn create<R: Endpoint>(
    State(state): State<AppState>,
    body: Result<Json<R::Create>, JsonRejection>,
) -> HandlerResult {
    let Json(view) = body?;
    view.validate()?;
    let base = ResourceService::<R>::new(state.db).insert(view).await?;
    let location = item_path::<R>(base.id());
    info!(resource = R::PATH, %location, "created");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(R::created_body(base))).into_response())
}

/// `PUT /api/{Resource}/:id`: the path id wins over any id in the body.
/// An unknown id yields 204 and creates nothing.
pub async fn update<R: Endpoint>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<R::Update>, JsonRejection>,
) -> HandlerResult {
    let Path(id) = id?;
    let Json(mut view) = body?;
    view.set_id(id);
    view.validate()?;
    match ResourceService::<R>::new(state.db).update(view).await {
        Ok(base) => Ok(Json(base).into_response()),
        Err(ServiceError::NotFound(_)) => Ok(no_content()),
        Err(e) => Err(e.into()),
    }
}

/// `DELETE /api/{Resource}/:id`: `true` when a row was removed.
pub async fn delete<R: Endpoint>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult {
    let Path(id) = id?;
    let removed = ResourceService::<R>::new(state.db).delete(id).await?;
    Ok(Json(removed).into_response())
}

/// `GET /api/Options/question/:id`
pub async fn options_by_question(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult {
    let Path(id) = id?;
    let rows = ResourceService::<Options>::new(state.db).get_by_question_id(id).await?;
    Ok(Json(rows).into_response())
}

/// `GET /api/Answers/user/:id`
pub async fn answers_by_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult {
    let Path(id) = id?;
    let rows = ResourceService::<Answers>::new(state.db).get_by_user_id(id).await?;
    Ok(Json(rows).into_response())
}
