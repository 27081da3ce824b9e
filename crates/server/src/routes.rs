pub mod resources;

use axum::{routing::get, Json, Router};
use common::types::Health;
use service::{Answers, Options, Questions, SurveyUsers};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::endpoint::{collection_path, Endpoint};
use crate::openapi;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// List, lookup, create, update and delete routes for one resource.
fn resource_routes<R: Endpoint>() -> Router<AppState> {
    let collection = collection_path::<R>();
    let item = format!("{collection}/:id");
    Router::new()
        .route(&collection, get(resources::list::<R>).post(resources::create::<R>))
        .route(
            &item,
            get(resources::get_by_id::<R>)
                .put(resources::update::<R>)
                .delete(resources::delete::<R>),
        )
}

/// Build the full application router: survey API, health and API docs.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(resource_routes::<Questions>())
        .merge(resource_routes::<Options>())
        .merge(resource_routes::<Answers>())
        .merge(resource_routes::<SurveyUsers>())
        .route("/api/Options/question/:id", get(resources::options_by_question))
        .route("/api/Answers/user/:id", get(resources::answers_by_user));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::api_doc()))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
