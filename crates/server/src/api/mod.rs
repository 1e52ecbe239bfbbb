//! # JSON API
//!
//! Read-only catalog endpoints and their OpenAPI document.

pub mod projects;

use axum::{
    body::Body,
    http::{header, Response},
    response::IntoResponse,
    routing::get,
    Router,
};
use utoipa::OpenApi;

use crate::SharedState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "Read-only access to the portfolio project catalog"
    ),
    paths(projects::list_projects, projects::list_categories),
    components(schemas(
        projects::ProjectEntry,
        projects::ProjectsResponse,
        projects::CategoriesResponse
    )),
    tags((name = "catalog", description = "Project catalog"))
)]
pub struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(spec))
        .unwrap_or_default()
}

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/categories", get(projects::list_categories))
        .route("/openapi.json", get(serve_openapi))
}
