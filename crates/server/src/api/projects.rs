//! # Catalog API
//!
//! The gallery's data as JSON, filtered the same way the page filters it.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use folio_core::catalog::{filter_projects, selector_labels, Project, ALL_LABEL, CATALOG};

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    /// Selector label; absent means "All"
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub category: String,
    pub demo_link: String,
    pub source_link: String,
}

impl From<&Project> for ProjectEntry {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.to_string(),
            description: project.description.to_string(),
            image: project.image.to_string(),
            tags: project.tags.iter().map(|t| t.to_string()).collect(),
            category: project.category.label().to_string(),
            demo_link: project.demo_link.to_string(),
            source_link: project.source_link.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectsResponse {
    /// The label the list was filtered by
    pub category: String,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub labels: Vec<String>,
}

/// List projects, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "catalog",
    params(
        ("category" = Option<String>, Query, description = "Category label, \"All\" when omitted")
    ),
    responses(
        (status = 200, description = "Projects matching the category, in catalog order", body = ProjectsResponse)
    )
)]
pub async fn list_projects(Query(query): Query<ProjectsQuery>) -> Json<ProjectsResponse> {
    let category = query.category.unwrap_or_else(|| ALL_LABEL.to_string());
    let projects = filter_projects(CATALOG.iter(), &category)
        .into_iter()
        .map(ProjectEntry::from)
        .collect();
    Json(ProjectsResponse { category, projects })
}

/// Selector labels in display order
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Category selector labels", body = CategoriesResponse)
    )
)]
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        labels: selector_labels().into_iter().map(str::to_string).collect(),
    })
}
