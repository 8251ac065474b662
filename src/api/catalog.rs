//! Navigation and sitemap endpoints backed by the tool catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Deserialize;

use crate::catalog::{Category, ToolEntry};

use super::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Restrict the listing to one category.
    pub category: Option<Category>,
}

/// GET /api/catalog - list tools for navigation, optionally filtered by
/// `?category=`.
pub async fn list_tools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<ToolEntry>> {
    let entries = match query.category {
        Some(category) => state
            .catalog
            .by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.entries().to_vec(),
    };
    Json(entries)
}

/// GET /api/catalog/:slug - one tool's metadata.
pub async fn get_tool(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ToolEntry>, (StatusCode, String)> {
    state
        .catalog
        .get(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Tool {} not found", slug)))
}

/// GET /sitemap.xml - one entry per tool page.
pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let xml = state.catalog.sitemap_xml(&state.config.public_base_url);
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
