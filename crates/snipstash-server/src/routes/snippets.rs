use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use snipstash_core::models::snippet::{NewSnippet, Snippet};
use snipstash_store::query::SnippetFilter;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_snippets(
    State(state): State<AppState>,
) -> Result<Json<Vec<Snippet>>, ApiError> {
    let snippets = state.store.list_all().await?;
    Ok(Json(snippets))
}

pub async fn create_snippet(
    State(state): State<AppState>,
    Json(new): Json<NewSnippet>,
) -> Result<(StatusCode, Json<Snippet>), ApiError> {
    let snippet = state.store.create(new).await?;
    Ok((StatusCode::CREATED, Json(snippet)))
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

pub async fn search_snippets(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Snippet>>, ApiError> {
    let filter = SnippetFilter::new(params.q, params.category, params.language);
    let snippets = state.store.search(&filter).await?;
    Ok(Json(snippets))
}
