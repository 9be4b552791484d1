use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    snippets: i64,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Health>, ApiError> {
    let snippets = state.store.count().await?;
    Ok(Json(Health {
        status: "ok",
        snippets,
    }))
}
