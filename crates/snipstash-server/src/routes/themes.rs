use axum::Json;
use axum::extract::State;

use crate::state::AppState;

pub async fn list_themes(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.highlighter.themes())
}
