use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use snipstash_highlight::DEFAULT_THEME;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HighlightRequest {
    pub code: String,
    pub language: String,
    pub theme: Option<String>,
}

#[derive(Serialize)]
pub struct HighlightResponse {
    pub highlighted_code: String,
    pub css: String,
}

/// Render a snippet through the highlighting engine.
pub async fn highlight_code(
    State(state): State<AppState>,
    Json(req): Json<HighlightRequest>,
) -> Result<Json<HighlightResponse>, ApiError> {
    let theme = req.theme.as_deref().unwrap_or(DEFAULT_THEME);
    let out = state
        .highlighter
        .highlight(&req.code, &req.language, theme)?;

    Ok(Json(HighlightResponse {
        highlighted_code: out.html,
        css: out.css,
    }))
}
