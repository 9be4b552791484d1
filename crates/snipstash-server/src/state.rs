use std::sync::Arc;

use snipstash_highlight::Highlighter;
use snipstash_store::snippets::SnippetStore;

/// Shared application state, injected into all route handlers via Axum
/// state. Constructed once at startup; nothing here is a process global.
#[derive(Clone)]
pub struct AppState {
    pub store: SnippetStore,
    pub highlighter: Arc<Highlighter>,
}
