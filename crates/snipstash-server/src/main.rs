use std::env;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use snipstash_highlight::Highlighter;
use snipstash_server::router;
use snipstash_server::state::AppState;
use snipstash_store::db::Db;
use snipstash_store::snippets::SnippetStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_path = env::var("SNIPSTASH_DB").unwrap_or_else(|_| "snippets.db".to_string());
    let addr = env::var("SNIPSTASH_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let db = Db::open(Path::new(&db_path))?;
    let state = AppState {
        store: SnippetStore::new(db),
        highlighter: Arc::new(Highlighter::new()),
    };

    let app = router(state);

    let listener = TcpListener::bind(addr.as_str()).await?;
    tracing::info!(addr = %listener.local_addr()?, db = %db_path, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
