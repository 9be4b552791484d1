use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("unsupported theme: {0}")]
    UnsupportedTheme(String),

    #[error("highlighting failed: {0}")]
    Render(#[from] syntect::Error),
}
