use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmoothieError {
    #[error("Catalog integrity error: {0}")]
    CatalogIntegrity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, SmoothieError>;
