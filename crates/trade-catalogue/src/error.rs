#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("failed to write catalogue: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write catalogue CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
