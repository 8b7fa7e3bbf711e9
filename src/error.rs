use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShameError>;

#[derive(Error, Debug)]
pub enum ShameError {
    #[error("Failed to analyze git history: {0}")]
    Analyze(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShameError {
    /// Wraps any failure as the single top-level analysis error.
    pub fn analyze(err: impl std::fmt::Display) -> Self {
        ShameError::Analyze(err.to_string())
    }
}
