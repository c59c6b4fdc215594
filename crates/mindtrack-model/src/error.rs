use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("answers must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("unknown appetite level: {0}")]
    UnknownAppetite(String),
    #[error("invalid answers document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
