use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinesError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type DefinesResult<T> = Result<T, DefinesError>;
