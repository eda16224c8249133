use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Invalid color input: {0}")]
    Validation(String),

    #[error("Invalid color type: {0}")]
    Type(String),

    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Missing field in color response: {0}")]
    MissingField(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ColorError>;
