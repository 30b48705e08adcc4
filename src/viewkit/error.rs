use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewKitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ViewKitError>;
