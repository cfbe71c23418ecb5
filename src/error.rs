use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimegenError {
    #[error("Invalid subject name: must not be empty")]
    InvalidName,

    #[error("Invalid weekly count: {0} (must be positive)")]
    InvalidCount(u32),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimegenError>;
