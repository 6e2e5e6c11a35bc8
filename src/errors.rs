// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing required fields: language, version, or code")]
    MissingFields,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Execution backend responded with status {status}: {body}")]
    BackendStatus { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelayError {
    /// Transport status the relay reports for this failure. Missing input is
    /// the caller's fault; everything else is a relay or backend failure.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MissingFields => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
