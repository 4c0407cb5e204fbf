//! Error types for the AI service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl Error {
    pub fn analysis(msg: impl Into<String>) -> Self {
        Error::Analysis(msg.into())
    }

    pub fn invalid_upload(msg: impl Into<String>) -> Self {
        Error::InvalidUpload(msg.into())
    }
}
