//! Error types for WattWise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Profile incomplete: save a profile before recording energy usage")]
    ProfileIncomplete,

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
