use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid temperature '{value}' for location '{location}': expected an integer")]
    InvalidTemperature { location: String, value: String },

    #[error("Refusing to persist an empty dataset")]
    EmptyDataset,

    #[error("Location '{0}' already exists")]
    DuplicateLocation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
