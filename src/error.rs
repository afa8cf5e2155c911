use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("File encoding error in {}. Please ensure UTF-8 encoding.", .path.display())]
    Encoding { path: PathBuf },

    #[error("No headers found in {}", .path.display())]
    NoHeaders { path: PathBuf },

    #[error("Column '{column}' not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Row {row} of {} has {found} fields, expected {expected}", .path.display())]
    ExtraFields {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid measurement '{value}': {reason}")]
    InvalidMeasurement { value: String, reason: String },

    #[error("Path {} is outside the source directory", .0.display())]
    OutsideRoot(PathBuf),
}
