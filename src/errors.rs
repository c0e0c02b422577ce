//! Shared error types for medcost.
//!
//! Data loading errors carry user-facing messages: they are shown in the
//! Data page (or the HTML report) instead of aborting the program.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns the scatter chart cannot do without.
pub const REQUIRED_COLUMNS: [&str; 2] = ["age", "predicted_cost"];

/// Main error type for medcost operations
#[derive(Debug, Error)]
pub enum Error {
    /// The historical data file does not exist
    #[error(
        "File '{}' was not found. Make sure it is in the same directory as the application.",
        display_name(.path)
    )]
    DataFileMissing { path: PathBuf },

    /// The data file loaded but lacks required columns
    #[error("Column 'age' or 'predicted_cost' was not found in the data.")]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// Any other failure while loading the data file
    #[error("An error occurred while loading the data: {message}")]
    DataLoad { path: PathBuf, message: String },

    /// A form value outside its permitted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::InputOutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    pub fn data_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error is one of the recoverable data conditions.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::DataFileMissing { .. } | Self::MissingColumns { .. } | Self::DataLoad { .. }
        )
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
