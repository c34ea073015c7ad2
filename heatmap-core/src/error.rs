/// Error types for the heat map library
use thiserror::Error;

/// Main error type for heat map operations
#[derive(Error, Debug)]
pub enum HeatMapError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    /// Failed to parse the dataset document
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A record carried a month outside 1..=12
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Dataset has no monthly records to scale over
    #[error("No data to display")]
    EmptyDataset,
}

/// Type alias for Results using HeatMapError
pub type Result<T> = std::result::Result<T, HeatMapError>;
