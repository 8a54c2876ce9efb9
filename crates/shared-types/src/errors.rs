//! Common error types used across all ChartFlow crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for ChartFlow operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ChartflowError {
    // Model errors
    #[error("Index {index} out of range for {collection} of length {len}")]
    IndexOutOfRange {
        collection: String,
        index: usize,
        len: usize,
    },

    #[error("Unknown chart type: {value}")]
    UnknownChartType { value: String },

    #[error("Dataset {dataset} has {actual} values but there are {expected} labels")]
    SeriesLengthMismatch {
        dataset: usize,
        expected: usize,
        actual: usize,
    },

    // Configuration errors
    #[error("Configuration parse error: {message}")]
    ConfigParse {
        message: String,
        line: Option<usize>,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ChartflowError {
    pub fn index_out_of_range(collection: &str, index: usize, len: usize) -> Self {
        ChartflowError::IndexOutOfRange {
            collection: collection.to_string(),
            index,
            len,
        }
    }
}

/// Result type alias for ChartFlow operations
pub type ChartflowResult<T> = Result<T, ChartflowError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ChartflowError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: ChartflowError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
            context: None,
        }
    }

    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"Internal","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for ChartflowError {
    fn from(err: serde_json::Error) -> Self {
        ChartflowError::ConfigParse {
            message: err.to_string(),
            line: Some(err.line()),
        }
    }
}
