//! Runtime error types

use chartflow_shared::ChartflowError;
use thiserror::Error;

/// Errors that stop a whole initialization pass
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("Chart.js is not loaded. Please include Chart.js before the ChartFlow runtime script.")]
    LibraryUnavailable,

    #[error("Invalid runtime settings: {0}")]
    Settings(String),

    #[error("Page access error: {0}")]
    Page(String),

    #[error(transparent)]
    Shared(#[from] ChartflowError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Why a single chart container was not rendered
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    #[error("No configuration found for chart {instance}")]
    MissingConfiguration { instance: String },

    #[error("Could not parse configuration for chart {instance}: {reason}")]
    MalformedPayload {
        instance: String,
        reason: ChartflowError,
    },

    #[error("Invalid configuration for chart {instance}: {reason}")]
    InvalidPayload {
        instance: String,
        reason: ChartflowError,
    },

    #[error("No canvas element found in container {instance}")]
    MissingCanvas { instance: String },

    #[error("Chart {instance} already initialized, skipping.")]
    AlreadyBound { instance: String },

    #[error("Could not get 2D context for canvas {instance}")]
    NoDrawingSurface { instance: String },

    #[error("Error initializing chart {instance}: {message}")]
    Construction { instance: String, message: String },
}

impl ElementError {
    pub fn instance(&self) -> &str {
        match self {
            ElementError::MissingConfiguration { instance }
            | ElementError::MalformedPayload { instance, .. }
            | ElementError::InvalidPayload { instance, .. }
            | ElementError::MissingCanvas { instance }
            | ElementError::AlreadyBound { instance }
            | ElementError::NoDrawingSurface { instance }
            | ElementError::Construction { instance, .. } => instance,
        }
    }

    /// Payload errors are split by whether the text was JSON at all
    pub(crate) fn from_payload(instance: String, reason: ChartflowError) -> Self {
        match reason {
            ChartflowError::ConfigParse { .. } => ElementError::MalformedPayload { instance, reason },
            _ => ElementError::InvalidPayload { instance, reason },
        }
    }
}
