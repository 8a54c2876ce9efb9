//! Embed encoding for ChartFlow
//!
//! Turns a finished [`ChartConfiguration`](chartflow_shared::ChartConfiguration)
//! into the container/canvas markup the page runtime discovers, and drives the
//! host's insertion API. Nothing here keeps a record of what it emitted.

pub mod encoder;
pub mod host;
pub mod probe;
pub mod scripts;

use chartflow_shared::ChartflowError;
use thiserror::Error;

pub use encoder::{
    decode, decode_config_attribute, encode, generate_instance_id, EmbedAttributes, EmbedPayload,
};
pub use host::{insert_chart, ElementSpec, HostDocument, InsertOutcome, Notice, NoticeKind};
pub use probe::{HostAvailability, HostProbe};

/// Embed errors
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing attribute: {name}")]
    MissingAttribute { name: String },

    #[error("Host error: {message}")]
    Host { message: String },

    #[error(transparent)]
    Shared(#[from] ChartflowError),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
