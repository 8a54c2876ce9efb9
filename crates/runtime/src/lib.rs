//! Page runtime for ChartFlow
//!
//! Runs on a published page: finds every embedded chart container, parses its
//! configuration and binds one chart per canvas through the charting library.
//! Page access goes through the traits in [`dom`] so the initializer runs the
//! same way against the browser and against in-memory pages in tests.

pub mod dom;
pub mod error;
pub mod initializer;
pub mod payload;
pub mod scheduling;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use dom::{CanvasSurface, ChartContainer, ChartLibrary, PageDocument};
pub use error::{ElementError, Result, RuntimeError};
pub use initializer::{ElementOutcome, ElementReport, InitReport, InitState, Initializer};
pub use payload::{fallback_data, fallback_options, EmbeddedChart, LibraryConfig};
pub use scheduling::{plan, ReadyState, Trigger};
pub use settings::{LogLevel, RuntimeSettings};

/// Prefix carried by every runtime diagnostic
pub const LOG_PREFIX: &str = "ChartFlow:";
