//! WASM bridge for ChartFlow
//! Exposes the editor model, the embed encoder and the page runtime to JavaScript

use std::sync::Once;

use chartflow_config::PresetManager;
use chartflow_shared::{ChartflowError, ErrorResponse};
use wasm_bindgen::prelude::*;

pub mod editor;
pub mod host;
#[cfg(target_arch = "wasm32")]
pub mod page;

pub use editor::ChartEditor;

static LOGGER: Once = Once::new();

/// Install the console logger once, then apply `level` on every call
pub(crate) fn init_logger(level: log::Level) {
    LOGGER.call_once(|| {
        // Another logger may already be installed by the embedding page
        let _ = console_log::init_with_level(level);
    });
    apply_log_level(level);
}

fn apply_log_level(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}

/// Errors cross into JavaScript as an [`ErrorResponse`] JSON string
pub(crate) fn to_js_error(error: ChartflowError, operation: &str) -> JsValue {
    JsValue::from_str(
        &ErrorResponse::new(error)
            .with_context("chartflow-wasm", operation)
            .to_json(),
    )
}

pub(crate) fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ChartflowError> {
    serde_json::to_string(value).map_err(|e| ChartflowError::Internal {
        message: format!("Failed to serialize result: {e}"),
    })
}

fn encode_chart_json(config_json: &str) -> Result<String, ChartflowError> {
    let config = chartflow_embed::decode_config_attribute(config_json).map_err(embed_error)?;
    let payload = chartflow_embed::encode(&config).map_err(embed_error)?;
    to_json(&payload)
}

pub(crate) fn embed_error(error: chartflow_embed::EmbedError) -> ChartflowError {
    match error {
        chartflow_embed::EmbedError::Shared(inner) => inner,
        chartflow_embed::EmbedError::Serialization(inner) => inner.into(),
        other => ChartflowError::JsInterop {
            message: other.to_string(),
        },
    }
}

/// Encode a configuration document into embed attributes.
///
/// Returns the payload JSON: `{"id": ..., "attributes": {"container": {...}, "canvas": {...}}}`.
#[wasm_bindgen]
pub fn encode_chart(config_json: &str) -> Result<String, JsValue> {
    encode_chart_json(config_json).map_err(|e| to_js_error(e, "encode_chart"))
}

/// Chart type catalog as JSON
#[wasm_bindgen]
pub fn chart_types() -> Result<String, JsValue> {
    to_json(PresetManager::new().chart_types()).map_err(|e| to_js_error(e, "chart_types"))
}

/// Color palettes as JSON
#[wasm_bindgen]
pub fn palettes() -> Result<String, JsValue> {
    to_json(PresetManager::new().palettes()).map_err(|e| to_js_error(e, "palettes"))
}

/// Publishing steps shown after an insertion
#[wasm_bindgen]
pub fn setup_instructions() -> Vec<String> {
    chartflow_embed::scripts::setup_instructions()
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logger(log::Level::Info);
    log::debug!("ChartFlow WASM bridge initialized");
}
