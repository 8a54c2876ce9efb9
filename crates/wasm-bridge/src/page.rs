//! Published-page entry points

use chartflow_runtime::{web, RuntimeSettings};
use chartflow_shared::ChartflowError;
use wasm_bindgen::prelude::*;

use crate::{init_logger, to_js_error, to_json};

fn load_settings(settings_json: Option<String>) -> Result<RuntimeSettings, ChartflowError> {
    RuntimeSettings::from_json(settings_json.as_deref().unwrap_or_default()).map_err(runtime_error)
}

fn runtime_error(error: chartflow_runtime::RuntimeError) -> ChartflowError {
    match error {
        chartflow_runtime::RuntimeError::Shared(inner) => inner,
        chartflow_runtime::RuntimeError::Settings(message) => ChartflowError::InvalidConfig {
            message,
            field: None,
        },
        other => ChartflowError::JsInterop {
            message: other.to_string(),
        },
    }
}

/// Schedule initialization for the current page: now if the document has
/// loaded, otherwise on `DOMContentLoaded`, plus once more on host ready.
#[wasm_bindgen]
pub fn start_runtime(settings_json: Option<String>) -> Result<(), JsValue> {
    let settings = load_settings(settings_json).map_err(|e| to_js_error(e, "start_runtime"))?;
    init_logger(settings.log_level.as_level());

    web::start(settings).map_err(|e| to_js_error(runtime_error(e), "start_runtime"))
}

/// Run one initialization pass immediately and return its report as JSON
#[wasm_bindgen]
pub fn initialize_charts(settings_json: Option<String>) -> Result<String, JsValue> {
    let settings =
        load_settings(settings_json).map_err(|e| to_js_error(e, "initialize_charts"))?;
    init_logger(settings.log_level.as_level());

    let report = web::initialize_now(settings)
        .map_err(|e| to_js_error(runtime_error(e), "initialize_charts"))?;
    to_json(&report.to_json()).map_err(|e| to_js_error(e, "initialize_charts"))
}
