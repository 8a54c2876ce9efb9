//! Markup contract between the embed encoder and the page runtime

/// Container attribute holding the instance identifier
pub const CONTAINER_ID_ATTR: &str = "data-chartflow-id";

/// Container attribute holding the serialized configuration
pub const CONFIG_ATTR: &str = "data-chartflow-config";

pub const CONTAINER_CLASS: &str = "chartflow-container";
pub const CONTAINER_STYLE: &str = "width: 100%; min-height: 400px;";

pub const CANVAS_TAG: &str = "canvas";
pub const CANVAS_STYLE: &str = "width: 100%; height: 100%; min-height: 300px;";

/// Accessible label used when a chart has no title
pub const FALLBACK_ARIA_LABEL: &str = "Chart";

/// Selector matching every embedded chart container
pub fn container_selector() -> String {
    format!("[{CONTAINER_ID_ATTR}]")
}
