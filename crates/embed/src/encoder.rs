//! Configuration to markup attributes and back

use std::collections::BTreeMap;

use chartflow_shared::wire::{
    CANVAS_STYLE, CONFIG_ATTR, CONTAINER_CLASS, CONTAINER_ID_ATTR, CONTAINER_STYLE,
    FALLBACK_ARIA_LABEL,
};
use chartflow_shared::ChartConfiguration;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EmbedError, Result};

/// Attribute sets for the container element and its canvas child
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedAttributes {
    pub container: BTreeMap<String, String>,
    pub canvas: BTreeMap<String, String>,
}

/// Everything needed to place one chart in a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedPayload {
    pub id: String,
    pub attributes: EmbedAttributes,
}

impl EmbedPayload {
    /// Raw configuration JSON carried by the container
    pub fn config_json(&self) -> Option<&str> {
        self.attributes.container.get(CONFIG_ATTR).map(String::as_str)
    }
}

/// Instance ids look like `chart-1718031234567-3f9a1c2b7`: a millisecond
/// timestamp plus nine random characters.
pub fn generate_instance_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("chart-{}-{}", Utc::now().timestamp_millis(), &random[..9])
}

/// Serialize `cfg` into container and canvas attributes under a fresh
/// instance id
pub fn encode(cfg: &ChartConfiguration) -> Result<EmbedPayload> {
    let id = generate_instance_id();
    let config_json = serde_json::to_string(cfg)?;

    let mut container = BTreeMap::new();
    container.insert(CONTAINER_ID_ATTR.to_string(), id.clone());
    container.insert(CONFIG_ATTR.to_string(), config_json);
    container.insert("class".to_string(), CONTAINER_CLASS.to_string());
    container.insert("style".to_string(), CONTAINER_STYLE.to_string());

    let aria_label = if cfg.title.is_empty() {
        FALLBACK_ARIA_LABEL
    } else {
        cfg.title.as_str()
    };

    let mut canvas = BTreeMap::new();
    canvas.insert("id".to_string(), id.clone());
    canvas.insert("aria-label".to_string(), aria_label.to_string());
    canvas.insert("style".to_string(), CANVAS_STYLE.to_string());

    log::debug!("Encoded chart {} as instance {}", cfg.id, id);

    Ok(EmbedPayload {
        id,
        attributes: EmbedAttributes { container, canvas },
    })
}

/// Rebuild the configuration carried by a payload
pub fn decode(payload: &EmbedPayload) -> Result<ChartConfiguration> {
    let json = payload
        .config_json()
        .ok_or_else(|| EmbedError::MissingAttribute {
            name: CONFIG_ATTR.to_string(),
        })?;
    decode_config_attribute(json)
}

pub fn decode_config_attribute(json: &str) -> Result<ChartConfiguration> {
    Ok(serde_json::from_str(json)?)
}
