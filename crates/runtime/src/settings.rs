//! Runtime settings
//!
//! Every field has a default matching the markup written by the embed
//! encoder, so a page that passes nothing gets the standard behavior.

use chartflow_shared::wire::{CANVAS_TAG, CONFIG_ATTR, CONTAINER_ID_ATTR};
use chartflow_shared::ChartflowError;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeSettings {
    /// Attribute carrying the instance id; its presence marks a container
    pub container_id_attribute: String,
    /// Attribute carrying the configuration JSON
    pub config_attribute: String,
    /// Selector for the canvas inside a container
    pub canvas_selector: String,
    /// Fail elements whose datasets disagree with the label count
    pub strict_validation: bool,
    pub log_level: LogLevel,
    /// Also run when the host's ready queue fires
    pub hook_host_ready: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            container_id_attribute: CONTAINER_ID_ATTR.to_string(),
            config_attribute: CONFIG_ATTR.to_string(),
            canvas_selector: CANVAS_TAG.to_string(),
            strict_validation: false,
            log_level: LogLevel::default(),
            hook_host_ready: true,
        }
    }
}

impl RuntimeSettings {
    /// Load from JSON; blank input yields the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(json).map_err(ChartflowError::from)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        validate_attribute("containerIdAttribute", &self.container_id_attribute)?;
        validate_attribute("configAttribute", &self.config_attribute)?;

        if self.container_id_attribute == self.config_attribute {
            return Err(RuntimeError::Settings(
                "containerIdAttribute and configAttribute must differ".to_string(),
            ));
        }
        if self.canvas_selector.trim().is_empty() {
            return Err(RuntimeError::Settings(
                "canvasSelector must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Selector matching every chart container
    pub fn container_selector(&self) -> String {
        format!("[{}]", self.container_id_attribute)
    }
}

fn validate_attribute(field: &str, name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RuntimeError::Settings(format!(
            "{field} must be a non-empty attribute name, got {name:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartflow_shared::wire::container_selector;

    #[test]
    fn test_defaults_match_encoder_markup() {
        let settings = RuntimeSettings::default();
        assert_eq!(settings.container_selector(), container_selector());
        assert_eq!(settings.config_attribute, CONFIG_ATTR);
        assert!(!settings.strict_validation);
        assert!(settings.hook_host_ready);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            RuntimeSettings::from_json(r#"{"strictValidation": true, "logLevel": "debug"}"#)
                .unwrap();
        assert!(settings.strict_validation);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.container_id_attribute, CONTAINER_ID_ATTR);
    }

    #[test]
    fn test_blank_json_is_default() {
        assert_eq!(
            RuntimeSettings::from_json("  ").unwrap(),
            RuntimeSettings::default()
        );
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let err = RuntimeSettings::from_json(r#"{"containerIdAttribute": "data id]"}"#)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Settings(_)));

        let err = RuntimeSettings::from_json(
            r#"{"containerIdAttribute": "data-x", "configAttribute": "data-x"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RuntimeError::Settings(_)));

        let err = RuntimeSettings::from_json("{oops").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Shared(ChartflowError::ConfigParse { .. })
        ));
    }
}
