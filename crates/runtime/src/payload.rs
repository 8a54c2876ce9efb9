//! Parsing the configuration attribute of a chart container
//!
//! Only `type`, `data` and `options` are read. Everything else in the
//! document is ignored, and `data`/`options` are handed to the library as
//! they are, so fields this crate does not model still reach it.

use std::str::FromStr;

use chartflow_shared::{ChartType, ChartflowError, ChartflowResult};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Used when a payload carries no `data`
pub fn fallback_data() -> Value {
    json!({ "labels": [], "datasets": [] })
}

/// Used when a payload carries no `options`
pub fn fallback_options() -> Value {
    json!({ "responsive": true, "maintainAspectRatio": false })
}

/// The parts of an embedded configuration the runtime acts on
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedChart {
    pub chart_type: Option<ChartType>,
    pub data: Option<Value>,
    pub options: Option<Value>,
}

/// Argument passed to the library constructor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LibraryConfig {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    pub data: Value,
    pub options: Value,
}

impl EmbeddedChart {
    /// Parse attribute text.
    ///
    /// The text must be a JSON object. A present `type` must name a known
    /// chart type; a missing or null `type` is left for the library to judge.
    /// With `strict` set, every dataset must have one value per label.
    pub fn parse(raw: &str, strict: bool) -> ChartflowResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(mut fields) = value else {
            return Err(ChartflowError::InvalidConfig {
                message: "configuration must be a JSON object".to_string(),
                field: None,
            });
        };

        let chart_type = parse_type(&mut fields)?;
        let data = take_present(&mut fields, "data");
        let options = take_present(&mut fields, "options");

        if let Some(data) = &data {
            if let Some(err) = length_mismatch(data) {
                if strict {
                    return Err(err);
                }
                log::warn!("{} {}", crate::LOG_PREFIX, err);
            }
        }

        Ok(Self {
            chart_type,
            data,
            options,
        })
    }

    /// Constructor argument with fallbacks filled in
    pub fn to_library_config(&self) -> LibraryConfig {
        LibraryConfig {
            chart_type: self.chart_type.map(|t| t.as_str().to_string()),
            data: self.data.clone().unwrap_or_else(fallback_data),
            options: self.options.clone().unwrap_or_else(fallback_options),
        }
    }
}

fn parse_type(fields: &mut Map<String, Value>) -> ChartflowResult<Option<ChartType>> {
    match take_present(fields, "type") {
        None => Ok(None),
        Some(Value::String(s)) => ChartType::from_str(&s).map(Some),
        Some(other) => Err(ChartflowError::InvalidConfig {
            message: format!("chart type must be a string, got {other}"),
            field: Some("type".to_string()),
        }),
    }
}

fn take_present(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|v| !v.is_null())
}

/// First dataset whose value count differs from the label count
fn length_mismatch(data: &Value) -> Option<ChartflowError> {
    let labels = data.get("labels")?.as_array()?.len();
    let datasets = data.get("datasets")?.as_array()?;

    datasets.iter().enumerate().find_map(|(index, dataset)| {
        let actual = dataset.get("data")?.as_array()?.len();
        (actual != labels).then_some(ChartflowError::SeriesLengthMismatch {
            dataset: index,
            expected: labels,
            actual,
        })
    })
}
