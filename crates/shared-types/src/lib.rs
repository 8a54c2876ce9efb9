//! Shared types for ChartFlow
//!
//! This crate contains the chart configuration schema shared between the
//! configuration model, the embed encoder and the browser bridge. Every type
//! serializes to the exact JSON shape the charting library consumes, so a
//! configuration can be handed to the library without translation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod chart_config;
pub mod errors;
pub mod wire;

pub use chart_config::{
    AxisOptions, FontSpec, GridOptions, LegendLabels, LegendOptions, LegendPosition,
    PluginOptions, RenderOptions, ScaleOptions, TickOptions, TitleOptions,
};
pub use errors::{ChartflowError, ChartflowResult, ErrorResponse};

/// Chart types supported by the embed runtime
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
        }
    }

    /// Whether `scales` options mean anything for this type
    pub fn uses_axes(&self) -> bool {
        matches!(self, ChartType::Bar | ChartType::Line)
    }

    /// Slice charts color each point individually
    pub fn uses_color_sequence(&self) -> bool {
        matches!(self, ChartType::Pie | ChartType::Doughnut)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            "doughnut" => Ok(ChartType::Doughnut),
            other => Err(ChartflowError::UnknownChartType {
                value: other.to_string(),
            }),
        }
    }
}

/// A color applied to every point, or one color per point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Sequence(Vec<String>),
}

impl ColorSpec {
    pub fn single(color: impl Into<String>) -> Self {
        ColorSpec::Single(color.into())
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, ColorSpec::Sequence(_))
    }

    /// First color, if any
    pub fn primary(&self) -> Option<&str> {
        match self {
            ColorSpec::Single(color) => Some(color.as_str()),
            ColorSpec::Sequence(colors) => colors.first().map(String::as_str),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(color: &str) -> Self {
        ColorSpec::Single(color.to_string())
    }
}

impl From<Vec<String>> for ColorSpec {
    fn from(colors: Vec<String>) -> Self {
        ColorSpec::Sequence(colors)
    }
}

/// One named series of values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    pub border_color: ColorSpec,
    pub border_width: f64,
}

/// Labels paired positionally with each dataset's values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl Series {
    /// Index of the first dataset whose length disagrees with `labels`
    pub fn first_length_mismatch(&self) -> Option<usize> {
        self.datasets
            .iter()
            .position(|dataset| dataset.data.len() != self.labels.len())
    }

    pub fn is_consistent(&self) -> bool {
        self.first_length_mismatch().is_none()
    }
}

/// Where the plotted values came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    #[default]
    Manual,
    Cms,
}

/// Informational origin metadata; never read by the runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(rename = "type")]
    pub kind: DataSourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<u64>,
}

impl DataSource {
    pub fn manual() -> Self {
        Self::default()
    }
}

/// Complete chart configuration as authored and embedded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    pub id: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub title: String,
    pub data: Series,
    pub options: RenderOptions,
    pub data_source: DataSource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChartConfiguration {
    /// Whether `title` and the title plugin text agree
    pub fn title_in_sync(&self) -> bool {
        self.options.plugins.title.text.as_deref() == Some(self.title.as_str())
    }
}
