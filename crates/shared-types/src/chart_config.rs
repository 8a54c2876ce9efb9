//! Render options passed straight through to the charting library

use serde::{Deserialize, Serialize};

/// Legend placement relative to the chart area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Font override for legend labels and titles
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FontSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LegendLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
}

/// Legend plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Top,
            labels: None,
        }
    }
}

/// Title plugin configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TitleOptions {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
}

/// Grid line configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Axis configuration; `begin_at_zero` is only read for the y axis
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
}

/// Cartesian scales. Inert for pie and doughnut charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisOptions>,
}

/// Top-level options object handed to the charting library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScaleOptions>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            plugins: PluginOptions::default(),
            scales: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_use_library_field_names() {
        let options = RenderOptions {
            scales: Some(ScaleOptions {
                y: Some(AxisOptions {
                    begin_at_zero: Some(true),
                    grid: Some(GridOptions {
                        display: Some(true),
                        tick_color: Some("#ccc".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                x: None,
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "responsive": true,
                "maintainAspectRatio": true,
                "plugins": {
                    "legend": { "display": true, "position": "top" },
                    "title": { "display": false }
                },
                "scales": {
                    "y": {
                        "grid": { "display": true, "tickColor": "#ccc" },
                        "beginAtZero": true
                    }
                }
            })
        );
    }

    #[test]
    fn test_missing_optional_sections_deserialize() {
        let options: RenderOptions = serde_json::from_value(json!({
            "responsive": false,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false, "position": "left" },
                "title": { "display": true, "text": "Revenue" }
            }
        }))
        .unwrap();

        assert!(options.scales.is_none());
        assert_eq!(options.plugins.legend.position, LegendPosition::Left);
        assert_eq!(options.plugins.title.text.as_deref(), Some("Revenue"));
    }
}
