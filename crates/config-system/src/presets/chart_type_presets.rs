//! Display metadata for the four chart types

use chartflow_shared::ChartType;
use serde::Serialize;

/// Name and description shown by the chart type picker
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartTypePreset {
    #[serde(rename = "id")]
    pub chart_type: ChartType,
    pub name: &'static str,
    pub description: &'static str,
}

impl ChartTypePreset {
    /// Whether the style editor should offer axis and grid controls
    pub fn shows_axis_controls(&self) -> bool {
        self.chart_type.uses_axes()
    }
}

pub fn create_chart_type_presets() -> Vec<ChartTypePreset> {
    ChartType::ALL.into_iter().map(chart_type_preset).collect()
}

pub fn chart_type_preset(chart_type: ChartType) -> ChartTypePreset {
    let (name, description) = match chart_type {
        ChartType::Bar => ("Bar Chart", "Great for comparing values across categories"),
        ChartType::Line => ("Line Chart", "Perfect for showing trends over time"),
        ChartType::Pie => ("Pie Chart", "Ideal for showing parts of a whole"),
        ChartType::Doughnut => ("Doughnut Chart", "Like a pie chart with a hollow center"),
    };

    ChartTypePreset {
        chart_type,
        name,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_serializes_with_wire_id() {
        let json = serde_json::to_value(chart_type_preset(ChartType::Doughnut)).unwrap();
        assert_eq!(json["id"], "doughnut");
        assert_eq!(json["name"], "Doughnut Chart");
    }

    #[test]
    fn test_axis_controls_only_for_cartesian() {
        assert!(chart_type_preset(ChartType::Bar).shows_axis_controls());
        assert!(!chart_type_preset(ChartType::Pie).shows_axis_controls());
    }
}
