//! Built-in chart type and color palette presets

pub mod chart_type_presets;
pub mod palette_presets;

pub use chart_type_presets::*;
pub use palette_presets::*;

use chartflow_shared::ChartType;

/// Catalog of chart type descriptors and color palettes offered to the editor
pub struct PresetManager {
    chart_types: Vec<ChartTypePreset>,
    palettes: &'static [ColorPalette],
}

impl Default for PresetManager {
    fn default() -> Self {
        Self {
            chart_types: chart_type_presets::create_chart_type_presets(),
            palettes: &COLOR_PALETTES,
        }
    }
}

impl PresetManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart_types(&self) -> &[ChartTypePreset] {
        &self.chart_types
    }

    pub fn find_chart_type(&self, chart_type: ChartType) -> Option<&ChartTypePreset> {
        self.chart_types
            .iter()
            .find(|preset| preset.chart_type == chart_type)
    }

    pub fn palettes(&self) -> &'static [ColorPalette] {
        self.palettes
    }

    pub fn list_palettes_by_id(&self) -> Vec<&'static str> {
        self.palettes.iter().map(|palette| palette.id).collect()
    }
}
