//! Named color palettes and how they are applied to a chart

use chartflow_shared::{ChartConfiguration, ChartflowResult, ColorSpec};
use serde::Serialize;

use crate::model::set_dataset_colors;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ColorPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

pub static COLOR_PALETTES: [ColorPalette; 8] = [
    ColorPalette {
        id: "default",
        name: "Default",
        colors: &["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899"],
    },
    ColorPalette {
        id: "pastel",
        name: "Pastel",
        colors: &["#A5B4FC", "#86EFAC", "#FDE68A", "#FCA5A5", "#C4B5FD", "#F9A8D4"],
    },
    ColorPalette {
        id: "vivid",
        name: "Vivid",
        colors: &["#2563EB", "#059669", "#D97706", "#DC2626", "#7C3AED", "#DB2777"],
    },
    ColorPalette {
        id: "ocean",
        name: "Ocean",
        colors: &["#0891B2", "#06B6D4", "#22D3EE", "#67E8F9", "#A5F3FC", "#CFFAFE"],
    },
    ColorPalette {
        id: "sunset",
        name: "Sunset",
        colors: &["#DC2626", "#EA580C", "#F97316", "#FB923C", "#FDBA74", "#FED7AA"],
    },
    ColorPalette {
        id: "forest",
        name: "Forest",
        colors: &["#14532D", "#166534", "#15803D", "#16A34A", "#22C55E", "#4ADE80"],
    },
    ColorPalette {
        id: "monochrome",
        name: "Monochrome",
        colors: &["#18181B", "#3F3F46", "#52525B", "#71717A", "#A1A1AA", "#D4D4D8"],
    },
    ColorPalette {
        id: "rainbow",
        name: "Rainbow",
        colors: &[
            "#EF4444", "#F97316", "#EAB308", "#22C55E", "#06B6D4", "#3B82F6", "#8B5CF6",
        ],
    },
];

/// Palette by id; unknown ids fall back to the default palette
pub fn palette(id: &str) -> &'static ColorPalette {
    COLOR_PALETTES
        .iter()
        .find(|palette| palette.id == id)
        .unwrap_or(&COLOR_PALETTES[0])
}

/// `count` colors taken from the palette, cycling when it runs out
pub fn apply_palette(count: usize, palette_id: &str) -> Vec<String> {
    let colors = palette(palette_id).colors;
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|color| color.to_string())
        .collect()
}

/// Recolor the first dataset: one color per slice for pie and doughnut
/// charts, the palette's first color for bar and line charts.
pub fn apply_palette_to_config(
    cfg: &ChartConfiguration,
    palette_id: &str,
) -> ChartflowResult<ChartConfiguration> {
    let count = cfg.data.labels.len().max(1);
    let mut colors = apply_palette(count, palette_id);

    let background = if cfg.chart_type.uses_color_sequence() {
        ColorSpec::Sequence(colors)
    } else {
        ColorSpec::Single(colors.swap_remove(0))
    };

    log::debug!(
        "Applying palette '{}' to {} chart {}",
        palette(palette_id).id,
        cfg.chart_type,
        cfg.id
    );
    set_dataset_colors(cfg, 0, background, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{create, set_series};
    use crate::patch::SeriesPatch;
    use chartflow_shared::ChartType;

    #[test]
    fn test_unknown_palette_falls_back() {
        assert_eq!(palette("neon").id, "default");
        assert_eq!(palette("ocean").name, "Ocean");
    }

    #[test]
    fn test_apply_palette_cycles() {
        let colors = apply_palette(8, "default");
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[6], "#3B82F6");
        assert_eq!(colors[7], "#10B981");
        assert!(apply_palette(0, "vivid").is_empty());
    }

    #[test]
    fn test_pie_gets_color_per_slice() {
        let cfg = apply_palette_to_config(&create(ChartType::Pie), "sunset").unwrap();
        let dataset = &cfg.data.datasets[0];
        match &dataset.background_color {
            ColorSpec::Sequence(colors) => {
                assert_eq!(colors.len(), 5);
                assert_eq!(colors[0], "#DC2626");
            }
            other => panic!("expected sequence, got {other:?}"),
        }
        assert_eq!(dataset.border_color, dataset.background_color);
    }

    #[test]
    fn test_bar_gets_single_color() {
        let cfg = apply_palette_to_config(&create(ChartType::Bar), "forest").unwrap();
        assert_eq!(
            cfg.data.datasets[0].background_color,
            ColorSpec::single("#14532D")
        );
    }

    #[test]
    fn test_palette_without_datasets_is_an_error() {
        let cfg = set_series(&create(ChartType::Line), SeriesPatch::datasets(vec![]));
        assert!(apply_palette_to_config(&cfg, "default").is_err());
    }
}
