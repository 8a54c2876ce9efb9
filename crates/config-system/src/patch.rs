//! Partial updates for series and render options
//!
//! Every mergeable field is listed explicitly. Scalars and arrays in a patch
//! replace the previous value whole; nested objects merge field by field so
//! anything the patch leaves out survives from the previous value.

use chartflow_shared::{
    AxisOptions, Dataset, FontSpec, GridOptions, LegendLabels, LegendOptions, LegendPosition,
    PluginOptions, RenderOptions, ScaleOptions, Series, TickOptions, TitleOptions,
};
use serde::{Deserialize, Serialize};

/// Cartesian axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Shallow patch for a [`Series`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeriesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<Dataset>>,
}

impl SeriesPatch {
    pub fn labels(labels: Vec<String>) -> Self {
        Self {
            labels: Some(labels),
            datasets: None,
        }
    }

    pub fn datasets(datasets: Vec<Dataset>) -> Self {
        Self {
            labels: None,
            datasets: Some(datasets),
        }
    }

    pub fn apply_to(self, base: &Series) -> Series {
        Series {
            labels: self.labels.unwrap_or_else(|| base.labels.clone()),
            datasets: self.datasets.unwrap_or_else(|| base.datasets.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LegendPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

impl LegendPatch {
    fn apply_to(self, base: &LegendOptions) -> LegendOptions {
        LegendOptions {
            display: self.display.unwrap_or(base.display),
            position: self.position.unwrap_or(base.position),
            labels: merge_legend_labels(self.labels, base.labels.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TitlePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
}

impl TitlePatch {
    fn apply_to(self, base: &TitleOptions) -> TitleOptions {
        TitleOptions {
            display: self.display.unwrap_or(base.display),
            text: self.text.or_else(|| base.text.clone()),
            font: merge_font(self.font, base.font.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitlePatch>,
}

impl PluginsPatch {
    fn apply_to(self, base: &PluginOptions) -> PluginOptions {
        PluginOptions {
            legend: match self.legend {
                Some(patch) => patch.apply_to(&base.legend),
                None => base.legend.clone(),
            },
            title: match self.title {
                Some(patch) => patch.apply_to(&base.title),
                None => base.title.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<String>,
}

impl GridPatch {
    fn apply_to(self, base: Option<&GridOptions>) -> GridOptions {
        let base = base.cloned().unwrap_or_default();
        GridOptions {
            display: self.display.or(base.display),
            color: self.color.or(base.color),
            border_color: self.border_color.or(base.border_color),
            tick_color: self.tick_color.or(base.tick_color),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AxisPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
}

impl AxisPatch {
    fn apply_to(self, base: Option<&AxisOptions>) -> AxisOptions {
        let base = base.cloned().unwrap_or_default();
        AxisOptions {
            display: self.display.or(base.display),
            grid: match self.grid {
                Some(patch) => Some(patch.apply_to(base.grid.as_ref())),
                None => base.grid,
            },
            ticks: match (self.ticks, base.ticks) {
                (Some(patch), Some(prev)) => Some(TickOptions {
                    color: patch.color.or(prev.color),
                }),
                (patch, prev) => patch.or(prev),
            },
            begin_at_zero: self.begin_at_zero.or(base.begin_at_zero),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScalesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisPatch>,
}

impl ScalesPatch {
    fn apply_to(self, base: Option<&ScaleOptions>) -> ScaleOptions {
        let base = base.cloned().unwrap_or_default();
        ScaleOptions {
            x: match self.x {
                Some(patch) => Some(patch.apply_to(base.x.as_ref())),
                None => base.x,
            },
            y: match self.y {
                Some(patch) => Some(patch.apply_to(base.y.as_ref())),
                None => base.y,
            },
        }
    }
}

/// Deep patch for [`RenderOptions`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<PluginsPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalesPatch>,
}

impl OptionsPatch {
    pub fn legend_position(position: LegendPosition) -> Self {
        Self::legend(LegendPatch {
            position: Some(position),
            ..Default::default()
        })
    }

    pub fn legend_display(display: bool) -> Self {
        Self::legend(LegendPatch {
            display: Some(display),
            ..Default::default()
        })
    }

    /// Toggle grid lines on one axis
    pub fn grid_display(axis: Axis, display: bool) -> Self {
        let patch = AxisPatch {
            grid: Some(GridPatch {
                display: Some(display),
                ..Default::default()
            }),
            ..Default::default()
        };
        let scales = match axis {
            Axis::X => ScalesPatch {
                x: Some(patch),
                y: None,
            },
            Axis::Y => ScalesPatch {
                x: None,
                y: Some(patch),
            },
        };
        Self {
            scales: Some(scales),
            ..Default::default()
        }
    }

    fn legend(legend: LegendPatch) -> Self {
        Self {
            plugins: Some(PluginsPatch {
                legend: Some(legend),
                title: None,
            }),
            ..Default::default()
        }
    }

    /// Title text carried by this patch, if any
    pub fn title_text(&self) -> Option<&str> {
        self.plugins
            .as_ref()
            .and_then(|plugins| plugins.title.as_ref())
            .and_then(|title| title.text.as_deref())
    }

    pub fn apply_to(self, base: &RenderOptions) -> RenderOptions {
        RenderOptions {
            responsive: self.responsive.unwrap_or(base.responsive),
            maintain_aspect_ratio: self
                .maintain_aspect_ratio
                .unwrap_or(base.maintain_aspect_ratio),
            plugins: match self.plugins {
                Some(patch) => patch.apply_to(&base.plugins),
                None => base.plugins.clone(),
            },
            scales: match self.scales {
                Some(patch) => Some(patch.apply_to(base.scales.as_ref())),
                None => base.scales.clone(),
            },
        }
    }
}

fn merge_font(patch: Option<FontSpec>, base: Option<&FontSpec>) -> Option<FontSpec> {
    match (patch, base) {
        (Some(patch), Some(base)) => Some(FontSpec {
            size: patch.size.or(base.size),
            family: patch.family.or_else(|| base.family.clone()),
        }),
        (patch, base) => patch.or_else(|| base.cloned()),
    }
}

fn merge_legend_labels(
    patch: Option<LegendLabels>,
    base: Option<&LegendLabels>,
) -> Option<LegendLabels> {
    match (patch, base) {
        (Some(patch), Some(base)) => Some(LegendLabels {
            font: merge_font(patch.font, base.font.as_ref()),
        }),
        (patch, base) => patch.or_else(|| base.cloned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_options;
    use serde_json::json;

    #[test]
    fn test_legend_patch_preserves_siblings() {
        let base = default_options();
        let merged = OptionsPatch::legend_position(LegendPosition::Bottom).apply_to(&base);

        assert_eq!(merged.plugins.legend.position, LegendPosition::Bottom);
        assert!(merged.plugins.legend.display);
        assert_eq!(merged.plugins.title, base.plugins.title);
        assert_eq!(merged.scales, base.scales);
    }

    #[test]
    fn test_grid_patch_keeps_begin_at_zero() {
        let base = default_options();
        let merged = OptionsPatch::grid_display(Axis::Y, false).apply_to(&base);

        let y = merged.scales.as_ref().unwrap().y.as_ref().unwrap();
        assert_eq!(y.begin_at_zero, Some(true));
        assert_eq!(y.grid.as_ref().unwrap().display, Some(false));

        let x = merged.scales.as_ref().unwrap().x.as_ref().unwrap();
        assert_eq!(x.grid.as_ref().unwrap().display, Some(false));
    }

    #[test]
    fn test_scales_patch_creates_missing_axis() {
        let mut base = default_options();
        base.scales = None;

        let merged = OptionsPatch::grid_display(Axis::X, true).apply_to(&base);
        let scales = merged.scales.unwrap();
        assert_eq!(scales.x.unwrap().grid.unwrap().display, Some(true));
        assert!(scales.y.is_none());
    }

    #[test]
    fn test_top_level_scalars_replace() {
        let base = default_options();
        let patch: OptionsPatch = serde_json::from_value(json!({
            "maintainAspectRatio": false
        }))
        .unwrap();

        let merged = patch.apply_to(&base);
        assert!(!merged.maintain_aspect_ratio);
        assert!(merged.responsive);
        assert_eq!(merged.plugins, base.plugins);
    }

    #[test]
    fn test_font_merges_field_by_field() {
        let mut base = default_options();
        base.plugins.title.font = Some(FontSpec {
            size: Some(18.0),
            family: Some("Inter".into()),
        });

        let patch: OptionsPatch = serde_json::from_value(json!({
            "plugins": { "title": { "font": { "size": 24 } } }
        }))
        .unwrap();

        let merged = patch.apply_to(&base);
        let font = merged.plugins.title.font.unwrap();
        assert_eq!(font.size, Some(24.0));
        assert_eq!(font.family.as_deref(), Some("Inter"));
    }

    #[test]
    fn test_series_patch_is_shallow() {
        let base = crate::defaults::default_series();
        let merged = SeriesPatch::labels(vec!["Q1".into()]).apply_to(&base);

        assert_eq!(merged.labels, vec!["Q1".to_string()]);
        assert_eq!(merged.datasets, base.datasets);
        assert!(!merged.is_consistent());
    }
}
