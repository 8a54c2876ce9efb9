//! Configuration model for ChartFlow
//! Defaults, pure mutation operations, presets and validation

pub mod defaults;
pub mod model;
pub mod patch;
pub mod presets;
pub mod validation;

pub use defaults::{default_configuration, default_options, default_series, DEFAULT_COLORS};
pub use model::{
    add_point, create, remove_point, reset, series_summary, set_dataset_colors, set_options,
    set_series, set_title, set_type, SeriesSummary,
};
pub use patch::{
    Axis, AxisPatch, GridPatch, LegendPatch, OptionsPatch, PluginsPatch, ScalesPatch, SeriesPatch,
    TitlePatch,
};
pub use presets::{ChartTypePreset, ColorPalette, PresetManager};
pub use validation::{ConfigValidator, ValidationReport};
