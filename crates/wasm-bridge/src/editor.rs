//! Editor handle for the authoring UI
//!
//! Holds the configuration being edited and swaps it for the result of each
//! model operation. Structured arguments travel as JSON strings.

use std::str::FromStr;

use chartflow_config::presets::apply_palette_to_config;
use chartflow_config::{
    add_point, create, remove_point, reset, series_summary, set_dataset_colors, set_options,
    set_series, set_title, set_type, ConfigValidator, OptionsPatch, SeriesPatch,
};
use chartflow_shared::{ChartConfiguration, ChartType, ChartflowError, ColorSpec};
use serde::de::DeserializeOwned;
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::{embed_error, to_js_error, to_json};

type EditResult<T> = Result<T, ChartflowError>;

fn parse_json<T: DeserializeOwned>(json: &str) -> EditResult<T> {
    Ok(serde_json::from_str(json)?)
}

#[wasm_bindgen]
pub struct ChartEditor {
    config: ChartConfiguration,
}

impl ChartEditor {
    pub fn config(&self) -> &ChartConfiguration {
        &self.config
    }

    fn try_new(chart_type: &str) -> EditResult<Self> {
        Ok(Self {
            config: create(ChartType::from_str(chart_type)?),
        })
    }

    fn try_from_json(config_json: &str) -> EditResult<Self> {
        let config: ChartConfiguration = parse_json(config_json)?;
        let report = ConfigValidator::validate(&config);
        for warning in &report.warnings {
            log::warn!("Loaded chart {}: {}", config.id, warning);
        }
        Ok(Self { config })
    }

    fn try_set_type(&mut self, chart_type: &str) -> EditResult<()> {
        self.config = set_type(&self.config, ChartType::from_str(chart_type)?);
        Ok(())
    }

    fn try_set_series(&mut self, patch_json: &str) -> EditResult<()> {
        let patch: SeriesPatch = parse_json(patch_json)?;
        self.config = set_series(&self.config, patch);
        Ok(())
    }

    fn try_set_options(&mut self, patch_json: &str) -> EditResult<()> {
        let patch: OptionsPatch = parse_json(patch_json)?;
        self.config = set_options(&self.config, patch);
        Ok(())
    }

    fn try_remove_point(&mut self, index: usize) -> EditResult<()> {
        self.config = remove_point(&self.config, index)?;
        Ok(())
    }

    fn try_set_dataset_colors(
        &mut self,
        dataset_index: usize,
        background_json: &str,
        border_json: Option<String>,
    ) -> EditResult<()> {
        let background: ColorSpec = parse_json(background_json)?;
        let border = border_json
            .as_deref()
            .map(parse_json::<ColorSpec>)
            .transpose()?;
        self.config = set_dataset_colors(&self.config, dataset_index, background, border)?;
        Ok(())
    }

    fn try_apply_palette(&mut self, palette_id: &str) -> EditResult<()> {
        self.config = apply_palette_to_config(&self.config, palette_id)?;
        Ok(())
    }

    fn try_reset(&mut self, chart_type: Option<String>) -> EditResult<()> {
        let chart_type = chart_type.as_deref().map(ChartType::from_str).transpose()?;
        self.config = reset(&self.config, chart_type);
        Ok(())
    }

    fn summary_json(&self) -> EditResult<String> {
        let summary = series_summary(&self.config.data);
        to_json(&json!({ "points": summary.points, "sum": summary.sum }))
    }

    fn encode_json(&self) -> EditResult<String> {
        let payload = chartflow_embed::encode(&self.config).map_err(embed_error)?;
        to_json(&payload)
    }
}

#[wasm_bindgen]
impl ChartEditor {
    /// Start a new chart of the given type (`bar`, `line`, `pie`, `doughnut`)
    #[wasm_bindgen(constructor)]
    pub fn new(chart_type: &str) -> Result<ChartEditor, JsValue> {
        Self::try_new(chart_type).map_err(|e| to_js_error(e, "new"))
    }

    /// Resume editing a saved configuration
    #[wasm_bindgen]
    pub fn from_json(config_json: &str) -> Result<ChartEditor, JsValue> {
        Self::try_from_json(config_json).map_err(|e| to_js_error(e, "from_json"))
    }

    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        to_json(&self.config).map_err(|e| to_js_error(e, "to_json"))
    }

    #[wasm_bindgen]
    pub fn set_type(&mut self, chart_type: &str) -> Result<(), JsValue> {
        self.try_set_type(chart_type)
            .map_err(|e| to_js_error(e, "set_type"))
    }

    #[wasm_bindgen]
    pub fn set_title(&mut self, title: &str) {
        self.config = set_title(&self.config, title);
    }

    /// Shallow series patch: `{"labels": [...]}` and/or `{"datasets": [...]}`
    #[wasm_bindgen]
    pub fn set_series(&mut self, patch_json: &str) -> Result<(), JsValue> {
        self.try_set_series(patch_json)
            .map_err(|e| to_js_error(e, "set_series"))
    }

    /// Deep options patch, merged into the current options
    #[wasm_bindgen]
    pub fn set_options(&mut self, patch_json: &str) -> Result<(), JsValue> {
        self.try_set_options(patch_json)
            .map_err(|e| to_js_error(e, "set_options"))
    }

    #[wasm_bindgen]
    pub fn add_point(&mut self, label: &str, values: &[f64]) {
        self.config = add_point(&self.config, label, values);
    }

    #[wasm_bindgen]
    pub fn remove_point(&mut self, index: usize) -> Result<(), JsValue> {
        self.try_remove_point(index)
            .map_err(|e| to_js_error(e, "remove_point"))
    }

    /// Colors are JSON: a string for one color or an array for a sequence
    #[wasm_bindgen]
    pub fn set_dataset_colors(
        &mut self,
        dataset_index: usize,
        background_json: &str,
        border_json: Option<String>,
    ) -> Result<(), JsValue> {
        self.try_set_dataset_colors(dataset_index, background_json, border_json)
            .map_err(|e| to_js_error(e, "set_dataset_colors"))
    }

    #[wasm_bindgen]
    pub fn apply_palette(&mut self, palette_id: &str) -> Result<(), JsValue> {
        self.try_apply_palette(palette_id)
            .map_err(|e| to_js_error(e, "apply_palette"))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self, chart_type: Option<String>) -> Result<(), JsValue> {
        self.try_reset(chart_type)
            .map_err(|e| to_js_error(e, "reset"))
    }

    /// Validation report as JSON
    #[wasm_bindgen]
    pub fn validate(&self) -> Result<String, JsValue> {
        to_json(&ConfigValidator::validate(&self.config)).map_err(|e| to_js_error(e, "validate"))
    }

    /// `{"points": n, "sum": x}` for the data editor footer
    #[wasm_bindgen]
    pub fn summary(&self) -> Result<String, JsValue> {
        self.summary_json().map_err(|e| to_js_error(e, "summary"))
    }

    /// Embed payload for the current configuration
    #[wasm_bindgen]
    pub fn encode(&self) -> Result<String, JsValue> {
        self.encode_json().map_err(|e| to_js_error(e, "encode"))
    }
}
