//! Configuration validation utilities

use chartflow_shared::{ChartConfiguration, ChartflowError, ChartflowResult, ColorSpec, Series};
use serde::{Deserialize, Serialize};

/// Outcome of a validation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Configuration validator with structural checks.
///
/// The model operations never call this; it is for callers that want to
/// check a configuration before embedding it.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Collect every problem with the configuration
    pub fn validate(config: &ChartConfiguration) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        Self::validate_series(&config.data, &mut errors, &mut warnings);

        if !config.title_in_sync() {
            errors.push(format!(
                "Title '{}' does not match title plugin text {:?}",
                config.title, config.options.plugins.title.text
            ));
        }

        if config.options.scales.is_some() && !config.chart_type.uses_axes() {
            warnings.push(format!(
                "Scales are ignored for {} charts",
                config.chart_type
            ));
        }

        if config.updated_at < config.created_at {
            errors.push("updatedAt is earlier than createdAt".to_string());
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// First structural error, if any
    pub fn check(config: &ChartConfiguration) -> ChartflowResult<()> {
        if let Some(dataset) = config.data.first_length_mismatch() {
            return Err(ChartflowError::SeriesLengthMismatch {
                dataset,
                expected: config.data.labels.len(),
                actual: config.data.datasets[dataset].data.len(),
            });
        }

        let report = Self::validate(config);
        match report.errors.into_iter().next() {
            Some(message) => Err(ChartflowError::InvalidConfig {
                message,
                field: None,
            }),
            None => Ok(()),
        }
    }

    fn validate_series(series: &Series, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        if series.labels.is_empty() {
            warnings.push("Chart has no data points".to_string());
        }

        if series.datasets.is_empty() {
            warnings.push("Chart has no datasets".to_string());
        }

        let expected = series.labels.len();
        for (index, dataset) in series.datasets.iter().enumerate() {
            if dataset.data.len() != expected {
                errors.push(format!(
                    "Dataset {} ('{}') has {} values but there are {} labels",
                    index,
                    dataset.label,
                    dataset.data.len(),
                    expected
                ));
            }

            if dataset.data.iter().any(|value| !value.is_finite()) {
                errors.push(format!(
                    "Dataset {index} contains a non-finite value"
                ));
            }

            if dataset.border_width < 0.0 {
                errors.push(format!(
                    "Invalid border width: {}. Must be zero or greater",
                    dataset.border_width
                ));
            }

            for (name, colors) in [
                ("background", &dataset.background_color),
                ("border", &dataset.border_color),
            ] {
                if let ColorSpec::Sequence(colors) = colors {
                    if colors.len() < dataset.data.len() {
                        warnings.push(format!(
                            "Dataset {} has {} {} colors for {} values",
                            index,
                            colors.len(),
                            name,
                            dataset.data.len()
                        ));
                    }
                }
            }
        }
    }
}
