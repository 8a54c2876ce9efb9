//! Pure operations over [`ChartConfiguration`]
//!
//! Every operation takes the current configuration by reference and returns
//! a new value with `updated_at` refreshed. The input is never touched, so a
//! caller holding the previous value (an undo stack, a reactive view) keeps a
//! consistent snapshot.

use chartflow_shared::{
    ChartConfiguration, ChartType, ChartflowError, ChartflowResult, ColorSpec, Series,
};
use chrono::Utc;

use crate::defaults::default_configuration;
use crate::patch::{OptionsPatch, SeriesPatch};

/// Fresh configuration with schema-valid defaults
pub fn create(chart_type: ChartType) -> ChartConfiguration {
    log::debug!("Creating {chart_type} chart configuration");
    default_configuration(chart_type)
}

/// Replace the chart type. Options that no longer apply are left in place.
pub fn set_type(cfg: &ChartConfiguration, chart_type: ChartType) -> ChartConfiguration {
    touched(ChartConfiguration {
        chart_type,
        ..cfg.clone()
    })
}

/// Shallow-merge `labels` and/or `datasets`.
///
/// Length agreement between labels and datasets is the caller's contract;
/// nothing here pads or truncates.
pub fn set_series(cfg: &ChartConfiguration, patch: SeriesPatch) -> ChartConfiguration {
    touched(ChartConfiguration {
        data: patch.apply_to(&cfg.data),
        ..cfg.clone()
    })
}

/// Deep-merge render options. A title text in the patch also becomes the
/// configuration title.
pub fn set_options(cfg: &ChartConfiguration, patch: OptionsPatch) -> ChartConfiguration {
    let title = patch
        .title_text()
        .map(str::to_string)
        .unwrap_or_else(|| cfg.title.clone());

    touched(ChartConfiguration {
        title,
        options: patch.apply_to(&cfg.options),
        ..cfg.clone()
    })
}

pub fn set_title(cfg: &ChartConfiguration, text: &str) -> ChartConfiguration {
    let mut options = cfg.options.clone();
    options.plugins.title.text = Some(text.to_string());

    touched(ChartConfiguration {
        title: text.to_string(),
        options,
        ..cfg.clone()
    })
}

/// Append a point. Dataset `i` receives `values[i]`, or `0` when fewer
/// values than datasets were supplied.
pub fn add_point(cfg: &ChartConfiguration, label: &str, values: &[f64]) -> ChartConfiguration {
    let mut labels = cfg.data.labels.clone();
    labels.push(label.to_string());

    let datasets = cfg
        .data
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let mut dataset = dataset.clone();
            dataset.data.push(values.get(index).copied().unwrap_or(0.0));
            dataset
        })
        .collect();

    touched(ChartConfiguration {
        data: Series { labels, datasets },
        ..cfg.clone()
    })
}

/// Remove the point at `index` from the labels and from every dataset
pub fn remove_point(cfg: &ChartConfiguration, index: usize) -> ChartflowResult<ChartConfiguration> {
    let len = cfg.data.labels.len();
    if index >= len {
        return Err(ChartflowError::index_out_of_range("labels", index, len));
    }

    let mut labels = cfg.data.labels.clone();
    labels.remove(index);

    let datasets = cfg
        .data
        .datasets
        .iter()
        .map(|dataset| {
            let mut dataset = dataset.clone();
            if index < dataset.data.len() {
                dataset.data.remove(index);
            }
            dataset
        })
        .collect();

    Ok(touched(ChartConfiguration {
        data: Series { labels, datasets },
        ..cfg.clone()
    }))
}

/// Replace a dataset's colors. Without `border` the border mirrors the
/// background, in the same single/sequence shape.
pub fn set_dataset_colors(
    cfg: &ChartConfiguration,
    dataset_index: usize,
    background: ColorSpec,
    border: Option<ColorSpec>,
) -> ChartflowResult<ChartConfiguration> {
    let len = cfg.data.datasets.len();
    if dataset_index >= len {
        return Err(ChartflowError::index_out_of_range(
            "datasets",
            dataset_index,
            len,
        ));
    }

    let mut datasets = cfg.data.datasets.clone();
    let dataset = &mut datasets[dataset_index];
    dataset.border_color = border.unwrap_or_else(|| background.clone());
    dataset.background_color = background;

    Ok(touched(ChartConfiguration {
        data: Series {
            labels: cfg.data.labels.clone(),
            datasets,
        },
        ..cfg.clone()
    }))
}

/// Start over from defaults, keeping the current type unless one is given
pub fn reset(cfg: &ChartConfiguration, chart_type: Option<ChartType>) -> ChartConfiguration {
    create(chart_type.unwrap_or(cfg.chart_type))
}

/// Point count and first-dataset total, as shown next to the data editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub points: usize,
    pub sum: Option<f64>,
}

pub fn series_summary(series: &Series) -> SeriesSummary {
    SeriesSummary {
        points: series.labels.len(),
        sum: series
            .datasets
            .first()
            .map(|dataset| dataset.data.iter().sum()),
    }
}

fn touched(mut cfg: ChartConfiguration) -> ChartConfiguration {
    cfg.updated_at = Utc::now();
    cfg
}
