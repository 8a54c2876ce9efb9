//! Schema-valid starting values for a freshly created chart

use chartflow_shared::{
    AxisOptions, ChartConfiguration, ChartType, ColorSpec, DataSource, Dataset, GridOptions,
    LegendOptions, LegendPosition, PluginOptions, RenderOptions, ScaleOptions, Series,
    TitleOptions,
};
use chrono::Utc;
use uuid::Uuid;

pub const DEFAULT_COLORS: [&str; 8] = [
    "#3B82F6", // blue
    "#10B981", // green
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
    "#06B6D4", // cyan
    "#F97316", // orange
];

pub const DEFAULT_TITLE: &str = "New Chart";

pub fn default_series() -> Series {
    Series {
        labels: ["January", "February", "March", "April", "May"]
            .into_iter()
            .map(String::from)
            .collect(),
        datasets: vec![Dataset {
            label: "Sample Data".to_string(),
            data: vec![65.0, 59.0, 80.0, 81.0, 56.0],
            background_color: ColorSpec::single(DEFAULT_COLORS[0]),
            border_color: ColorSpec::single(DEFAULT_COLORS[0]),
            border_width: 1.0,
        }],
    }
}

pub fn default_options() -> RenderOptions {
    RenderOptions {
        responsive: true,
        maintain_aspect_ratio: true,
        plugins: PluginOptions {
            legend: LegendOptions {
                display: true,
                position: LegendPosition::Top,
                labels: None,
            },
            title: TitleOptions {
                display: true,
                text: Some(DEFAULT_TITLE.to_string()),
                font: None,
            },
        },
        scales: Some(ScaleOptions {
            y: Some(AxisOptions {
                begin_at_zero: Some(true),
                grid: Some(GridOptions {
                    display: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            x: Some(AxisOptions {
                grid: Some(GridOptions {
                    display: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }),
    }
}

/// Configuration ids look like `chart-1718031234567-3f9a1c2b`
pub fn generate_config_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("chart-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

/// Full default configuration for `chart_type`
pub fn default_configuration(chart_type: ChartType) -> ChartConfiguration {
    let now = Utc::now();
    ChartConfiguration {
        id: generate_config_id(),
        chart_type,
        title: DEFAULT_TITLE.to_string(),
        data: default_series(),
        options: default_options(),
        data_source: DataSource::manual(),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_series_is_consistent() {
        let series = default_series();
        assert_eq!(series.labels.len(), 5);
        assert!(series.is_consistent());
        assert_eq!(series.datasets[0].background_color, ColorSpec::single("#3B82F6"));
    }

    #[test]
    fn test_default_options_grid() {
        let options = default_options();
        let scales = options.scales.unwrap();
        let y = scales.y.unwrap();
        assert_eq!(y.begin_at_zero, Some(true));
        assert_eq!(y.grid.unwrap().display, Some(true));
        assert_eq!(scales.x.unwrap().grid.unwrap().display, Some(false));
        assert!(options.plugins.legend.display);
        assert!(options.plugins.title.display);
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = generate_config_id();
        let b = generate_config_id();
        assert!(a.starts_with("chart-"));
        assert_ne!(a, b);
    }
}
