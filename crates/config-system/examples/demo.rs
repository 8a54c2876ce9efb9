//! Configuration model demonstration

use chartflow_config::{
    add_point, create, presets::apply_palette_to_config, remove_point, series_summary, set_options,
    set_title, Axis, ConfigValidator, OptionsPatch, PresetManager,
};
use chartflow_shared::{ChartType, LegendPosition};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("ChartFlow Configuration Model Demo\n");

    let presets = PresetManager::new();
    for preset in presets.chart_types() {
        println!("  {:<15} {}", preset.name, preset.description);
    }
    println!();

    let cfg = create(ChartType::Bar);
    let cfg = set_title(&cfg, "Quarterly Revenue");
    let cfg = add_point(&cfg, "June", &[42.0]);
    let cfg = remove_point(&cfg, 0)?;
    let cfg = set_options(&cfg, OptionsPatch::legend_position(LegendPosition::Bottom));
    let cfg = set_options(&cfg, OptionsPatch::grid_display(Axis::X, true));
    let cfg = apply_palette_to_config(&cfg, "vivid")?;

    let summary = series_summary(&cfg.data);
    println!("Labels: {:?}", cfg.data.labels);
    println!("Points: {} Sum: {:?}", summary.points, summary.sum);

    let report = ConfigValidator::validate(&cfg);
    println!("Valid: {} Warnings: {:?}", report.is_valid, report.warnings);

    println!("\n{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
