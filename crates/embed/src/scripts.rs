//! Scripts a published page needs before embedded charts appear

pub const CHART_JS_VERSION: &str = "4.4.1";
pub const CHART_JS_CDN_URL: &str =
    "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

pub const RUNTIME_VERSION: &str = "1.0.0";
pub const RUNTIME_CDN_URL: &str =
    "https://cdn.jsdelivr.net/npm/@r2eagle/chartflow@1.0.0/dist/runtime.min.js";

pub const CHART_JS_DISPLAY_NAME: &str = "Chart.js (ChartFlow)";
pub const RUNTIME_DISPLAY_NAME: &str = "ChartFlow Runtime";

/// Step-by-step manual setup, one line per entry
pub fn setup_instructions() -> Vec<String> {
    vec![
        "SETUP REQUIRED: add scripts to Page Settings".to_string(),
        "1. Open Page Settings > Custom Code > Before </body> tag".to_string(),
        format!("2. Add the charting library: <script src=\"{CHART_JS_CDN_URL}\"></script>"),
        format!("3. Add the ChartFlow runtime after it: <script src=\"{RUNTIME_CDN_URL}\"></script>"),
        "4. Save and publish the site".to_string(),
        "Scripts are needed once per page; add them to Site Settings for site-wide charts"
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_loads_before_runtime() {
        let steps = setup_instructions();
        let library = steps.iter().position(|s| s.contains(CHART_JS_CDN_URL)).unwrap();
        let runtime = steps.iter().position(|s| s.contains(RUNTIME_CDN_URL)).unwrap();
        assert!(library < runtime);
        assert!(CHART_JS_CDN_URL.contains(CHART_JS_VERSION));
        assert!(RUNTIME_CDN_URL.contains(RUNTIME_VERSION));
    }
}
