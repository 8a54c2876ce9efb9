//! Console diagnostics emitted by the initializer

use std::sync::{Mutex, Once};

use chartflow_runtime::{
    CanvasSurface, ChartContainer, ChartLibrary, Initializer, LibraryConfig, PageDocument,
    ReadyState, Result, RuntimeError, RuntimeSettings,
};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

fn captured_errors() -> Vec<String> {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|line| line.starts_with("ERROR"))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

struct NoCanvas;

impl CanvasSurface for NoCanvas {
    type Context = ();

    fn context_2d(&self) -> Option<()> {
        None
    }
}

struct EmptyContainer;

impl ChartContainer for EmptyContainer {
    type Canvas = NoCanvas;

    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn find_canvas(&self, _selector: &str) -> Option<NoCanvas> {
        None
    }
}

struct EmptyPage;

impl PageDocument for EmptyPage {
    type Container = EmptyContainer;

    fn ready_state(&self) -> ReadyState {
        ReadyState::Complete
    }

    fn find_containers(&self, _selector: &str) -> Result<Vec<EmptyContainer>> {
        Ok(Vec::new())
    }
}

struct AvailableLibrary;

impl ChartLibrary<NoCanvas> for AvailableLibrary {
    fn is_available(&self) -> bool {
        true
    }

    fn chart_bound(&self, _canvas: &NoCanvas) -> bool {
        false
    }

    fn construct(
        &mut self,
        _canvas: &NoCanvas,
        _context: (),
        _config: &LibraryConfig,
    ) -> std::result::Result<(), String> {
        Ok(())
    }
}

#[test]
fn test_missing_document_is_logged_once() {
    let before = captured_errors().len();

    let mut init = Initializer::new(RuntimeSettings::default());
    let missing: Result<EmptyPage> = Err(RuntimeError::Page("No document found".to_string()));
    let result = init.run_with_page(missing, &mut AvailableLibrary);

    assert!(matches!(result, Err(RuntimeError::Page(_))));
    assert_eq!(init.passes(), 0);

    let errors = captured_errors();
    let page_errors: Vec<_> = errors[before..]
        .iter()
        .filter(|line| line.contains("No document found"))
        .collect();
    assert_eq!(
        page_errors,
        vec!["ERROR ChartFlow: Page access error: No document found"]
    );

    // An available page goes through the normal pass
    let report = init.run_with_page(Ok(EmptyPage), &mut AvailableLibrary).unwrap();
    assert_eq!(report.rendered(), 0);
    assert_eq!(init.passes(), 1);
}
