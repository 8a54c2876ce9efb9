//! Initialization pass over the page
//!
//! A pass discovers every container at its start and handles each one in
//! order. Whatever happens to one container is recorded in its
//! [`ElementReport`] and never affects the others. Passes can be repeated:
//! canvases the library already tracks are skipped, so a second pass only
//! picks up containers that were added or that failed before.

use serde_json::{json, Value};

use crate::dom::{CanvasSurface, ChartContainer, ChartLibrary, PageDocument};
use crate::error::{ElementError, Result, RuntimeError};
use crate::payload::EmbeddedChart;
use crate::settings::RuntimeSettings;
use crate::LOG_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    NotStarted,
    Scanning,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementOutcome {
    Rendered,
    Skipped(ElementError),
    Failed(ElementError),
}

impl ElementOutcome {
    fn from_error(err: ElementError) -> Self {
        match err {
            ElementError::MissingConfiguration { .. }
            | ElementError::MissingCanvas { .. }
            | ElementError::AlreadyBound { .. } => ElementOutcome::Skipped(err),
            _ => ElementOutcome::Failed(err),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ElementOutcome::Rendered => "rendered",
            ElementOutcome::Skipped(_) => "skipped",
            ElementOutcome::Failed(_) => "failed",
        }
    }

    pub fn reason(&self) -> Option<&ElementError> {
        match self {
            ElementOutcome::Rendered => None,
            ElementOutcome::Skipped(err) | ElementOutcome::Failed(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementReport {
    /// Position in discovery order
    pub index: usize,
    /// Instance id, or `#n` when the container has an empty one
    pub instance: String,
    pub outcome: ElementOutcome,
}

/// Result of one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitReport {
    pub elements: Vec<ElementReport>,
}

impl InitReport {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn rendered(&self) -> usize {
        self.count(|o| matches!(o, ElementOutcome::Rendered))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ElementOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ElementOutcome::Failed(_)))
    }

    pub fn outcome(&self, instance: &str) -> Option<&ElementOutcome> {
        self.elements
            .iter()
            .find(|e| e.instance == instance)
            .map(|e| &e.outcome)
    }

    fn count(&self, pred: impl Fn(&ElementOutcome) -> bool) -> usize {
        self.elements.iter().filter(|e| pred(&e.outcome)).count()
    }

    /// Summary handed back to JavaScript callers
    pub fn to_json(&self) -> Value {
        let elements: Vec<Value> = self
            .elements
            .iter()
            .map(|e| {
                json!({
                    "index": e.index,
                    "instance": e.instance,
                    "status": e.outcome.status(),
                    "reason": e.outcome.reason().map(|r| r.to_string()),
                })
            })
            .collect();

        json!({
            "rendered": self.rendered(),
            "skipped": self.skipped(),
            "failed": self.failed(),
            "elements": elements,
        })
    }
}

pub struct Initializer {
    settings: RuntimeSettings,
    state: InitState,
    passes: u32,
}

impl Initializer {
    pub fn new(settings: RuntimeSettings) -> Self {
        Self {
            settings,
            state: InitState::NotStarted,
            passes: 0,
        }
    }

    pub fn state(&self) -> InitState {
        self.state
    }

    /// Number of passes that got past the library check
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn settings(&self) -> &RuntimeSettings {
        &self.settings
    }

    /// Run one pass over `page`.
    ///
    /// Fails only when the library is missing or the page cannot be queried;
    /// per-container problems land in the report.
    pub fn run<P, L>(&mut self, page: &P, library: &mut L) -> Result<InitReport>
    where
        P: PageDocument,
        L: ChartLibrary<<P::Container as ChartContainer>::Canvas>,
    {
        if !library.is_available() {
            let err = RuntimeError::LibraryUnavailable;
            log::error!("{LOG_PREFIX} {err}");
            return Err(err);
        }

        self.state = InitState::Scanning;
        self.passes += 1;
        let result = self.scan(page, library);
        self.state = InitState::Done;

        if let Err(err) = &result {
            log::error!("{LOG_PREFIX} {err}");
        }
        result
    }

    /// Like [`Initializer::run`], for callers that still have to acquire the
    /// page. Acquisition failures are logged the same way as pass failures.
    pub fn run_with_page<P, L>(&mut self, page: Result<P>, library: &mut L) -> Result<InitReport>
    where
        P: PageDocument,
        L: ChartLibrary<<P::Container as ChartContainer>::Canvas>,
    {
        match page {
            Ok(page) => self.run(&page, library),
            Err(err) => {
                log::error!("{LOG_PREFIX} {err}");
                Err(err)
            }
        }
    }

    fn scan<P, L>(&self, page: &P, library: &mut L) -> Result<InitReport>
    where
        P: PageDocument,
        L: ChartLibrary<<P::Container as ChartContainer>::Canvas>,
    {
        let containers = page.find_containers(&self.settings.container_selector())?;

        if containers.is_empty() {
            log::info!("{LOG_PREFIX} No charts found on this page.");
            return Ok(InitReport::default());
        }

        log::info!(
            "{LOG_PREFIX} Found {} chart(s) to initialize.",
            containers.len()
        );

        let elements = containers
            .iter()
            .enumerate()
            .map(|(index, container)| self.process(index, container, library))
            .collect();
        let report = InitReport { elements };

        log::debug!(
            "{LOG_PREFIX} pass {}: {} rendered, {} skipped, {} failed",
            self.passes,
            report.rendered(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }

    fn process<C, L>(&self, index: usize, container: &C, library: &mut L) -> ElementReport
    where
        C: ChartContainer,
        L: ChartLibrary<C::Canvas>,
    {
        let instance = container
            .attribute(&self.settings.container_id_attribute)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("#{}", index + 1));

        let outcome = match self.render(&instance, container, library) {
            Ok(()) => {
                log::info!("{LOG_PREFIX} Successfully initialized chart {instance}");
                ElementOutcome::Rendered
            }
            Err(err) => {
                match &err {
                    ElementError::AlreadyBound { .. } => log::info!("{LOG_PREFIX} {err}"),
                    ElementError::MissingConfiguration { .. }
                    | ElementError::MissingCanvas { .. } => log::warn!("{LOG_PREFIX} {err}"),
                    _ => log::error!("{LOG_PREFIX} {err}"),
                }
                ElementOutcome::from_error(err)
            }
        };

        ElementReport {
            index,
            instance,
            outcome,
        }
    }

    fn render<C, L>(
        &self,
        instance: &str,
        container: &C,
        library: &mut L,
    ) -> std::result::Result<(), ElementError>
    where
        C: ChartContainer,
        L: ChartLibrary<C::Canvas>,
    {
        let raw = container
            .attribute(&self.settings.config_attribute)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| ElementError::MissingConfiguration {
                instance: instance.to_string(),
            })?;

        let chart = EmbeddedChart::parse(&raw, self.settings.strict_validation)
            .map_err(|reason| ElementError::from_payload(instance.to_string(), reason))?;

        let canvas = container
            .find_canvas(&self.settings.canvas_selector)
            .ok_or_else(|| ElementError::MissingCanvas {
                instance: instance.to_string(),
            })?;

        if library.chart_bound(&canvas) {
            return Err(ElementError::AlreadyBound {
                instance: instance.to_string(),
            });
        }

        let context = canvas
            .context_2d()
            .ok_or_else(|| ElementError::NoDrawingSurface {
                instance: instance.to_string(),
            })?;

        library
            .construct(&canvas, context, &chart.to_library_config())
            .map_err(|message| ElementError::Construction {
                instance: instance.to_string(),
                message,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::LibraryConfig;
    use crate::scheduling::ReadyState;
    use std::collections::HashMap;

    struct Page(Vec<Container>);

    struct Container(HashMap<&'static str, &'static str>);

    struct Canvas(String);

    impl CanvasSurface for Canvas {
        type Context = ();

        fn context_2d(&self) -> Option<()> {
            Some(())
        }
    }

    impl ChartContainer for Container {
        type Canvas = Canvas;

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|v| v.to_string())
        }

        fn find_canvas(&self, _selector: &str) -> Option<Canvas> {
            self.attribute("data-chartflow-id").map(Canvas)
        }
    }

    impl PageDocument for Page {
        type Container = Container;

        fn ready_state(&self) -> ReadyState {
            ReadyState::Complete
        }

        fn find_containers(&self, _selector: &str) -> Result<Vec<Container>> {
            Ok(self
                .0
                .iter()
                .map(|c| Container(c.0.clone()))
                .collect())
        }
    }

    #[derive(Default)]
    struct Library {
        missing: bool,
        bound: Vec<String>,
    }

    impl ChartLibrary<Canvas> for Library {
        fn is_available(&self) -> bool {
            !self.missing
        }

        fn chart_bound(&self, canvas: &Canvas) -> bool {
            self.bound.contains(&canvas.0)
        }

        fn construct(
            &mut self,
            canvas: &Canvas,
            _context: (),
            _config: &LibraryConfig,
        ) -> std::result::Result<(), String> {
            self.bound.push(canvas.0.clone());
            Ok(())
        }
    }

    fn chart(id: &'static str) -> Container {
        Container(HashMap::from([
            ("data-chartflow-id", id),
            ("data-chartflow-config", r#"{"type":"bar"}"#),
        ]))
    }

    #[test]
    fn test_state_moves_to_done() {
        let mut init = Initializer::new(RuntimeSettings::default());
        assert_eq!(init.state(), InitState::NotStarted);

        let report = init
            .run(&Page(vec![chart("a")]), &mut Library::default())
            .unwrap();
        assert_eq!(init.state(), InitState::Done);
        assert_eq!(init.passes(), 1);
        assert_eq!(report.rendered(), 1);
    }

    #[test]
    fn test_missing_library_stops_before_scanning() {
        let mut init = Initializer::new(RuntimeSettings::default());
        let mut library = Library {
            missing: true,
            ..Default::default()
        };

        let err = init.run(&Page(vec![chart("a")]), &mut library).unwrap_err();
        assert_eq!(err, RuntimeError::LibraryUnavailable);
        assert_eq!(init.state(), InitState::NotStarted);
        assert!(library.bound.is_empty());
    }

    #[test]
    fn test_empty_page_is_success() {
        let mut init = Initializer::new(RuntimeSettings::default());
        let report = init.run(&Page(Vec::new()), &mut Library::default()).unwrap();
        assert!(report.is_empty());
        assert_eq!(init.state(), InitState::Done);
    }

    #[test]
    fn test_empty_instance_id_gets_positional_name() {
        let mut init = Initializer::new(RuntimeSettings::default());
        let page = Page(vec![chart("a"), chart("")]);

        let report = init.run(&page, &mut Library::default()).unwrap();
        assert_eq!(report.elements[1].instance, "#2");
    }

    #[test]
    fn test_report_json_summary() {
        let mut init = Initializer::new(RuntimeSettings::default());
        let page = Page(vec![
            chart("a"),
            Container(HashMap::from([("data-chartflow-id", "b")])),
        ]);

        let json = init.run(&page, &mut Library::default()).unwrap().to_json();
        assert_eq!(json["rendered"], 1);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["elements"][1]["status"], "skipped");
        assert_eq!(
            json["elements"][1]["reason"],
            "No configuration found for chart b"
        );
    }
}
