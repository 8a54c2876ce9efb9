//! Browser implementations of the page seams
//!
//! The charting library is the global `Chart` constructor; the host ready
//! queue is the global `Webflow` array-like with a `push` method.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Element,
    HtmlCanvasElement,
};

use crate::dom::{CanvasSurface, ChartContainer, ChartLibrary, PageDocument};
use crate::error::{Result, RuntimeError};
use crate::initializer::{InitReport, Initializer};
use crate::payload::LibraryConfig;
use crate::scheduling::{plan, ReadyState, Trigger};
use crate::settings::RuntimeSettings;
use crate::LOG_PREFIX;

const LIBRARY_GLOBAL: &str = "Chart";
const HOST_READY_GLOBAL: &str = "Webflow";

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}

pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .ok_or_else(|| RuntimeError::Page("No window found".to_string()))?
            .document()
            .ok_or_else(|| RuntimeError::Page("No document found".to_string()))?;
        Ok(Self { document })
    }
}

impl PageDocument for WebPage {
    type Container = WebContainer;

    fn ready_state(&self) -> ReadyState {
        match self.document.ready_state().as_str() {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        }
    }

    fn find_containers(&self, selector: &str) -> Result<Vec<WebContainer>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| RuntimeError::Page(js_error(e)))?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebContainer)
            .collect())
    }
}

pub struct WebContainer(Element);

impl ChartContainer for WebContainer {
    type Canvas = WebCanvas;

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn find_canvas(&self, selector: &str) -> Option<WebCanvas> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .map(WebCanvas)
    }
}

pub struct WebCanvas(HtmlCanvasElement);

impl CanvasSurface for WebCanvas {
    type Context = CanvasRenderingContext2d;

    fn context_2d(&self) -> Option<CanvasRenderingContext2d> {
        self.0
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    }
}

/// The page's global chart constructor, if one is loaded
pub struct GlobalChartLibrary {
    constructor: Option<Function>,
}

impl GlobalChartLibrary {
    pub fn detect() -> Self {
        let constructor = Reflect::get(&js_sys::global(), &LIBRARY_GLOBAL.into())
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());
        Self { constructor }
    }
}

impl ChartLibrary<WebCanvas> for GlobalChartLibrary {
    fn is_available(&self) -> bool {
        self.constructor.is_some()
    }

    fn chart_bound(&self, canvas: &WebCanvas) -> bool {
        let Some(constructor) = &self.constructor else {
            return false;
        };

        Reflect::get(constructor, &"getChart".into())
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .and_then(|get_chart| get_chart.call1(constructor, &canvas.0).ok())
            .is_some_and(|chart| !chart.is_undefined() && !chart.is_null())
    }

    fn construct(
        &mut self,
        _canvas: &WebCanvas,
        context: CanvasRenderingContext2d,
        config: &LibraryConfig,
    ) -> std::result::Result<(), String> {
        let constructor = self
            .constructor
            .as_ref()
            .ok_or_else(|| RuntimeError::LibraryUnavailable.to_string())?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let config = serde::Serialize::serialize(config, &serializer).map_err(|e| e.to_string())?;

        Reflect::construct(constructor, &Array::of2(&context, &config))
            .map(|_| ())
            .map_err(js_error)
    }
}

/// The host's ready queue, when the host script is on the page
fn host_ready_queue() -> Option<(Object, Function)> {
    let queue = Reflect::get(&js_sys::global(), &HOST_READY_GLOBAL.into())
        .ok()
        .and_then(|value| value.dyn_into::<Object>().ok())?;
    let push = Reflect::get(&queue, &"push".into())
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())?;
    Some((queue, push))
}

fn run_pass(initializer: &Rc<RefCell<Initializer>>) -> Result<InitReport> {
    let mut library = GlobalChartLibrary::detect();
    initializer
        .borrow_mut()
        .run_with_page(WebPage::current(), &mut library)
}

fn deferred_pass(initializer: &Rc<RefCell<Initializer>>, label: &'static str) -> JsValue {
    let initializer = Rc::clone(initializer);
    Closure::once_into_js(move || {
        log::info!("{LOG_PREFIX} {label}, initializing charts...");
        // Errors, including a missing document, are logged by the initializer
        let _ = run_pass(&initializer);
    })
}

/// Arrange initialization passes for the current page.
///
/// A missing library is reported once here and nothing is scheduled.
pub fn start(settings: RuntimeSettings) -> Result<()> {
    if !GlobalChartLibrary::detect().is_available() {
        let err = RuntimeError::LibraryUnavailable;
        log::error!("{LOG_PREFIX} {err}");
        return Err(err);
    }

    let page = WebPage::current()?;
    let host_queue = host_ready_queue();
    let triggers = plan(page.ready_state(), host_queue.is_some(), &settings);
    let initializer = Rc::new(RefCell::new(Initializer::new(settings)));

    for trigger in triggers {
        match trigger {
            Trigger::Immediate => {
                let _ = run_pass(&initializer);
            }
            Trigger::ContentLoaded => {
                let options = AddEventListenerOptions::new();
                options.set_once(true);
                let callback = deferred_pass(&initializer, "Document loaded");
                page.document
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "DOMContentLoaded",
                        callback.unchecked_ref(),
                        &options,
                    )
                    .map_err(|e| RuntimeError::Page(js_error(e)))?;
            }
            Trigger::HostReady => {
                if let Some((queue, push)) = &host_queue {
                    let callback = deferred_pass(&initializer, "Host ready");
                    push.call1(queue, &callback)
                        .map_err(|e| RuntimeError::Page(js_error(e)))?;
                }
            }
        }
    }
    Ok(())
}

/// Run one pass right now with fresh state
pub fn initialize_now(settings: RuntimeSettings) -> Result<InitReport> {
    let mut library = GlobalChartLibrary::detect();
    Initializer::new(settings).run_with_page(WebPage::current(), &mut library)
}
