//! Page, canvas and charting library seams

use crate::error::Result;
use crate::payload::LibraryConfig;
use crate::scheduling::ReadyState;

/// The document the runtime scans
pub trait PageDocument {
    type Container: ChartContainer;

    fn ready_state(&self) -> ReadyState;

    /// All elements matching `selector`, in document order
    fn find_containers(&self, selector: &str) -> Result<Vec<Self::Container>>;
}

/// One marked chart container
pub trait ChartContainer {
    type Canvas: CanvasSurface;

    fn attribute(&self, name: &str) -> Option<String>;

    /// First descendant matching `selector`, if it is a canvas
    fn find_canvas(&self, selector: &str) -> Option<Self::Canvas>;
}

pub trait CanvasSurface {
    type Context;

    fn context_2d(&self) -> Option<Self::Context>;
}

/// The charting library loaded on the page
pub trait ChartLibrary<C: CanvasSurface> {
    fn is_available(&self) -> bool;

    /// Whether the library already tracks a chart on `canvas`
    fn chart_bound(&self, canvas: &C) -> bool;

    /// Construct a chart; `Err` carries the library's error message
    fn construct(
        &mut self,
        canvas: &C,
        context: C::Context,
        config: &LibraryConfig,
    ) -> std::result::Result<(), String>;
}
