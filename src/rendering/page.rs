//! Vector page renderer.
//!
//! Turns decoded pages into [`RenderedPage`]s: ordered, styled polylines
//! plus the paging metadata a presentation layer needs. Rendering is a pure
//! function of one page, so pages can be rendered independently.

use super::polyline::Polyline;
use crate::core::document::{CANVAS_HEIGHT, CANVAS_WIDTH, Document};
use crate::core::page::{Page, Segment, Stroke};
use crate::core::style::{self, DYNAMIC_RUN_LENGTH, ResolvedStyle};
use log::debug;

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Draw highlighter strokes yellow instead of their stored color
    pub colored: bool,
}

impl RenderOptions {
    pub fn colored() -> Self {
        RenderOptions { colored: true }
    }
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Index of the source page (0-based)
    index: usize,

    /// Whether a viewer should show this page first
    initially_visible: bool,

    /// Polylines in drawing order
    polylines: Vec<Polyline>,

    /// Page the "advance" control leads to
    next_page: usize,
}

impl RenderedPage {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Only the first page starts visible.
    pub fn initially_visible(&self) -> bool {
        self.initially_visible
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Target of the navigation control, wrapping to 0 after the last page.
    pub fn next_page(&self) -> usize {
        self.next_page
    }

    /// Canvas size `(width, height)` in drawing units.
    pub fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

/// Render state of a single stroke.
enum StrokeState {
    AwaitingFirstSegment,
    /// Static pens: one polyline for the whole stroke
    Emitting(Polyline),
    /// Dynamic pens: the currently open run
    EmittingRun(Polyline),
}

impl StrokeState {
    fn current(&mut self) -> Option<&mut Polyline> {
        match self {
            StrokeState::AwaitingFirstSegment => None,
            StrokeState::Emitting(line) | StrokeState::EmittingRun(line) => Some(line),
        }
    }

    fn close(self) -> Option<Polyline> {
        match self {
            StrokeState::AwaitingFirstSegment => None,
            StrokeState::Emitting(line) | StrokeState::EmittingRun(line) => Some(line),
        }
    }
}

/// Opens a dynamic run at `boundary`, joined to the previous run's last point.
fn open_run(
    stroke: &Stroke,
    base: &ResolvedStyle,
    boundary: &Segment,
    join: Option<(f32, f32)>,
) -> Polyline {
    let run_style = style::resolve_run(stroke.pen, base, stroke.width, boundary);
    let mut line = Polyline::new(&run_style);
    if let Some((x, y)) = join {
        line.push(x, y);
    }
    line
}

/// Renders one stroke into its polylines.
///
/// Static pens yield a single polyline; dynamic pens yield one polyline per
/// run of [`DYNAMIC_RUN_LENGTH`] segments. Strokes without segments yield
/// nothing.
pub fn render_stroke(stroke: &Stroke, options: &RenderOptions) -> Vec<Polyline> {
    let base = style::resolve(stroke.pen, stroke.width, stroke.color, options.colored);
    let mut polylines = Vec::new();
    let mut state = StrokeState::AwaitingFirstSegment;

    for (i, segment) in stroke.segments.iter().enumerate() {
        state = match state {
            StrokeState::AwaitingFirstSegment if base.dynamic => {
                StrokeState::EmittingRun(open_run(stroke, &base, segment, None))
            }
            StrokeState::AwaitingFirstSegment => StrokeState::Emitting(Polyline::new(&base)),
            StrokeState::EmittingRun(run) if i % DYNAMIC_RUN_LENGTH == 0 => {
                let join = run.last_point();
                polylines.push(run);
                StrokeState::EmittingRun(open_run(stroke, &base, segment, join))
            }
            open => open,
        };

        if let Some(line) = state.current() {
            line.push(segment.x, segment.y);
        }
    }

    polylines.extend(state.close());
    polylines
}

/// Renders one page of a document with `page_count` pages.
pub fn render_page(page: &Page, page_count: usize, options: &RenderOptions) -> RenderedPage {
    let index = page.index();
    let polylines: Vec<Polyline> = page
        .strokes()
        .flat_map(|stroke| render_stroke(stroke, options))
        .collect();

    debug!("rendered page {} into {} polyline(s)", index, polylines.len());
    RenderedPage {
        index,
        initially_visible: index == 0,
        polylines,
        next_page: (index + 1) % page_count.max(1),
    }
}

/// Renders every page in document order.
pub fn render_document(document: &Document, options: &RenderOptions) -> Vec<RenderedPage> {
    let page_count = document.page_count();
    document
        .pages()
        .iter()
        .map(|page| render_page(page, page_count, options))
        .collect()
}

/// Renders every page on the rayon thread pool.
///
/// The output is identical to [`render_document`], in document order.
#[cfg(feature = "parallel")]
pub fn render_document_parallel(
    document: &Document,
    options: &RenderOptions,
) -> Vec<RenderedPage> {
    use rayon::prelude::*;

    let page_count = document.page_count();
    document
        .pages()
        .par_iter()
        .map(|page| render_page(page, page_count, options))
        .collect()
}
