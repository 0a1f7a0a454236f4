//! Device trait for output backend abstraction.
//!
//! Rendered pages are backend-agnostic. A [`Device`] receives them one
//! polyline at a time, so SVG, PDF or any other vector target can be
//! driven by the same [`replay`] loop.

use super::page::RenderedPage;
use super::polyline::Polyline;
use crate::core::document::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::core::error::LinesResult;

/// A backend that can draw rendered pages.
pub trait Device {
    /// Start a page. Called once per page, in document order.
    fn begin_page(&mut self, page: &RenderedPage) -> LinesResult<()>;

    /// Draw one polyline on the current page.
    fn draw_polyline(&mut self, polyline: &Polyline) -> LinesResult<()>;

    /// Finish the current page.
    fn end_page(&mut self, page: &RenderedPage) -> LinesResult<()>;

    /// Page size in canvas units.
    fn page_bounds(&self) -> (f64, f64) {
        (f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT))
    }
}

/// Feed every page, and every polyline on it, to `device`.
pub fn replay<D: Device + ?Sized>(pages: &[RenderedPage], device: &mut D) -> LinesResult<()> {
    for page in pages {
        device.begin_page(page)?;
        for polyline in page.polylines() {
            device.draw_polyline(polyline)?;
        }
        device.end_page(page)?;
    }
    Ok(())
}

/// A device that records the operations it receives.
///
/// Useful for testing and as a reference implementation.
#[derive(Debug, Default)]
pub struct TestDevice {
    /// Recorded operations for testing
    operations: Vec<String>,
}

impl TestDevice {
    pub fn new() -> Self {
        TestDevice::default()
    }

    /// Get the recorded operations.
    pub fn operations(&self) -> &[String] {
        &self.operations
    }

    /// Clear the recorded operations.
    pub fn clear_operations(&mut self) {
        self.operations.clear();
    }
}

impl Device for TestDevice {
    fn begin_page(&mut self, page: &RenderedPage) -> LinesResult<()> {
        self.operations.push(format!(
            "begin_page({}, visible={})",
            page.index(),
            page.initially_visible()
        ));
        Ok(())
    }

    fn draw_polyline(&mut self, polyline: &Polyline) -> LinesResult<()> {
        self.operations.push(format!(
            "polyline({}, {}, {}, {} points)",
            polyline.color(),
            polyline.width(),
            polyline.opacity(),
            polyline.len()
        ));
        Ok(())
    }

    fn end_page(&mut self, page: &RenderedPage) -> LinesResult<()> {
        self.operations
            .push(format!("end_page(next={})", page.next_page()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Document;
    use crate::core::page::{Layer, Page, Segment, Stroke};
    use crate::core::pen::PenType;
    use crate::rendering::page::{RenderOptions, render_document};

    fn document() -> Document {
        let stroke = Stroke {
            pen: PenType::Marker,
            color: 1,
            reserved: 0,
            width: 2.0,
            segments: vec![
                Segment {
                    x: 1.0,
                    y: 1.0,
                    pressure: 0.0,
                    tilt: 0.0,
                    reserved: 0.0,
                };
                2
            ],
        };
        Document::from_pages(vec![
            Page::new(
                0,
                vec![Layer {
                    strokes: vec![stroke],
                }],
                (0, 0),
            ),
            Page::new(1, Vec::new(), (0, 0)),
        ])
    }

    #[test]
    fn test_replay_order() {
        let pages = render_document(&document(), &RenderOptions::default());
        let mut device = TestDevice::new();
        replay(&pages, &mut device).unwrap();

        let ops = device.operations();
        assert_eq!(ops[0], "begin_page(0, visible=true)");
        assert_eq!(ops[1], "polyline(grey, 16, 0.9, 2 points)");
        assert_eq!(ops[2], "end_page(next=1)");
        assert_eq!(ops[3], "begin_page(1, visible=false)");
        assert_eq!(ops[4], "end_page(next=0)");
        assert_eq!(ops.len(), 5);
    }

    #[test]
    fn test_default_bounds() {
        let device = TestDevice::new();
        assert_eq!(device.page_bounds(), (1404.0, 1872.0));
    }
}
