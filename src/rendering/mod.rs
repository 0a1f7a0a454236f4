//! Vector rendering layer.
//!
//! Decoded pages are rendered into backend-agnostic [`RenderedPage`]s, which
//! a [`Device`] turns into concrete output:
//! - Page rendering with per-pen styling and dynamic-width subdivision
//! - A Device trait for backend abstraction
//! - SVG and PDF backends

pub mod device;
pub mod page;
pub mod polyline;
pub mod svg;

#[cfg(feature = "pdf-export")]
pub mod pdf;

// Re-export key types
pub use device::{Device, TestDevice, replay};
pub use page::{RenderOptions, RenderedPage, render_document, render_page, render_stroke};
pub use polyline::{Point, Polyline};
pub use svg::{SvgDevice, notebook_to_svg, page_to_svg, write_notebook_svg, write_page_svgs};

#[cfg(feature = "parallel")]
pub use page::render_document_parallel;

#[cfg(feature = "pdf-export")]
pub use pdf::{PdfDevice, PdfWriter};
