//! # Lines-X: a decoder and vector renderer for tablet notebook files
//!
//! Lines-X reads the binary `.lines` format a handwriting tablet uses to
//! store notebooks (pages of layers of pen strokes) and turns each page into
//! styled vector polylines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lines_x::core::Document;
//! use lines_x::rendering::{RenderOptions, render_document, notebook_to_svg};
//!
//! let data = std::fs::read("notebook.lines")?;
//! let decoded = Document::decode(&data)?;
//!
//! for anomaly in &decoded.anomalies {
//!     eprintln!("warning: {}", anomaly);
//! }
//!
//! let pages = render_document(&decoded.document, &RenderOptions::default());
//! std::fs::write("notebook.svg", notebook_to_svg(&pages)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **Byte Cursor**: bounds-checked little-endian reads over the input
//! 2. **Decoder**: one forward pass producing an owned [`Document`]
//! 3. **Style Resolver**: pen-specific width, opacity and color
//! 4. **Renderer**: one [`RenderedPage`] per page, pure and parallelizable
//!
//! Fatal problems are [`LinesError`]s carrying the failing byte offset.
//! Recoverable ones are collected as [`Anomaly`] values next to the document.

pub mod core;
pub mod rendering;

// Re-export main types for convenience
pub use crate::core::{
    Anomaly, ByteCursor, CANVAS_HEIGHT, CANVAS_WIDTH, Decoded, Document, Layer, LinesError,
    LinesResult, Page, PenType, ResolvedStyle, SIGNATURE, Segment, Stroke, StrokeColor, decode,
};

pub use rendering::{Device, Polyline, RenderOptions, RenderedPage, render_document};

#[cfg(feature = "parallel")]
pub use rendering::render_document_parallel;

#[cfg(feature = "pdf-export")]
pub use rendering::PdfWriter;
