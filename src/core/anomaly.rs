//! Non-fatal format deviations.
//!
//! Anomalies are collected during decode and returned next to the
//! [`Document`](super::document::Document). They never stop decoding; the
//! affected element degrades to a safe default when rendered.

use std::fmt;

/// Position of a stroke inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeLocation {
    pub page: usize,
    pub layer: usize,
    pub stroke: usize,
}

impl fmt::Display for StrokeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} layer {} stroke {}",
            self.page, self.layer, self.stroke
        )
    }
}

/// Which reserved field held an unexpected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedField {
    /// The 8-bit field following a page's layer count
    PageHeaderByte,
    /// The 16-bit field closing a page header
    PageHeaderWord,
}

impl fmt::Display for ReservedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservedField::PageHeaderByte => write!(f, "page header byte"),
            ReservedField::PageHeaderWord => write!(f, "page header word"),
        }
    }
}

/// A deviation from the expected format that decoding survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// A reserved field expected to be zero was not
    UnexpectedReserved {
        page: usize,
        field: ReservedField,
        offset: usize,
        observed: u32,
    },
    /// The stroke's pen type is not one this decoder knows; drawn invisible
    UnknownPenType {
        stroke_location: StrokeLocation,
        value: u32,
    },
    /// The stroke's color index is outside the palette; drawn black
    UnknownColor {
        stroke_location: StrokeLocation,
        value: u32,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnexpectedReserved {
                page,
                field,
                offset,
                observed,
            } => write!(
                f,
                "unexpected value {} in {} of page {} (offset {})",
                observed, field, page, offset
            ),
            Anomaly::UnknownPenType {
                stroke_location,
                value,
            } => write!(f, "unknown pen {} at {}", value, stroke_location),
            Anomaly::UnknownColor {
                stroke_location,
                value,
            } => write!(f, "unknown color index {} at {}", value, stroke_location),
        }
    }
}
