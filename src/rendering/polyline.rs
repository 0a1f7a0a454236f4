//! Styled polylines, the only primitive the page renderer emits.

use crate::core::style::ResolvedStyle;
use crate::core::pen::StrokeColor;
use smallvec::SmallVec;
use std::fmt;

/// A point in canvas units.
pub type Point = (f32, f32);

/// Point storage sized so a full dynamic run plus its join point stays inline.
pub type Points = SmallVec<[Point; 9]>;

/// An open polyline drawn with a single stroke style.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Points in drawing order
    points: Points,

    /// Stroke color token
    color: StrokeColor,

    /// Stroke width in canvas units
    width: f32,

    /// 0.0 (invisible) to 1.0
    opacity: f32,
}

impl Polyline {
    /// Create an empty polyline with the given style.
    pub fn new(style: &ResolvedStyle) -> Self {
        Polyline {
            points: Points::new(),
            color: style.color,
            width: style.width,
            opacity: style.opacity,
        }
    }

    /// Append a point.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push((x, y));
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Get the bounding box `(min_x, min_y, max_x, max_y)` of the points.
    ///
    /// Stroke width is not included.
    pub fn bounding_box(&self) -> Option<(f32, f32, f32, f32)> {
        let (&(x0, y0), rest) = self.points.split_first()?;
        Some(rest.iter().fold(
            (x0, y0, x0, y0),
            |(min_x, min_y, max_x, max_y), &(x, y)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            },
        ))
    }
}

/// Formats the points as an SVG `points` attribute: `x,y x,y ...`.
impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:.3},{:.3}", x, y)?;
        }
        Ok(())
    }
}
