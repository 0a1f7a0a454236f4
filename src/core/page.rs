use super::pen::PenType;

/// One sampled point of a stroke.
///
/// Positions are canvas units and are not validated against the canvas
/// bounds. `reserved` is kept verbatim; its meaning is undocumented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x: f32,
    pub y: f32,
    /// Nominally 0.0..=1.0
    pub pressure: f32,
    pub tilt: f32,
    pub reserved: f32,
}

/// One continuous pen gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// The tool that drew the stroke
    pub pen: PenType,
    /// Raw palette index; values outside 0..=3 are kept as read
    pub color: u32,
    /// Opaque word between color and width, usually 0
    pub reserved: u32,
    /// Raw width; its meaning depends on the pen
    pub width: f32,
    pub segments: Vec<Segment>,
}

impl Stroke {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A drawing layer. Layers carry no styling of their own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    pub strokes: Vec<Stroke>,
}

/// A single notebook page.
///
/// Pages are fully materialized during decode and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The page index (0-based)
    page_index: usize,

    /// Layers in drawing order
    layers: Vec<Layer>,

    /// The two reserved header fields, expected to be zero
    reserved: (u8, u16),
}

impl Page {
    /// Creates a new Page.
    ///
    /// # Arguments
    /// * `page_index` - The 0-based index of this page in the document
    /// * `layers` - The page's layers in drawing order
    /// * `reserved` - The reserved header fields as read
    pub fn new(page_index: usize, layers: Vec<Layer>, reserved: (u8, u16)) -> Self {
        Page {
            page_index,
            layers,
            reserved,
        }
    }

    /// Returns the page index (0-based).
    pub fn index(&self) -> usize {
        self.page_index
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the reserved header fields as read from the stream.
    pub fn reserved(&self) -> (u8, u16) {
        self.reserved
    }

    /// Iterates over every stroke on the page, layer by layer.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.layers.iter().flat_map(|layer| layer.strokes.iter())
    }

    pub fn stroke_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.strokes.len()).sum()
    }

    /// True when the page has no strokes at all.
    pub fn is_blank(&self) -> bool {
        self.stroke_count() == 0
    }
}
