use super::anomaly::Anomaly;
use super::decoder;
use super::error::LinesResult;
use super::page::Page;
use super::pen::PenType;
use rustc_hash::FxHashMap;

/// Signature every supported lines file starts with.
pub const SIGNATURE: &[u8] = b"reMarkable lines with selections and layers";

/// Canvas width in drawing units.
pub const CANVAS_WIDTH: u32 = 1404;

/// Canvas height in drawing units.
pub const CANVAS_HEIGHT: u32 = 1872;

/// A decoded lines file.
///
/// The document owns every value copied out of the input buffer; nothing
/// refers back to the raw bytes once decoding completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
}

/// The result of a successful decode: the document plus every anomaly
/// encountered on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub document: Document,
    pub anomalies: Vec<Anomaly>,
}

impl Document {
    /// Decodes a complete lines file held in memory.
    ///
    /// # Example
    /// ```no_run
    /// use lines_x::core::Document;
    ///
    /// let data = std::fs::read("notebook.lines").unwrap();
    /// let decoded = Document::decode(&data).unwrap();
    /// println!("{} pages", decoded.document.page_count());
    /// ```
    pub fn decode(data: &[u8]) -> LinesResult<Decoded> {
        decoder::decode(data)
    }

    /// Builds a document from already materialized pages.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Document { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the page at `index`, if present.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Canvas size `(width, height)` in drawing units.
    pub fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn stroke_count(&self) -> usize {
        self.pages.iter().map(Page::stroke_count).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(Page::strokes)
            .map(|stroke| stroke.segments.len())
            .sum()
    }

    /// Counts strokes per pen type across the whole document.
    pub fn pen_usage(&self) -> FxHashMap<PenType, usize> {
        let mut usage = FxHashMap::default();
        for stroke in self.pages.iter().flat_map(Page::strokes) {
            *usage.entry(stroke.pen).or_insert(0) += 1;
        }
        usage
    }

    /// Consumes the document, yielding its pages.
    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}
