//! Sequential decoder for the lines format.
//!
//! ```text
//! file    := signature u32:page_count page{page_count} trailing*
//! page    := u8:layer_count u8:reserved u16:reserved layer{layer_count}
//! layer   := u32:stroke_count stroke{stroke_count}
//! stroke  := u32:pen u32:color u32:reserved f32:width u32:segment_count segment{segment_count}
//! segment := f32:x f32:y f32:pressure f32:tilt f32:reserved
//! ```
//!
//! Records carry element counts, never byte lengths, so a page can only be
//! located by decoding everything before it. Decoding either consumes the
//! whole structure or fails; no partial document is returned.

use super::anomaly::{Anomaly, ReservedField, StrokeLocation};
use super::cursor::ByteCursor;
use super::document::{Decoded, Document, SIGNATURE};
use super::error::{FormatViolation, LinesError, LinesResult};
use super::page::{Layer, Page, Segment, Stroke};
use super::pen::{PenType, StrokeColor};
use log::{debug, trace, warn};

/// Smallest encoded size of each record, used to bound pre-allocation.
const PAGE_HEADER_SIZE: usize = 4;
const LAYER_HEADER_SIZE: usize = 4;
const STROKE_HEADER_SIZE: usize = 20;
const SEGMENT_SIZE: usize = 20;

/// Decodes a complete lines file.
///
/// Bytes after the last page are ignored.
pub fn decode(data: &[u8]) -> LinesResult<Decoded> {
    let mut decoder = Decoder::new(data);
    let page_count = decoder.read_header()?;
    debug!("decoding {} page(s) from {} bytes", page_count, data.len());

    let mut pages = decoder.with_capacity(page_count as usize, PAGE_HEADER_SIZE);
    for index in 0..page_count as usize {
        pages.push(decoder.read_page(index)?);
    }

    if !decoder.cursor.is_exhausted() {
        debug!(
            "ignoring {} trailing byte(s) after last page",
            decoder.cursor.remaining()
        );
    }

    Ok(Decoded {
        document: Document::from_pages(pages),
        anomalies: decoder.anomalies,
    })
}

struct Decoder<'a> {
    cursor: ByteCursor<'a>,
    anomalies: Vec<Anomaly>,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Decoder {
            cursor: ByteCursor::new(data),
            anomalies: Vec::new(),
        }
    }

    /// Counts are untrusted; never reserve more than the remaining bytes
    /// could possibly hold.
    fn with_capacity<T>(&self, count: usize, record_size: usize) -> Vec<T> {
        Vec::with_capacity(count.min(self.cursor.remaining() / record_size))
    }

    fn record(&mut self, anomaly: Anomaly) {
        warn!("{}", anomaly);
        self.anomalies.push(anomaly);
    }

    /// Reads the signature and page count.
    fn read_header(&mut self) -> LinesResult<u32> {
        let signature = self.cursor.read_bytes(SIGNATURE.len())?;
        if signature != SIGNATURE {
            return Err(LinesError::Format {
                offset: 0,
                reason: FormatViolation::BadSignature,
            });
        }

        let count_offset = self.cursor.pos();
        let page_count = self.cursor.read_u32()?;
        if page_count == 0 {
            return Err(LinesError::Format {
                offset: count_offset,
                reason: FormatViolation::ZeroPages,
            });
        }
        Ok(page_count)
    }

    fn read_page(&mut self, page: usize) -> LinesResult<Page> {
        let layer_count = self.cursor.read_u8()?;

        let byte_offset = self.cursor.pos();
        let reserved_byte = self.cursor.read_u8()?;
        let word_offset = self.cursor.pos();
        let reserved_word = self.cursor.read_u16()?;

        if reserved_byte != 0 {
            self.record(Anomaly::UnexpectedReserved {
                page,
                field: ReservedField::PageHeaderByte,
                offset: byte_offset,
                observed: u32::from(reserved_byte),
            });
        }
        if reserved_word != 0 {
            self.record(Anomaly::UnexpectedReserved {
                page,
                field: ReservedField::PageHeaderWord,
                offset: word_offset,
                observed: u32::from(reserved_word),
            });
        }

        let mut layers = self.with_capacity(layer_count as usize, LAYER_HEADER_SIZE);
        for layer in 0..layer_count as usize {
            layers.push(self.read_layer(page, layer)?);
        }

        trace!("page {}: {} layer(s)", page, layers.len());
        Ok(Page::new(page, layers, (reserved_byte, reserved_word)))
    }

    fn read_layer(&mut self, page: usize, layer: usize) -> LinesResult<Layer> {
        let stroke_count = self.cursor.read_u32()? as usize;

        let mut strokes = self.with_capacity(stroke_count, STROKE_HEADER_SIZE);
        for stroke in 0..stroke_count {
            let location = StrokeLocation {
                page,
                layer,
                stroke,
            };
            strokes.push(self.read_stroke(location)?);
        }
        Ok(Layer { strokes })
    }

    fn read_stroke(&mut self, location: StrokeLocation) -> LinesResult<Stroke> {
        let pen = PenType::from_raw(self.cursor.read_u32()?);
        let color = self.cursor.read_u32()?;
        let reserved = self.cursor.read_u32()?;
        let width = self.cursor.read_f32()?;
        let segment_count = self.cursor.read_u32()? as usize;

        // Segment layout does not depend on the pen, so unknown pens can be
        // skipped over safely.
        if let PenType::Unknown(value) = pen {
            self.record(Anomaly::UnknownPenType {
                stroke_location: location,
                value,
            });
        }
        if StrokeColor::from_index(color).is_none() {
            self.record(Anomaly::UnknownColor {
                stroke_location: location,
                value: color,
            });
        }

        let mut segments = self.with_capacity(segment_count, SEGMENT_SIZE);
        for _ in 0..segment_count {
            segments.push(self.read_segment()?);
        }

        trace!(
            "{}: pen {} color {} width {} with {} segment(s)",
            location,
            pen,
            color,
            width,
            segments.len()
        );
        Ok(Stroke {
            pen,
            color,
            reserved,
            width,
            segments,
        })
    }

    fn read_segment(&mut self) -> LinesResult<Segment> {
        Ok(Segment {
            x: self.cursor.read_f32()?,
            y: self.cursor.read_f32()?,
            pressure: self.cursor.read_f32()?,
            tilt: self.cursor.read_f32()?,
            reserved: self.cursor.read_f32()?,
        })
    }
}
