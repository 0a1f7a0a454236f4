//! Standalone PDF output.
//!
//! Writes rendered pages as a minimal PDF 1.4 file: one page per rendered
//! page, canvas coordinates used verbatim through a y-flip, and one
//! ExtGState per distinct opacity.
//!
//! ## File Layout
//!
//! ```text
//! %PDF-1.4
//! 1 0 obj  Catalog
//! 2 0 obj  Pages
//! 3 0 obj  Page 0          4 0 obj  Contents of page 0 (FlateDecode)
//! 5 0 obj  Page 1          6 0 obj  Contents of page 1
//! ...
//! xref
//! trailer
//! %%EOF
//! ```

use super::device::{Device, replay};
use super::page::RenderedPage;
use super::polyline::Polyline;
use crate::core::document::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::core::error::LinesResult;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use rustc_hash::FxHashMap;
use std::fmt::Write as _;
use std::io::Write;

/// Content stream and resources of one page, as produced by [`PdfDevice`].
#[derive(Debug, Default)]
struct PageContent {
    ops: String,
    /// (resource name, opacity) in first-use order
    opacities: Vec<(String, f32)>,
}

/// A [`Device`] that builds PDF content streams.
#[derive(Debug, Default)]
pub struct PdfDevice {
    pages: Vec<PageContent>,
    /// Opacity bit pattern -> index into the current page's `opacities`
    gstates: FxHashMap<u32, usize>,
}

impl PdfDevice {
    pub fn new() -> Self {
        PdfDevice::default()
    }

    fn current(&mut self) -> &mut PageContent {
        if self.pages.is_empty() {
            self.pages.push(PageContent::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Returns the ExtGState name for `opacity`, registering it on first use.
    fn gstate_name(&mut self, opacity: f32) -> String {
        let key = opacity.to_bits();
        if let Some(&index) = self.gstates.get(&key) {
            return self.current().opacities[index].0.clone();
        }
        let page = self.current();
        let index = page.opacities.len();
        let name = format!("GS{}", index);
        page.opacities.push((name.clone(), opacity));
        self.gstates.insert(key, index);
        name
    }
}

impl Device for PdfDevice {
    fn begin_page(&mut self, _page: &RenderedPage) -> LinesResult<()> {
        self.pages.push(PageContent::default());
        self.gstates.clear();

        // Flip to canvas space: origin top-left, y down. Round caps and joins
        // give single-point strokes a visible dot.
        let ops = &mut self.current().ops;
        let _ = writeln!(ops, "1 0 0 -1 0 {} cm", CANVAS_HEIGHT);
        ops.push_str("1 J 1 j\n");
        Ok(())
    }

    fn draw_polyline(&mut self, polyline: &Polyline) -> LinesResult<()> {
        let Some((&(x0, y0), rest)) = polyline.points().split_first() else {
            return Ok(());
        };

        let gstate = self.gstate_name(polyline.opacity());
        let (r, g, b) = polyline.color().rgb();
        let ops = &mut self.current().ops;

        // PDF line widths cannot be negative
        let _ = writeln!(
            ops,
            "/{} gs {:.3} {:.3} {:.3} RG {:.3} w",
            gstate,
            r,
            g,
            b,
            polyline.width().max(0.0)
        );
        let _ = writeln!(ops, "{:.3} {:.3} m", x0, y0);
        if rest.is_empty() {
            let _ = writeln!(ops, "{:.3} {:.3} l", x0, y0);
        }
        for &(x, y) in rest {
            let _ = writeln!(ops, "{:.3} {:.3} l", x, y);
        }
        ops.push_str("S\n");
        Ok(())
    }

    fn end_page(&mut self, _page: &RenderedPage) -> LinesResult<()> {
        Ok(())
    }
}

/// PDF writer for rendered pages.
pub struct PdfWriter;

impl PdfWriter {
    /// Serialize `pages` as a complete PDF file.
    ///
    /// # Example
    /// ```no_run
    /// # use lines_x::core::Document;
    /// # use lines_x::rendering::{PdfWriter, RenderOptions, render_document};
    /// let data = std::fs::read("notebook.lines").unwrap();
    /// let decoded = Document::decode(&data).unwrap();
    /// let pages = render_document(&decoded.document, &RenderOptions::default());
    /// std::fs::write("notebook.pdf", PdfWriter::write(&pages)?)?;
    /// # Ok::<(), lines_x::core::LinesError>(())
    /// ```
    pub fn write(pages: &[RenderedPage]) -> LinesResult<Vec<u8>> {
        let mut device = PdfDevice::new();
        replay(pages, &mut device)?;

        let mut buffer = Vec::new();
        buffer.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let page_count = device.pages.len();
        let object_count = 2 + 2 * page_count;
        let mut offsets = Vec::with_capacity(object_count);

        // Catalog
        offsets.push(buffer.len());
        buffer.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        // Page tree
        offsets.push(buffer.len());
        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", Self::page_object(i)))
            .collect();
        write!(
            buffer,
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            page_count
        )?;

        for (i, content) in device.pages.iter().enumerate() {
            let page_obj = Self::page_object(i);
            let contents_obj = page_obj + 1;

            offsets.push(buffer.len());
            write!(
                buffer,
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /ExtGState << ",
                page_obj, CANVAS_WIDTH, CANVAS_HEIGHT
            )?;
            for (name, opacity) in &content.opacities {
                write!(
                    buffer,
                    "/{} << /Type /ExtGState /CA {:.3} >> ",
                    name, opacity
                )?;
            }
            write!(buffer, ">> >> /Contents {} 0 R >>\nendobj\n", contents_obj)?;

            let data = Self::compress(content.ops.as_bytes())?;
            offsets.push(buffer.len());
            write!(
                buffer,
                "{} 0 obj\n<< /Length {} /Filter /FlateDecode >>\nstream\n",
                contents_obj,
                data.len()
            )?;
            buffer.extend_from_slice(&data);
            buffer.extend_from_slice(b"\nendstream\nendobj\n");
        }

        let xref_offset = buffer.len();
        Self::write_xref_table(&mut buffer, &offsets)?;
        write!(
            buffer,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_offset
        )?;

        Ok(buffer)
    }

    /// Object number of the page dictionary for page `i`.
    fn page_object(i: usize) -> usize {
        3 + 2 * i
    }

    fn compress(data: &[u8]) -> LinesResult<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }

    /// Write a cross-reference table.
    ///
    /// ```text
    /// xref
    /// 0 N
    /// 0000000000 65535 f
    /// offset 00000 n   (one per object, in object order)
    /// ```
    fn write_xref_table<W: Write>(buffer: &mut W, offsets: &[usize]) -> LinesResult<()> {
        write!(buffer, "xref\n0 {}\n", offsets.len() + 1)?;
        buffer.write_all(b"0000000000 65535 f \n")?;
        for offset in offsets {
            write!(buffer, "{:010} 00000 n \n", offset)?;
        }
        Ok(())
    }
}
