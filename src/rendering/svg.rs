//! SVG output.
//!
//! Two layouts are supported: one standalone SVG per page, or a single
//! notebook SVG holding every page as a group, with a click-to-advance
//! overlay that walks the pages' navigation targets.

use super::device::{Device, replay};
use super::page::RenderedPage;
use super::polyline::Polyline;
use crate::core::document::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::core::error::LinesResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const PAGE_SCRIPT: &str = r#"<script type="application/ecmascript"> <![CDATA[
    var visiblePage = '{first}';
    function goToPage(page) {
        document.getElementById(visiblePage).setAttribute('style', 'display: none');
        document.getElementById(page).setAttribute('style', 'display: inline');
        visiblePage = page;
    }
]]> </script>
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Standalone,
    Notebook,
}

/// A [`Device`] that writes SVG markup to any [`Write`] sink.
pub struct SvgDevice<W: Write> {
    out: W,
    layout: Layout,
}

impl<W: Write> SvgDevice<W> {
    /// One `<svg>` document per page. Intended for a single page per sink.
    pub fn standalone(out: W) -> Self {
        SvgDevice {
            out,
            layout: Layout::Standalone,
        }
    }

    /// A single `<svg>` document with one group per page.
    ///
    /// `first_visible` is the index of the page shown on load.
    pub fn notebook(mut out: W, first_visible: usize) -> LinesResult<Self> {
        write_svg_open(&mut out)?;
        out.write_all(
            PAGE_SCRIPT
                .replace("{first}", &format!("p{}", first_visible))
                .as_bytes(),
        )?;
        Ok(SvgDevice {
            out,
            layout: Layout::Notebook,
        })
    }

    /// Close the document and hand back the sink.
    pub fn finish(mut self) -> LinesResult<W> {
        if self.layout == Layout::Notebook {
            self.out.write_all(b"</svg>\n")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

fn write_svg_open<W: Write>(out: &mut W) -> LinesResult<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" height="{}" width="{}">"#,
        CANVAS_HEIGHT, CANVAS_WIDTH
    )?;
    Ok(())
}

impl<W: Write> Device for SvgDevice<W> {
    fn begin_page(&mut self, page: &RenderedPage) -> LinesResult<()> {
        match self.layout {
            Layout::Standalone => write_svg_open(&mut self.out),
            Layout::Notebook => {
                let display = if page.initially_visible() {
                    "inline"
                } else {
                    "none"
                };
                writeln!(
                    self.out,
                    r#"<g id="p{}" style="display:{}">"#,
                    page.index(),
                    display
                )?;
                Ok(())
            }
        }
    }

    fn draw_polyline(&mut self, polyline: &Polyline) -> LinesResult<()> {
        writeln!(
            self.out,
            r#"<polyline style="fill:none;stroke:{};stroke-width:{:.3};opacity:{:.3}" points="{}" />"#,
            polyline.color(),
            polyline.width(),
            polyline.opacity(),
            polyline
        )?;
        Ok(())
    }

    fn end_page(&mut self, page: &RenderedPage) -> LinesResult<()> {
        match self.layout {
            Layout::Standalone => self.out.write_all(b"</svg>\n")?,
            Layout::Notebook => {
                writeln!(
                    self.out,
                    r#"<rect x="0" y="0" width="{}" height="{}" fill-opacity="0" onclick="goToPage('p{}')" />"#,
                    CANVAS_WIDTH,
                    CANVAS_HEIGHT,
                    page.next_page()
                )?;
                self.out.write_all(b"</g>\n")?;
            }
        }
        Ok(())
    }
}

/// Serializes one page as a standalone SVG document.
pub fn page_to_svg(page: &RenderedPage) -> LinesResult<String> {
    let mut device = SvgDevice::standalone(Vec::new());
    replay(std::slice::from_ref(page), &mut device)?;
    let bytes = device.finish()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serializes all pages into a single navigable SVG document.
pub fn notebook_to_svg(pages: &[RenderedPage]) -> LinesResult<String> {
    let mut buffer = Vec::new();
    write_notebook_svg(pages, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes all pages as a single navigable SVG document to `out`.
pub fn write_notebook_svg<W: Write>(pages: &[RenderedPage], out: W) -> LinesResult<()> {
    let first_visible = pages
        .iter()
        .find(|page| page.initially_visible())
        .map_or(0, RenderedPage::index);

    let mut device = SvgDevice::notebook(out, first_visible)?;
    replay(pages, &mut device)?;
    device.finish()?;
    Ok(())
}

/// Writes `<stem>_<index>.svg` for every page into `dir`.
///
/// Returns the written paths in page order.
pub fn write_page_svgs(
    pages: &[RenderedPage],
    dir: &Path,
    stem: &str,
) -> LinesResult<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(pages.len());
    for page in pages {
        let path = dir.join(format!("{}_{}.svg", stem, page.index()));
        let mut device = SvgDevice::standalone(BufWriter::new(File::create(&path)?));
        replay(std::slice::from_ref(page), &mut device)?;
        device.finish()?;
        paths.push(path);
    }
    Ok(paths)
}
