use clap::Parser;
use lines_x::core::{Decoded, Document, PenType};
use lines_x::rendering::{RenderOptions, RenderedPage, write_notebook_svg, write_page_svgs};
use lines_x::{CANVAS_HEIGHT, CANVAS_WIDTH, LinesResult, SIGNATURE};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process;

/// Inspect and convert tablet notebook `.lines` files.
#[derive(Parser, Debug)]
#[command(name = "lines-inspect", version, about)]
struct Args {
    /// The .lines file to read
    file: PathBuf,

    /// List pages with their layer and stroke counts
    #[arg(long)]
    pages: bool,

    /// List every stroke
    #[arg(long)]
    strokes: bool,

    /// List format anomalies found while decoding
    #[arg(long)]
    anomalies: bool,

    /// Show pen usage statistics
    #[arg(long)]
    stats: bool,

    /// Draw highlighter strokes in yellow
    #[arg(long)]
    colored: bool,

    /// Write one SVG file per page into this directory
    #[arg(long, value_name = "DIR")]
    svg_dir: Option<PathBuf>,

    /// Write a single navigable SVG holding every page
    #[arg(long, value_name = "FILE")]
    notebook_svg: Option<PathBuf>,

    /// Write a PDF with one page per notebook page
    #[arg(long, value_name = "FILE")]
    pdf: Option<PathBuf>,

    /// Log decode progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Check if file exists before trying to read it
    if !args.file.exists() {
        eprintln!("Error: File not found: {}", args.file.display());
        process::exit(1);
    }

    let data = match fs::read(&args.file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
            process::exit(1);
        }
    };

    let decoded = match Document::decode(&data) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("Error decoding {}: {}", args.file.display(), e);
            process::exit(1);
        }
    };

    print_summary(&args.file, data.len(), &decoded);

    if args.pages {
        print_pages(&decoded.document);
    }
    if args.strokes {
        print_strokes(&decoded.document);
    }
    if args.anomalies {
        print_anomalies(&decoded);
    }
    if args.stats {
        print_stats(&decoded.document);
    }

    let options = RenderOptions {
        colored: args.colored,
    };
    let rendered = render(&decoded.document, &options);

    if let Err(e) = write_outputs(&args, &rendered) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

#[cfg(feature = "parallel")]
fn render(doc: &Document, options: &RenderOptions) -> Vec<RenderedPage> {
    lines_x::rendering::render_document_parallel(doc, options)
}

#[cfg(not(feature = "parallel"))]
fn render(doc: &Document, options: &RenderOptions) -> Vec<RenderedPage> {
    lines_x::rendering::render_document(doc, options)
}

fn print_summary(path: &Path, size: usize, decoded: &Decoded) {
    let doc = &decoded.document;

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║           Lines File Inspector                            ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!("\nFile: {}\n", path.display());

    println!("═══════════════ BASIC INFORMATION ═══════════════");
    println!("Signature: {}", String::from_utf8_lossy(SIGNATURE));
    println!("File Size: {} B", size);
    println!("Canvas: {} x {}", CANVAS_WIDTH, CANVAS_HEIGHT);
    println!("Page Count: {}", doc.page_count());
    println!("Stroke Count: {}", doc.stroke_count());
    println!("Segment Count: {}", doc.segment_count());
    println!("Anomalies: {}", decoded.anomalies.len());
}

fn print_pages(doc: &Document) {
    println!("\n═══════════════ PAGES ═══════════════");
    for page in doc.pages() {
        let (byte, word) = page.reserved();
        println!(
            "Page {}: {} layer(s), {} stroke(s), reserved ({}, {})",
            page.index(),
            page.layers().len(),
            page.stroke_count(),
            byte,
            word
        );
    }
}

fn print_strokes(doc: &Document) {
    println!("\n═══════════════ STROKES ═══════════════");
    for page in doc.pages() {
        for (layer_index, layer) in page.layers().iter().enumerate() {
            for (stroke_index, stroke) in layer.strokes.iter().enumerate() {
                println!(
                    "p{} l{} s{}: pen={} color={} width={:.3} segments={} reserved={:#010x}",
                    page.index(),
                    layer_index,
                    stroke_index,
                    stroke.pen,
                    stroke.color,
                    stroke.width,
                    stroke.segments.len(),
                    stroke.reserved
                );
            }
        }
    }
}

fn print_anomalies(decoded: &Decoded) {
    println!("\n═══════════════ ANOMALIES ═══════════════");
    if decoded.anomalies.is_empty() {
        println!("(none)");
    }
    for anomaly in &decoded.anomalies {
        println!("- {}", anomaly);
    }
}

fn print_stats(doc: &Document) {
    println!("\n═══════════════ PEN USAGE ═══════════════");
    let mut usage: Vec<(PenType, usize)> = doc.pen_usage().into_iter().collect();
    usage.sort_by_key(|(pen, _)| pen.raw());
    for (pen, count) in usage {
        println!("{:>14}: {}", pen.to_string(), count);
    }

    let blank = doc.pages().iter().filter(|page| page.is_blank()).count();
    println!("Blank pages: {}", blank);
}

fn write_outputs(args: &Args, rendered: &[RenderedPage]) -> LinesResult<()> {
    let stem = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());

    if let Some(dir) = &args.svg_dir {
        fs::create_dir_all(dir)?;
        let paths = write_page_svgs(rendered, dir, &stem)?;
        println!("\nWrote {} page SVG(s) to {}", paths.len(), dir.display());
    }

    if let Some(path) = &args.notebook_svg {
        write_notebook_svg(rendered, BufWriter::new(File::create(path)?))?;
        println!("\nWrote notebook SVG to {}", path.display());
    }

    if let Some(path) = &args.pdf {
        write_pdf(path, rendered)?;
    }

    Ok(())
}

#[cfg(feature = "pdf-export")]
fn write_pdf(path: &Path, rendered: &[RenderedPage]) -> LinesResult<()> {
    fs::write(path, lines_x::PdfWriter::write(rendered)?)?;
    println!("\nWrote PDF to {}", path.display());
    Ok(())
}

#[cfg(not(feature = "pdf-export"))]
fn write_pdf(path: &Path, _rendered: &[RenderedPage]) -> LinesResult<()> {
    eprintln!(
        "Skipping {}: built without the pdf-export feature",
        path.display()
    );
    Ok(())
}
