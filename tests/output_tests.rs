//! SVG and PDF output tests.


use lines_x::core::decode;
use lines_x::rendering::*;
use std::fs;
use test_utils::*;

fn rendered(builder: LinesBuilder, options: RenderOptions) -> Vec<RenderedPage> {
    let decoded = decode(&builder.build()).unwrap();
    render_document(&decoded.document, &options)
}

#[test]
fn test_write_page_svgs() {
    let dir = tempfile::tempdir().unwrap();
    let pages = rendered(all_pens_fixture(), RenderOptions::default());

    let paths = write_page_svgs(&pages, dir.path(), "notes").unwrap();
    assert_eq!(paths.len(), 3);
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(path.file_name().unwrap(), format!("notes_{}.svg", i).as_str());
        let svg = fs::read_to_string(path).unwrap();
        assert_eq!(svg.matches("<svg").count(), 1);
        assert_eq!(
            svg.matches("<polyline").count(),
            pages[i].polylines().len()
        );
    }
}

#[test]
fn test_notebook_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.svg");
    let pages = rendered(two_page_fixture(), RenderOptions::default());

    write_notebook_svg(&pages, fs::File::create(&path).unwrap()).unwrap();
    let svg = fs::read_to_string(&path).unwrap();

    assert_eq!(svg, notebook_to_svg(&pages).unwrap());
    assert!(svg.contains(r#"points="10.000,10.000 20.000,30.000 40.000,50.000""#));
    assert!(svg.contains("stroke-width:57.000"));
}

#[test]
fn test_dynamic_runs_in_svg() {
    let builder = LinesBuilder::new(1)
        .page(1)
        .layer(1)
        .stroke(0, 0, 2.0, &diagonal(10));
    let pages = rendered(builder, RenderOptions::default());

    let svg = page_to_svg(&pages[0]).unwrap();
    assert_eq!(svg.matches("<polyline").count(), 2);
    // The second run repeats the first run's last point
    assert!(svg.contains(r#"points="7.000,14.000 8.000,16.000 9.000,18.000""#));
}

#[cfg(feature = "pdf-export")]
#[test]
fn test_pdf_export_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.pdf");
    let pages = rendered(all_pens_fixture(), RenderOptions::colored());

    fs::write(&path, PdfWriter::write(&pages).unwrap()).unwrap();
    let pdf = fs::read(&path).unwrap();

    assert!(pdf.starts_with(b"%PDF-1.4"));
    let text = String::from_utf8_lossy(&pdf);
    assert_eq!(text.matches("/Type /Page ").count(), 3);
    assert!(text.contains("/Count 3"));
}
