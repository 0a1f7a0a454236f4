//! Property-based tests for Lines-X robustness validation.
//!
//! These tests use proptest to generate random notebooks and verify the
//! decode/render invariants.


use lines_x::core::*;
use lines_x::rendering::*;
use proptest::prelude::*;
use test_utils::*;

#[derive(Debug, Clone)]
struct StrokeSpec {
    pen: u32,
    color: u32,
    width: f32,
    segments: Vec<RawSegment>,
}

type PageSpec = Vec<Vec<StrokeSpec>>;

fn segment_strategy() -> impl Strategy<Value = RawSegment> {
    (
        -100.0f32..1500.0,
        -100.0f32..2000.0,
        0.0f32..1.0,
        0.0f32..1.0,
        any::<f32>(),
    )
        .prop_map(|(x, y, pressure, tilt, reserved)| [x, y, pressure, tilt, reserved])
}

fn stroke_strategy() -> impl Strategy<Value = StrokeSpec> {
    (
        0u32..12,
        0u32..6,
        0.0f32..5.0,
        prop::collection::vec(segment_strategy(), 0..30),
    )
        .prop_map(|(pen, color, width, segments)| StrokeSpec {
            pen,
            color,
            width,
            segments,
        })
}

fn notebook_strategy() -> impl Strategy<Value = Vec<PageSpec>> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(stroke_strategy(), 0..4), 0..3),
        1..5,
    )
}

fn build(pages: &[PageSpec]) -> LinesBuilder {
    let mut builder = LinesBuilder::new(pages.len() as u32);
    for layers in pages {
        builder = builder.page(layers.len() as u8);
        for strokes in layers {
            builder = builder.layer(strokes.len() as u32);
            for stroke in strokes {
                builder = builder.stroke(stroke.pen, stroke.color, stroke.width, &stroke.segments);
            }
        }
    }
    builder
}

/// Property: decode + render yields exactly page_count pages in order
proptest! {
    #[test]
    fn prop_render_page_count(pages in notebook_strategy()) {
        let data = build(&pages).build();
        let decoded = decode(&data).unwrap();
        prop_assert_eq!(decoded.document.page_count(), pages.len());

        let rendered = render_document(&decoded.document, &RenderOptions::default());
        prop_assert_eq!(rendered.len(), pages.len());
        for (i, page) in rendered.iter().enumerate() {
            prop_assert_eq!(page.index(), i);
            prop_assert_eq!(page.next_page(), (i + 1) % pages.len());
        }
    }
}

/// Property: every truncation inside a field reports that field
proptest! {
    #[test]
    fn prop_truncation_offset(pages in notebook_strategy(), pick in any::<prop::sample::Index>()) {
        let builder = build(&pages);
        let data = builder.build();
        let fields = builder.fields();

        let (start, width) = fields[pick.index(fields.len())];
        for cut in start..start + width {
            let err = decode(&data[..cut]).unwrap_err();
            prop_assert!(err.is_truncated());
            prop_assert_eq!(err.offset(), Some(start));
        }
    }
}

/// Property: anomalies are exactly the unknown pens and colors
proptest! {
    #[test]
    fn prop_anomaly_count(pages in notebook_strategy()) {
        let data = build(&pages).build();
        let decoded = decode(&data).unwrap();

        let strokes = pages.iter().flatten().flatten();
        let expected: usize = strokes
            .map(|s| usize::from(s.pen > 8) + usize::from(s.color > 3))
            .sum();
        prop_assert_eq!(decoded.anomalies.len(), expected);
    }
}

/// Property: polyline counts follow the pen's subdivision rule
proptest! {
    #[test]
    fn prop_polyline_counts(stroke in stroke_strategy(), colored in any::<bool>()) {
        let data = build(&[vec![vec![stroke.clone()]]]).build();
        let decoded = decode(&data).unwrap();
        let rendered = render_document(&decoded.document, &RenderOptions { colored });

        let n = stroke.segments.len();
        let expected = match (stroke.pen, n) {
            (_, 0) => 0,
            (0 | 1, n) => n.div_ceil(8),
            _ => 1,
        };
        prop_assert_eq!(rendered[0].polylines().len(), expected);
    }
}

/// Property: highlighter in colored mode and eraser ignore raw inputs
proptest! {
    #[test]
    fn prop_forced_colors(width in -10.0f32..10.0, color in 0u32..8) {
        let highlighter = resolve(PenType::Highlighter, width, color, true);
        prop_assert_eq!(highlighter.color, StrokeColor::Yellow);
        prop_assert_eq!(highlighter.opacity, 0.2);

        let eraser = resolve(PenType::Eraser, width, color, false);
        prop_assert_eq!(eraser.color, StrokeColor::White);
    }
}
