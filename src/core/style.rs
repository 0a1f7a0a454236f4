//! Pen style resolution.
//!
//! Maps a stroke's pen, raw width and raw color to the style it is drawn
//! with. Dynamic pens additionally get a fresh width (and for the v2
//! ballpoint, opacity) at the start of every run of
//! [`DYNAMIC_RUN_LENGTH`] segments.

use super::page::Segment;
use super::pen::{PenType, StrokeColor};
use log::debug;

/// Number of segments sharing one computed width on dynamic pens.
pub const DYNAMIC_RUN_LENGTH: usize = 8;

const HIGHLIGHTER_WIDTH: f32 = 30.0;

/// The style a whole stroke (or one dynamic run of it) is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub color: StrokeColor,
    pub width: f32,
    pub opacity: f32,
    /// True when width/opacity are recomputed per run
    pub dynamic: bool,
}

impl ResolvedStyle {
    /// Fully transparent strokes can be skipped by backends that care.
    pub fn is_invisible(&self) -> bool {
        self.opacity == 0.0
    }
}

/// Resolves the stroke-level style.
///
/// `colored` enables the highlighter's yellow override. Color indices
/// outside the palette fall back to black; unknown pens are invisible.
pub fn resolve(pen: PenType, raw_width: f32, raw_color: u32, colored: bool) -> ResolvedStyle {
    let palette_color = StrokeColor::from_index(raw_color).unwrap_or_else(|| {
        debug!("color index {} outside palette, drawing black", raw_color);
        StrokeColor::Black
    });

    let (width, opacity, color) = match pen {
        PenType::Ballpoint | PenType::BallpointV2 => (raw_width, 1.0, palette_color),
        PenType::Fineliner | PenType::PencilThin => (
            32.0 * raw_width * raw_width - 116.0 * raw_width + 107.0,
            1.0,
            palette_color,
        ),
        PenType::Marker => (64.0 * raw_width - 112.0, 0.9, palette_color),
        PenType::Highlighter => {
            let color = if colored {
                StrokeColor::Yellow
            } else {
                palette_color
            };
            (HIGHLIGHTER_WIDTH, 0.2, color)
        }
        PenType::Eraser => (
            1280.0 * raw_width * raw_width - 4800.0 * raw_width + 4510.0,
            1.0,
            StrokeColor::White,
        ),
        PenType::PencilSharp => (16.0 * raw_width - 27.0, 0.9, palette_color),
        PenType::EraseArea => (raw_width, 0.0, palette_color),
        PenType::Unknown(value) => {
            debug!("pen {} unknown, drawing invisible", value);
            (raw_width, 0.0, palette_color)
        }
    };

    ResolvedStyle {
        color,
        width,
        opacity,
        dynamic: pen.is_dynamic(),
    }
}

/// Computes the style of the dynamic run starting at `boundary`.
///
/// `base` is the stroke-level style from [`resolve`] and `raw_width` the
/// stroke's raw width. Non-dynamic pens return `base` unchanged.
pub fn resolve_run(
    pen: PenType,
    base: &ResolvedStyle,
    raw_width: f32,
    boundary: &Segment,
) -> ResolvedStyle {
    let Segment { pressure, tilt, .. } = *boundary;
    match pen {
        PenType::Ballpoint => ResolvedStyle {
            width: 5.0 * tilt * (6.0 * raw_width - 10.0) * (1.0 + 2.0 * pressure.powi(3)),
            ..*base
        },
        PenType::BallpointV2 => ResolvedStyle {
            width: (10.0 * tilt - 2.0) * (8.0 * raw_width - 14.0),
            opacity: (pressure - 0.2).powi(2),
            ..*base
        },
        _ => *base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(pressure: f32, tilt: f32) -> Segment {
        Segment {
            x: 0.0,
            y: 0.0,
            pressure,
            tilt,
            reserved: 0.0,
        }
    }

    #[test]
    fn test_fineliner_width() {
        let style = resolve(PenType::Fineliner, 0.5, 0, false);
        assert_eq!(style.width, 57.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.color, StrokeColor::Black);
        assert!(!style.dynamic);

        let thin = resolve(PenType::PencilThin, 0.5, 1, false);
        assert_eq!(thin.width, 57.0);
        assert_eq!(thin.color, StrokeColor::Grey);
    }

    #[test]
    fn test_marker_and_sharp_pencil() {
        let marker = resolve(PenType::Marker, 2.0, 0, false);
        assert_eq!(marker.width, 16.0);
        assert_eq!(marker.opacity, 0.9);

        let pencil = resolve(PenType::PencilSharp, 2.0, 0, false);
        assert_eq!(pencil.width, 5.0);
        assert_eq!(pencil.opacity, 0.9);
    }

    #[test]
    fn test_highlighter() {
        for raw_width in [0.0, 1.5, 100.0] {
            let colored = resolve(PenType::Highlighter, raw_width, 0, true);
            assert_eq!(colored.color, StrokeColor::Yellow);
            assert_eq!(colored.width, 30.0);
            assert_eq!(colored.opacity, 0.2);
        }

        let plain = resolve(PenType::Highlighter, 1.0, 1, false);
        assert_eq!(plain.color, StrokeColor::Grey);
    }

    #[test]
    fn test_eraser_is_white() {
        for raw_color in [0, 1, 3, 17] {
            let style = resolve(PenType::Eraser, 2.0, raw_color, true);
            assert_eq!(style.color, StrokeColor::White);
            // 1280*4 - 4800*2 + 4510
            assert_eq!(style.width, 30.0);
        }
    }

    #[test]
    fn test_invisible_pens() {
        let erase = resolve(PenType::EraseArea, 3.0, 0, false);
        assert!(erase.is_invisible());
        assert_eq!(erase.width, 3.0);

        let unknown = resolve(PenType::Unknown(99), 3.0, 0, false);
        assert!(unknown.is_invisible());
        assert_eq!(unknown.width, 3.0);
    }

    #[test]
    fn test_unknown_color_falls_back_to_black() {
        let style = resolve(PenType::Marker, 2.0, 12, false);
        assert_eq!(style.color, StrokeColor::Black);
    }

    #[test]
    fn test_ballpoint_run_width() {
        let base = resolve(PenType::Ballpoint, 2.0, 0, false);
        assert!(base.dynamic);

        // 5*0.5 * (12-10) * (1 + 2*1) = 15
        let run = resolve_run(PenType::Ballpoint, &base, 2.0, &segment(1.0, 0.5));
        assert_eq!(run.width, 15.0);
        assert_eq!(run.opacity, 1.0);
    }

    #[test]
    fn test_ballpoint_v2_run_style() {
        let base = resolve(PenType::BallpointV2, 2.0, 0, false);

        // (10*0.5 - 2) * (16 - 14) = 6, (0.7 - 0.2)^2 = 0.25
        let run = resolve_run(PenType::BallpointV2, &base, 2.0, &segment(0.7, 0.5));
        assert_eq!(run.width, 6.0);
        assert!((run.opacity - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_static_pen_run_is_base() {
        let base = resolve(PenType::Fineliner, 1.0, 0, false);
        let run = resolve_run(PenType::Fineliner, &base, 1.0, &segment(1.0, 1.0));
        assert_eq!(run, base);
    }
}
