//! Pen and color vocabularies of the lines format.
//!
//! Pen types form a closed set plus an explicit [`PenType::Unknown`] arm, so
//! a new tool is one more variant here and one more formula in
//! [`style`](super::style).

use std::fmt;

/// The tool that drew a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenType {
    /// Pressure/tilt-sensitive ballpoint (raw value 0)
    Ballpoint,
    /// Second-generation ballpoint with pressure-driven opacity (1)
    BallpointV2,
    /// Fineliner (2)
    Fineliner,
    /// Marker (3)
    Marker,
    /// Thin pencil, drawn like the fineliner (4)
    PencilThin,
    /// Highlighter (5)
    Highlighter,
    /// Eraser strokes painted over ink (6)
    Eraser,
    /// Sharp pencil (7)
    PencilSharp,
    /// Area eraser; its outline is never visible (8)
    EraseArea,
    /// Any value this decoder does not know
    Unknown(u32),
}

impl PenType {
    /// Maps a raw pen value read from a stroke header.
    pub fn from_raw(value: u32) -> Self {
        match value {
            0 => PenType::Ballpoint,
            1 => PenType::BallpointV2,
            2 => PenType::Fineliner,
            3 => PenType::Marker,
            4 => PenType::PencilThin,
            5 => PenType::Highlighter,
            6 => PenType::Eraser,
            7 => PenType::PencilSharp,
            8 => PenType::EraseArea,
            other => PenType::Unknown(other),
        }
    }

    /// Returns the raw value as stored in the file.
    pub fn raw(self) -> u32 {
        match self {
            PenType::Ballpoint => 0,
            PenType::BallpointV2 => 1,
            PenType::Fineliner => 2,
            PenType::Marker => 3,
            PenType::PencilThin => 4,
            PenType::Highlighter => 5,
            PenType::Eraser => 6,
            PenType::PencilSharp => 7,
            PenType::EraseArea => 8,
            PenType::Unknown(value) => value,
        }
    }

    /// Dynamic pens vary width (and possibly opacity) along the stroke.
    pub fn is_dynamic(self) -> bool {
        matches!(self, PenType::Ballpoint | PenType::BallpointV2)
    }

    pub fn is_known(self) -> bool {
        !matches!(self, PenType::Unknown(_))
    }

    /// Human-readable tool name.
    pub fn name(self) -> &'static str {
        match self {
            PenType::Ballpoint => "ballpoint",
            PenType::BallpointV2 => "ballpoint-v2",
            PenType::Fineliner => "fineliner",
            PenType::Marker => "marker",
            PenType::PencilThin => "pencil-thin",
            PenType::Highlighter => "highlighter",
            PenType::Eraser => "eraser",
            PenType::PencilSharp => "pencil-sharp",
            PenType::EraseArea => "erase-area",
            PenType::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for PenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenType::Unknown(value) => write!(f, "unknown({})", value),
            known => write!(f, "{}", known.name()),
        }
    }
}

/// The fixed four-entry stroke palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrokeColor {
    #[default]
    Black,
    Grey,
    White,
    Yellow,
}

impl StrokeColor {
    /// Looks up a palette index; `None` outside 0..=3.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(StrokeColor::Black),
            1 => Some(StrokeColor::Grey),
            2 => Some(StrokeColor::White),
            3 => Some(StrokeColor::Yellow),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            StrokeColor::Black => 0,
            StrokeColor::Grey => 1,
            StrokeColor::White => 2,
            StrokeColor::Yellow => 3,
        }
    }

    /// The color token handed to vector backends.
    pub fn name(self) -> &'static str {
        match self {
            StrokeColor::Black => "black",
            StrokeColor::Grey => "grey",
            StrokeColor::White => "white",
            StrokeColor::Yellow => "yellow",
        }
    }

    /// RGB components in 0.0..=1.0.
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            StrokeColor::Black => (0.0, 0.0, 0.0),
            StrokeColor::Grey => (0.5, 0.5, 0.5),
            StrokeColor::White => (1.0, 1.0, 1.0),
            StrokeColor::Yellow => (1.0, 1.0, 0.0),
        }
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_raw_values_round_trip() {
        for raw in 0..=8 {
            let pen = PenType::from_raw(raw);
            assert!(pen.is_known());
            assert_eq!(pen.raw(), raw);
        }
    }

    #[test]
    fn test_unknown_pen_keeps_value() {
        let pen = PenType::from_raw(99);
        assert_eq!(pen, PenType::Unknown(99));
        assert_eq!(pen.raw(), 99);
        assert!(!pen.is_known());
        assert_eq!(pen.to_string(), "unknown(99)");
    }

    #[test]
    fn test_only_ballpoints_are_dynamic() {
        assert!(PenType::Ballpoint.is_dynamic());
        assert!(PenType::BallpointV2.is_dynamic());
        assert!(!PenType::Fineliner.is_dynamic());
        assert!(!PenType::Highlighter.is_dynamic());
        assert!(!PenType::Unknown(0xFFFF).is_dynamic());
    }

    #[test]
    fn test_palette() {
        assert_eq!(StrokeColor::from_index(0), Some(StrokeColor::Black));
        assert_eq!(StrokeColor::from_index(3).map(|c| c.name()), Some("yellow"));
        assert_eq!(StrokeColor::from_index(4), None);
        assert_eq!(StrokeColor::White.index(), 2);
    }
}
