pub mod anomaly;
pub mod cursor;
pub mod decoder;
pub mod document;
pub mod error;
pub mod page;
pub mod pen;
pub mod style;

pub use anomaly::{Anomaly, ReservedField, StrokeLocation};
pub use cursor::ByteCursor;
pub use decoder::decode;
pub use document::{CANVAS_HEIGHT, CANVAS_WIDTH, Decoded, Document, SIGNATURE};
pub use error::{FormatViolation, LinesError, LinesResult};
pub use page::{Layer, Page, Segment, Stroke};
pub use pen::{PenType, StrokeColor};
pub use style::{DYNAMIC_RUN_LENGTH, ResolvedStyle, resolve, resolve_run};
