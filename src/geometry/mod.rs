pub mod arc;

pub use arc::{ArcSpan, arc_spans, point_on_circle, ring_sector};
