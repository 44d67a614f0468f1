pub mod theme;

pub use theme::{Rgba8, Theme, phase_color};
