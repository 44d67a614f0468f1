pub mod pacer;

pub use pacer::{Pacer, PlaybackState};
