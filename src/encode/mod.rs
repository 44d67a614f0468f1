pub mod ffmpeg;

pub use ffmpeg::{EncodeConfig, FfmpegEncoder, ensure_parent_dir};
