//! breathpace renders a looping breathing-pacer guide.
//!
//! A pacer is described by a short sequence text such as `in 4 hold 7 out 8`: alternating phase
//! kinds and durations in seconds. The crate turns that text and a time value into everything a
//! presentation layer needs, and ships a CPU renderer for PNG/MP4 output.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `&str -> Sequence` ([`parse_sequence`])
//! 2. **Clock**: `Sequence + t -> ClockReading` (active phase, pointer angle, cycle, scale)
//! 3. **Scene**: `Sequence + t + SceneOptions -> Scene` (ring sectors, pointer, labels)
//! 4. **Render**: `Scene -> FrameRGBA` via an SVG document rasterized by resvg
//! 5. **Encode** (optional): stream frames to the system `ffmpeg` binary for MP4 output
//!
//! Time is always an explicit argument; nothing in the library reads a wall clock. The
//! [`Pacer`] session type wraps the play/pause policy: the sequence text is locked while playing
//! and re-parsed on every start.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clock;
mod config;
mod encode;
mod foundation;
mod geometry;
mod render;
mod sequence;
mod session;
mod style;

pub use clock::{
    ClockReading, ClockState, Ease, breath_scale, cycle_count, phase_at, pointer_angle_deg,
    read_clock,
};
pub use config::{PacerConfig, ShareLink, percent_decode, percent_encode};
pub use encode::{EncodeConfig, FfmpegEncoder, ensure_parent_dir};
pub use foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Vec2};
pub use foundation::error::{PaceError, PaceResult};
pub use geometry::{ArcSpan, arc_spans, point_on_circle, ring_sector};
pub use render::{
    FilledPath, FrameRGBA, Mp4Opts, Rasterizer, RenderStats, Scene, SceneOptions, TextItem,
    TextRole, build_scene, render_frame, render_to_mp4, scene_to_svg, write_png,
};
pub use sequence::{
    DEFAULT_SEQUENCE, ParseError, PhaseKind, PhaseStep, Sequence, is_valid_sequence,
    parse_sequence,
};
pub use session::{Pacer, PlaybackState};
pub use style::{Rgba8, Theme, phase_color};
