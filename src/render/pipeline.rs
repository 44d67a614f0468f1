use std::path::PathBuf;

use crate::{
    encode::{EncodeConfig, FfmpegEncoder},
    foundation::{
        core::{Fps, FrameIndex},
        error::{PaceError, PaceResult},
    },
    render::{
        raster::{FrameRGBA, Rasterizer},
        scene::{SceneOptions, build_scene},
    },
    sequence::Sequence,
};

/// Lay out and rasterize the pacer at `t` seconds.
#[tracing::instrument(skip(seq, opts, rasterizer), fields(sequence = %seq))]
pub fn render_frame(
    seq: &Sequence,
    t: f64,
    opts: &SceneOptions,
    rasterizer: &Rasterizer,
) -> PaceResult<FrameRGBA> {
    let scene = build_scene(seq, t, opts)?;
    rasterizer.render(&scene)
}

/// Options for [`render_to_mp4`].
#[derive(Clone, Debug)]
pub struct Mp4Opts {
    /// Frame rate; MP4 output needs `den == 1`.
    pub fps: Fps,
    /// Number of full cycles to render; fractional values cut the last cycle short.
    pub cycles: f64,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for Mp4Opts {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            cycles: 1.0,
            overwrite: true,
        }
    }
}

impl Mp4Opts {
    /// Frames needed to cover the requested cycles of `seq`.
    pub fn frame_count(&self, seq: &Sequence) -> u64 {
        self.fps
            .secs_to_frames_ceil(self.cycles * seq.total_duration())
    }
}

/// Summary of a finished render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames handed to the encoder.
    pub frames: u64,
}

/// Render `mp4.cycles` cycles of the pacer into an MP4 via the system `ffmpeg`.
#[tracing::instrument(skip(seq, opts, mp4, rasterizer, out_path), fields(sequence = %seq))]
pub fn render_to_mp4(
    seq: &Sequence,
    out_path: impl Into<PathBuf>,
    opts: &SceneOptions,
    mp4: &Mp4Opts,
    rasterizer: &Rasterizer,
) -> PaceResult<RenderStats> {
    if !(mp4.cycles.is_finite() && mp4.cycles > 0.0) {
        return Err(PaceError::validation("cycles must be a finite number > 0"));
    }

    // Validation runs before ffmpeg is spawned; a failed frame below drops `enc`, which reaps it.
    let mut enc = FfmpegEncoder::new(EncodeConfig {
        canvas: opts.canvas,
        fps: mp4.fps,
        out_path: out_path.into(),
        overwrite: mp4.overwrite,
        background: opts.theme.background(),
    })?;

    let total = mp4.frame_count(seq);
    tracing::info!(frames = total, "rendering mp4");
    for f in 0..total {
        let t = mp4.fps.frame_to_secs(FrameIndex(f));
        let frame = render_frame(seq, t, opts, rasterizer)?;
        enc.encode_frame(&frame)?;
    }

    let frames = enc.finish()?;
    Ok(RenderStats { frames })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
