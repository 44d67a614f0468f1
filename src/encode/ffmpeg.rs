use std::{
    ffi::OsString,
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Canvas, Fps},
        error::{PaceError, PaceResult},
    },
    render::FrameRGBA,
    style::Rgba8,
};

/// Where and how an MP4 of pacer frames is written.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Frame size; both sides must be even for `yuv420p`.
    pub canvas: Canvas,
    /// Frame rate; must be integral.
    pub fps: Fps,
    /// Destination file.
    pub out_path: PathBuf,
    /// Replace an existing file.
    pub overwrite: bool,
    /// Colour translucent pixels are composited over; the MP4 has no alpha.
    pub background: Rgba8,
}

impl EncodeConfig {
    /// Reject settings the `libx264`/`yuv420p` stream cannot carry.
    pub fn validate(&self) -> PaceResult<()> {
        self.canvas.validate()?;
        if self.fps.num == 0 || self.fps.den != 1 {
            return Err(PaceError::validation(format!(
                "mp4 output needs a whole, non-zero frame rate, got {}/{}",
                self.fps.num, self.fps.den
            )));
        }
        let Canvas { width, height } = self.canvas;
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(PaceError::validation(format!(
                "mp4 frame size must be even on both sides, got {width}x{height}"
            )));
        }
        Ok(())
    }

    /// Arguments passed to `ffmpeg` for this output.
    fn ffmpeg_args(&self) -> Vec<OsString> {
        let Canvas { width, height } = self.canvas;
        let mut args: Vec<OsString> = [
            if self.overwrite { "-y" } else { "-n" },
            "-hide_banner",
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-video_size",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(format!("{width}x{height}").into());
        args.push("-framerate".into());
        args.push(self.fps.num.to_string().into());
        for a in [
            "-i", "-", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags", "+faststart",
        ] {
            args.push(a.into());
        }
        args.push(self.out_path.clone().into_os_string());
        args
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> PaceResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Pipes opaque RGBA frames into a system `ffmpeg` process.
///
/// Dropping an unfinished encoder kills and reaps the child.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    frames_written: u64,
}

impl FfmpegEncoder {
    /// Validate `cfg` and start `ffmpeg`.
    pub fn new(cfg: EncodeConfig) -> PaceResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;
        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(PaceError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.args(cfg.ffmpeg_args());
        tracing::debug!(out = %cfg.out_path.display(), fps = cfg.fps.num, "spawning ffmpeg");
        Self::spawn(cfg, cmd)
    }

    fn spawn(cfg: EncodeConfig, mut cmd: Command) -> PaceResult<Self> {
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                PaceError::encode("ffmpeg is required for MP4 output, but was not found on PATH")
            }
            _ => PaceError::encode(format!("failed to start ffmpeg: {e}")),
        })?;
        let stdin = child.stdin.take();
        let mut enc = Self {
            cfg,
            child: Some(child),
            stdin,
            frames_written: 0,
        };
        if enc.stdin.is_none() {
            enc.abort();
            return Err(PaceError::encode("ffmpeg stdin was not captured"));
        }
        Ok(enc)
    }

    /// Frames accepted so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Composite `frame` over the background and send it.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> PaceResult<()> {
        let Canvas { width, height } = self.cfg.canvas;
        if (frame.width, frame.height) != (width, height) {
            return Err(PaceError::validation(format!(
                "frame is {}x{} but the stream is {width}x{height}",
                frame.width, frame.height
            )));
        }

        let mut pixels = frame.to_straight_rgba8();
        composite_opaque(&mut pixels, self.cfg.background);

        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| PaceError::encode("ffmpeg input is already closed"))?;
        stdin
            .write_all(&pixels)
            .map_err(|e| PaceError::encode(format!("ffmpeg stopped reading frames: {e}")))?;
        self.frames_written += 1;
        Ok(())
    }

    /// Close the input and wait for `ffmpeg`; returns the number of frames written.
    pub fn finish(mut self) -> PaceResult<u64> {
        drop(self.stdin.take());
        let Some(child) = self.child.take() else {
            return Err(PaceError::encode("ffmpeg process already reaped"));
        };
        let output = child
            .wait_with_output()
            .map_err(|e| PaceError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        if !output.status.success() {
            return Err(PaceError::encode(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        tracing::debug!(frames = self.frames_written, "ffmpeg finished");
        Ok(self.frames_written)
    }

    fn abort(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
            tracing::debug!(
                frames = self.frames_written,
                "ffmpeg stopped before the stream was finished"
            );
        }
    }
}

impl Drop for FfmpegEncoder {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Blend straight-alpha pixels over an opaque `bg` in place.
fn composite_opaque(pixels: &mut [u8], bg: Rgba8) {
    let bg = [bg.r, bg.g, bg.b];
    for px in pixels.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a < 255 {
            for (c, b) in px[..3].iter_mut().zip(bg) {
                *c = ((u32::from(*c) * a + u32::from(b) * (255 - a) + 127) / 255) as u8;
            }
        }
        px[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
