use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{PaceError, PaceResult},
    render::{scene::Scene, svg::scene_to_svg},
};

/// Rendered pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8.
    pub data: Vec<u8>,
    /// Whether `data` is alpha-premultiplied.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// RGBA8 pixel at `(x, y)`, as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// CPU rasterizer for pacer scenes.
///
/// Owns the font database so repeated frames do not rescan system fonts.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Rasterizer using the system fonts.
    pub fn new() -> Self {
        Self::with_font_dirs(&[])
    }

    /// Rasterizer using the system fonts plus every font found under `dirs`.
    pub fn with_font_dirs(dirs: &[&Path]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in dirs {
            if dir.is_dir() {
                db.load_fonts_dir(dir);
            }
        }
        tracing::debug!(faces = db.len(), "font database ready");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Number of font faces available for labels.
    pub fn font_face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Rasterize `scene` into premultiplied RGBA8.
    pub fn render(&self, scene: &Scene) -> PaceResult<FrameRGBA> {
        let (width, height) = (scene.canvas.width, scene.canvas.height);
        let svg = scene_to_svg(scene);

        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse generated scene svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| PaceError::render("failed to allocate frame pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `frame` as a PNG, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> PaceResult<()> {
    crate::encode::ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
