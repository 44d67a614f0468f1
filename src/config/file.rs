use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    clock::Ease,
    config::link::ShareLink,
    foundation::{
        core::{Canvas, Fps},
        error::{PaceError, PaceResult},
    },
    render::SceneOptions,
    sequence::DEFAULT_SEQUENCE,
    style::Theme,
};

/// Pacer settings loaded from JSON. Every field is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacerConfig {
    /// Sequence text; validated when playback or rendering starts.
    pub sequence: String,
    /// Colour scheme.
    pub theme: Theme,
    /// Show the sequence footer.
    pub show_controls: bool,
    /// Show the completed-cycle counter.
    pub show_cycle_count: bool,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frame rate (integer).
    pub fps: u32,
    /// Breathing scale curve.
    pub ease: Ease,
}

impl Default for PacerConfig {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            sequence: DEFAULT_SEQUENCE.to_string(),
            theme: Theme::default(),
            show_controls: true,
            show_cycle_count: false,
            width: canvas.width,
            height: canvas.height,
            fps: 30,
            ease: Ease::default(),
        }
    }
}

impl PacerConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> PaceResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| PaceError::serde(format!("config '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Overlay the values a share link carries.
    pub fn apply_link(&mut self, link: &ShareLink) {
        self.sequence = link.sequence.clone();
        self.theme = Theme::from_dark_flag(link.dark);
        self.show_controls = link.controls;
    }

    /// The share link describing this config.
    pub fn to_link(&self) -> ShareLink {
        ShareLink {
            sequence: self.sequence.clone(),
            dark: self.theme.is_dark(),
            controls: self.show_controls,
        }
    }

    /// Validated frame rate.
    pub fn fps(&self) -> PaceResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// Presentation options for the renderer.
    pub fn scene_options(&self) -> PaceResult<SceneOptions> {
        let canvas = Canvas {
            width: self.width,
            height: self.height,
        };
        canvas.validate()?;
        Ok(SceneOptions {
            canvas,
            theme: self.theme,
            ease: self.ease,
            show_controls: self.show_controls,
            show_cycle_count: self.show_cycle_count,
            ..SceneOptions::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/file.rs"]
mod tests;
