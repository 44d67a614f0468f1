use kurbo::Shape as _;

use crate::{
    clock::{Ease, read_clock},
    foundation::{
        core::{BezPath, Canvas, Point},
        error::{PaceError, PaceResult},
    },
    geometry::{arc_spans, point_on_circle, ring_sector},
    sequence::Sequence,
    style::{Rgba8, Theme, phase_color},
};

/// Presentation knobs for a pacer frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneOptions {
    /// Output size.
    pub canvas: Canvas,
    /// Colour scheme.
    pub theme: Theme,
    /// Curve used for the breathing scale.
    pub ease: Ease,
    /// Ring width as a fraction of the ring radius.
    pub ring_width: f64,
    /// Draw the sequence text footer.
    pub show_controls: bool,
    /// Draw the completed-cycle counter.
    pub show_cycle_count: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            theme: Theme::default(),
            ease: Ease::default(),
            ring_width: 0.08,
            show_controls: false,
            show_cycle_count: false,
        }
    }
}

/// A filled vector shape.
#[derive(Clone, Debug)]
pub struct FilledPath {
    /// Outline in canvas pixels.
    pub path: BezPath,
    /// Fill colour.
    pub color: Rgba8,
}

/// What a piece of text is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    /// Active phase label.
    PhaseLabel,
    /// Whole seconds left in the active phase.
    Countdown,
    /// Completed cycles.
    CycleCounter,
    /// Sequence text under the ring.
    Footer,
}

/// Centred text item.
#[derive(Clone, Debug)]
pub struct TextItem {
    /// Role of the text.
    pub role: TextRole,
    /// Content.
    pub text: String,
    /// Anchor (centre of the text box).
    pub position: Point,
    /// Font size in pixels.
    pub size: f64,
    /// Fill colour.
    pub color: Rgba8,
}

/// Backend-agnostic description of one pacer frame.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Canvas fill.
    pub background: Rgba8,
    /// Shapes in paint order.
    pub shapes: Vec<FilledPath>,
    /// Text in paint order, drawn after shapes.
    pub texts: Vec<TextItem>,
}

impl Scene {
    /// First text item with `role`.
    pub fn text(&self, role: TextRole) -> Option<&TextItem> {
        self.texts.iter().find(|t| t.role == role)
    }
}

/// Lay out the pacer at time `t` seconds.
///
/// The ring is sized so its largest breathing scale still fits the canvas.
pub fn build_scene(seq: &Sequence, t: f64, opts: &SceneOptions) -> PaceResult<Scene> {
    opts.canvas.validate()?;
    if !(opts.ring_width > 0.0 && opts.ring_width < 1.0) {
        return Err(PaceError::validation("ring_width must be within (0, 1)"));
    }

    let reading = read_clock(seq, t, opts.ease);
    let center = opts.canvas.center();
    let max_scale = seq
        .steps()
        .iter()
        .map(|s| s.kind.scale())
        .fold(1.0, f64::max);
    let base_radius = opts.canvas.min_side() * 0.4 / max_scale;
    let radius = base_radius * reading.scale;
    let width = radius * opts.ring_width;

    let mut shapes: Vec<FilledPath> = arc_spans(seq)
        .iter()
        .map(|span| FilledPath {
            path: ring_sector(center, radius, width, span.start, span.end),
            color: phase_color(span.kind),
        })
        .collect();

    let pointer_angle = reading.pointer_deg.rem_euclid(360.0).to_radians();
    let pointer_center = point_on_circle(center, radius - width / 2.0, pointer_angle);
    shapes.push(FilledPath {
        path: kurbo::Circle::new(pointer_center, width * 1.25).to_path(0.1),
        color: opts.theme.pointer(),
    });

    let label_size = base_radius * 0.3;
    let mut texts = vec![
        TextItem {
            role: TextRole::PhaseLabel,
            text: reading.kind.label().to_string(),
            position: center,
            size: label_size,
            color: opts.theme.label(),
        },
        TextItem {
            role: TextRole::Countdown,
            text: format!("{}", reading.state.step_remaining().ceil().max(1.0) as u64),
            position: center + kurbo::Vec2::new(0.0, label_size * 1.1),
            size: label_size * 0.5,
            color: opts.theme.muted(),
        },
    ];

    if opts.show_cycle_count {
        texts.push(TextItem {
            role: TextRole::CycleCounter,
            text: format!("cycle {}", reading.cycle.saturating_add(1)),
            position: center - kurbo::Vec2::new(0.0, label_size * 1.1),
            size: label_size * 0.4,
            color: opts.theme.muted(),
        });
    }

    if opts.show_controls {
        let footer_size = opts.canvas.min_side() * 0.035;
        texts.push(TextItem {
            role: TextRole::Footer,
            text: seq.to_string(),
            position: Point::new(center.x, f64::from(opts.canvas.height) - footer_size * 1.5),
            size: footer_size,
            color: opts.theme.muted(),
        });
    }

    Ok(Scene {
        canvas: opts.canvas,
        background: opts.theme.background(),
        shapes,
        texts,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
