use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::{BezPath, Point, Vec2},
    sequence::{PhaseKind, Sequence},
};

const ARC_TOLERANCE: f64 = 0.1;

/// Angular slice of the ring owned by one step.
///
/// Angles are radians measured clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    /// Index of the step in its sequence.
    pub index: usize,
    /// Kind of the step.
    pub kind: PhaseKind,
    /// Start angle (inclusive).
    pub start: f64,
    /// End angle (exclusive).
    pub end: f64,
}

impl ArcSpan {
    /// Angular width of the span.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Partition the full circle into one span per step, proportional to step duration.
///
/// Spans are contiguous, start at 0 and the last one ends at exactly `2π`.
pub fn arc_spans(seq: &Sequence) -> Vec<ArcSpan> {
    let total = seq.total_duration();
    let last = seq.len() - 1;
    let mut cumulative = 0.0;
    seq.steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let start = cumulative;
            cumulative += step.duration / total * TAU;
            let end = if index == last { TAU } else { cumulative };
            ArcSpan {
                index,
                kind: step.kind,
                start,
                end,
            }
        })
        .collect()
}

/// Point at `angle` (clockwise from 12 o'clock) on a circle, in y-down screen space.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(angle.sin(), -angle.cos()) * radius
}

/// Closed annular sector between `outer_radius - width` and `outer_radius`.
pub fn ring_sector(center: Point, outer_radius: f64, width: f64, start: f64, end: f64) -> BezPath {
    let inner_radius = (outer_radius - width).max(0.0);
    let sweep = end - start;

    // kurbo measures from +x towards +y; shift so 0 sits at 12 o'clock.
    let outer = kurbo::Arc {
        center,
        radii: Vec2::new(outer_radius, outer_radius),
        start_angle: start - FRAC_PI_2,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    let inner = kurbo::Arc {
        center,
        radii: Vec2::new(inner_radius, inner_radius),
        start_angle: end - FRAC_PI_2,
        sweep_angle: -sweep,
        x_rotation: 0.0,
    };

    let mut path = BezPath::new();
    path.move_to(point_on_circle(center, outer_radius, start));
    path.extend(outer.append_iter(ARC_TOLERANCE));
    path.line_to(point_on_circle(center, inner_radius, end));
    path.extend(inner.append_iter(ARC_TOLERANCE));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
