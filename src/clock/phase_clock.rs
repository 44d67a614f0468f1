use crate::{
    clock::ease::Ease,
    sequence::{PhaseKind, Sequence},
};

/// Where a time value falls within one cycle of a sequence.
///
/// Derived on demand from `(Sequence, t)`; never stored across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockState {
    /// Index of the active step, in `[0, len)`.
    pub active_index: usize,
    /// Position within the cycle, in `[0, total_duration)`.
    pub elapsed_in_cycle: f64,
    /// Time already spent in the active step.
    pub step_elapsed: f64,
    /// Duration of the active step.
    pub step_duration: f64,
    /// Length of one full cycle.
    pub total_duration: f64,
}

impl ClockState {
    /// Seconds left in the active step.
    pub fn step_remaining(&self) -> f64 {
        (self.step_duration - self.step_elapsed).max(0.0)
    }

    /// Progress through the active step, in `[0, 1]`.
    pub fn step_progress(&self) -> f64 {
        (self.step_elapsed / self.step_duration).clamp(0.0, 1.0)
    }

    /// Progress through the whole cycle, in `[0, 1)`.
    pub fn cycle_progress(&self) -> f64 {
        self.elapsed_in_cycle / self.total_duration
    }
}

/// Locate `t` (seconds) within the looping sequence.
///
/// `t` is reduced modulo the cycle length (negative values wrap). A time exactly on a step
/// boundary belongs to the later step. If rounding leaves the walk past the final step, the last
/// step is reported. Non-finite `t` is read as `0`.
pub fn phase_at(seq: &Sequence, t: f64) -> ClockState {
    let total = seq.total_duration();
    let t = if t.is_finite() { t } else { 0.0 };
    let mut pos = t.rem_euclid(total);
    // rem_euclid can round up to `total` for tiny negative inputs.
    if pos >= total {
        pos = 0.0;
    }

    let steps = seq.steps();
    let last = steps.len() - 1;
    let mut index = 0;
    let mut remaining = pos;
    while index < last && remaining >= steps[index].duration {
        remaining -= steps[index].duration;
        index += 1;
    }

    let step_duration = steps[index].duration;
    ClockState {
        active_index: index,
        elapsed_in_cycle: pos,
        step_elapsed: remaining.clamp(0.0, step_duration),
        step_duration,
        total_duration: total,
    }
}

/// Number of completed cycles at time `t`; `0` before the first cycle ends.
pub fn cycle_count(seq: &Sequence, t: f64) -> u64 {
    if !t.is_finite() || t <= 0.0 {
        return 0;
    }
    (t / seq.total_duration()).floor() as u64
}

/// Angle of the moving pointer in degrees: 0 at `t = 0`, 360 after one cycle.
///
/// Not wrapped; callers that need `[0, 360)` reduce it themselves. Non-finite `t` is read as `0`.
pub fn pointer_angle_deg(seq: &Sequence, t: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }
    360.0 * t / seq.total_duration()
}

/// Ring scale at time `t`.
///
/// Within each step the scale eases from the previous step's scale (1.0 before the first step)
/// to the active kind's scale, and restarts at 1.0 every cycle.
pub fn breath_scale(seq: &Sequence, t: f64, ease: Ease) -> f64 {
    let state = phase_at(seq, t);
    let steps = seq.steps();
    let from = match state.active_index {
        0 => 1.0,
        i => steps[i - 1].kind.scale(),
    };
    let to = steps[state.active_index].kind.scale();
    from + (to - from) * ease.apply(state.step_progress())
}

/// Everything a presentation layer needs for one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockReading {
    /// Position within the cycle.
    pub state: ClockState,
    /// Kind of the active step.
    pub kind: PhaseKind,
    /// Completed cycles.
    pub cycle: u64,
    /// Unwrapped pointer angle in degrees.
    pub pointer_deg: f64,
    /// Breathing scale of the ring.
    pub scale: f64,
}

/// Evaluate all clock outputs for `t`.
pub fn read_clock(seq: &Sequence, t: f64, ease: Ease) -> ClockReading {
    let state = phase_at(seq, t);
    ClockReading {
        state,
        kind: seq.steps()[state.active_index].kind,
        cycle: cycle_count(seq, t),
        pointer_deg: pointer_angle_deg(seq, t),
        scale: breath_scale(seq, t, ease),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/phase_clock.rs"]
mod tests;
