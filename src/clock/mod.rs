pub mod ease;
pub mod phase_clock;

pub use ease::Ease;
pub use phase_clock::{
    ClockReading, ClockState, breath_scale, cycle_count, phase_at, pointer_angle_deg, read_clock,
};
