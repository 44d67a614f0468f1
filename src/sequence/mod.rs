pub mod parse;
pub mod phase;

pub use parse::{
    DEFAULT_SEQUENCE, ParseError, PhaseStep, Sequence, is_valid_sequence, parse_sequence,
};
pub use phase::PhaseKind;
