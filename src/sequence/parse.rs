use std::str::FromStr;

use crate::sequence::phase::PhaseKind;

/// Sequence used when no other source provides one.
pub const DEFAULT_SEQUENCE: &str = "in 4 hold 7 out 8";

/// Why a sequence text was rejected.
///
/// Token positions are 0-based indices into the space-separated token list.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    /// Tokens must come in kind/duration pairs.
    #[error("expected kind/duration pairs, got {count} tokens")]
    OddTokenCount {
        /// Number of tokens after splitting on spaces.
        count: usize,
    },

    /// A kind token is not one of `in`, `hold`, `out`.
    #[error("unknown phase kind '{token}' at token {position}")]
    UnknownKind {
        /// Offending token.
        token: String,
        /// Token index.
        position: usize,
    },

    /// A duration token is not a finite number greater than zero.
    #[error("invalid duration '{token}' at token {position}: expected a finite number > 0")]
    InvalidDuration {
        /// Offending token.
        token: String,
        /// Token index.
        position: usize,
    },

    /// A sequence needs at least one step.
    #[error("sequence must contain at least one step")]
    Empty,

    /// Every duration is finite but the cycle length overflows.
    #[error("total duration of {steps} steps is not a finite number")]
    TotalOverflow {
        /// Number of steps summed.
        steps: usize,
    },
}

/// A single phase with its duration in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseStep {
    /// Which phase this step is.
    pub kind: PhaseKind,
    /// Duration in seconds.
    pub duration: f64,
}

impl PhaseStep {
    /// Shorthand constructor; validation happens when the step joins a [`Sequence`].
    pub fn new(kind: PhaseKind, duration: f64) -> Self {
        Self { kind, duration }
    }
}

/// Ordered, non-empty list of steps describing one full breathing cycle.
///
/// Every duration and the total are finite and positive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    steps: Vec<PhaseStep>,
    total: f64,
}

impl Sequence {
    /// Build a sequence from already-typed steps.
    pub fn new(steps: Vec<PhaseStep>) -> Result<Self, ParseError> {
        if steps.is_empty() {
            return Err(ParseError::Empty);
        }
        for (i, step) in steps.iter().enumerate() {
            if !valid_duration(step.duration) {
                return Err(ParseError::InvalidDuration {
                    token: step.duration.to_string(),
                    position: i * 2 + 1,
                });
            }
        }
        let total: f64 = steps.iter().map(|s| s.duration).sum();
        if !total.is_finite() {
            return Err(ParseError::TotalOverflow { steps: steps.len() });
        }
        Ok(Self { steps, total })
    }

    /// Steps in cycle order.
    pub fn steps(&self) -> &[PhaseStep] {
        &self.steps
    }

    /// Number of steps (always >= 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Length of one cycle in seconds.
    pub fn total_duration(&self) -> f64 {
        self.total
    }

    /// Cycle-relative time at which each step starts.
    pub fn step_starts(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.steps
            .iter()
            .map(|s| {
                let start = acc;
                acc += s.duration;
                start
            })
            .collect()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        let steps = vec![
            PhaseStep::new(PhaseKind::Inhale, 4.0),
            PhaseStep::new(PhaseKind::Hold, 7.0),
            PhaseStep::new(PhaseKind::Exhale, 8.0),
        ];
        Self { steps, total: 19.0 }
    }
}

/// Canonical text form; parses back to an equal sequence.
impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", step.kind, step.duration)?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequence(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_sequence(&value)
    }
}

impl From<Sequence> for String {
    fn from(value: Sequence) -> Self {
        value.to_string()
    }
}

/// Parse `kind duration kind duration ...` into a [`Sequence`].
///
/// Tokens are split on the literal space character with no trimming, so leading, trailing or
/// doubled spaces produce empty tokens and are rejected.
pub fn parse_sequence(text: &str) -> Result<Sequence, ParseError> {
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() % 2 != 0 {
        return Err(ParseError::OddTokenCount {
            count: tokens.len(),
        });
    }

    let mut steps = Vec::with_capacity(tokens.len() / 2);
    for (pair_idx, pair) in tokens.chunks_exact(2).enumerate() {
        let (kind_tok, dur_tok) = (pair[0], pair[1]);
        let position = pair_idx * 2;

        let kind = PhaseKind::from_token(kind_tok).ok_or_else(|| ParseError::UnknownKind {
            token: kind_tok.to_string(),
            position,
        })?;

        let duration = dur_tok
            .parse::<f64>()
            .ok()
            .filter(|d| valid_duration(*d))
            .ok_or_else(|| ParseError::InvalidDuration {
                token: dur_tok.to_string(),
                position: position + 1,
            })?;

        steps.push(PhaseStep { kind, duration });
    }

    Sequence::new(steps)
}

/// `true` when `text` parses; this is the only signal the control surface needs.
pub fn is_valid_sequence(text: &str) -> bool {
    parse_sequence(text).is_ok()
}

fn valid_duration(d: f64) -> bool {
    d.is_finite() && d > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/parse.rs"]
mod tests;
