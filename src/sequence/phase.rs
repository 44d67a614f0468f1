/// One segment of a breathing cycle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PhaseKind {
    /// Breathe in.
    #[serde(rename = "in")]
    Inhale,
    /// Hold the breath.
    #[serde(rename = "hold")]
    Hold,
    /// Breathe out.
    #[serde(rename = "out")]
    Exhale,
}

impl PhaseKind {
    /// All kinds, in declaration order.
    pub const ALL: [PhaseKind; 3] = [Self::Inhale, Self::Hold, Self::Exhale];

    /// Token used for this kind in sequence text.
    pub fn token(self) -> &'static str {
        match self {
            Self::Inhale => "in",
            Self::Hold => "hold",
            Self::Exhale => "out",
        }
    }

    /// Inverse of [`PhaseKind::token`]. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "in" => Some(Self::Inhale),
            "hold" => Some(Self::Hold),
            "out" => Some(Self::Exhale),
            _ => None,
        }
    }

    /// Text shown to the user while this phase is active.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
        }
    }

    /// Relative size of the ring at the end of this phase.
    pub fn scale(self) -> f64 {
        match self {
            Self::Inhale => 1.2,
            Self::Hold => 1.2,
            Self::Exhale => 1.0,
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
