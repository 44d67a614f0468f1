use crate::sequence::PhaseKind;

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque colour from a `0xRRGGBB` literal.
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 255,
        }
    }

    /// `#rrggbb` form, alpha dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a `[0, 1]` opacity.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

const ZINC_900: Rgba8 = Rgba8::rgb(0x18181b);
const ZINC_100: Rgba8 = Rgba8::rgb(0xf4f4f5);
const ZINC_800: Rgba8 = Rgba8::rgb(0x27272a);
const ZINC_500: Rgba8 = Rgba8::rgb(0x71717a);
const YELLOW_300: Rgba8 = Rgba8::rgb(0xfde047);
const ORANGE_300: Rgba8 = Rgba8::rgb(0xfdba74);
const GRAY_600: Rgba8 = Rgba8::rgb(0x4b5563);

/// Page colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, bright label.
    #[default]
    Dark,
    /// Light background, dark label.
    Light,
}

impl Theme {
    /// `Dark` when `dark` is set, else `Light`.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark scheme.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Canvas fill.
    pub fn background(self) -> Rgba8 {
        match self {
            Self::Dark => ZINC_900,
            Self::Light => ZINC_100,
        }
    }

    /// Phase label colour.
    pub fn label(self) -> Rgba8 {
        match self {
            Self::Dark => YELLOW_300,
            Self::Light => ZINC_800,
        }
    }

    /// Secondary text (counters, footer).
    pub fn muted(self) -> Rgba8 {
        ZINC_500
    }

    /// Moving pointer dot.
    pub fn pointer(self) -> Rgba8 {
        match self {
            Self::Dark => ZINC_100,
            Self::Light => ZINC_900,
        }
    }
}

/// Ring colour for a phase kind; identical across themes.
pub fn phase_color(kind: PhaseKind) -> Rgba8 {
    match kind {
        PhaseKind::Inhale => YELLOW_300,
        PhaseKind::Hold => GRAY_600,
        PhaseKind::Exhale => ORANGE_300,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
