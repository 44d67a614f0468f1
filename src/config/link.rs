use crate::sequence::{DEFAULT_SEQUENCE, Sequence};

/// Pacer state carried in a shareable query string.
///
/// The sequence is kept as raw text: a link may carry an invalid sequence, which only matters
/// when playback is started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
    /// `sequence` parameter.
    pub sequence: String,
    /// `dark` flag.
    pub dark: bool,
    /// `controls` flag.
    pub controls: bool,
}

impl Default for ShareLink {
    fn default() -> Self {
        Self {
            sequence: DEFAULT_SEQUENCE.to_string(),
            dark: true,
            controls: true,
        }
    }
}

impl ShareLink {
    /// Read a full URL or a bare query string.
    ///
    /// Missing keys keep their defaults; unknown keys are ignored; a later duplicate key wins.
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, q)) => q,
            None => input,
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut link = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_decode(key);
            let value = percent_decode(value);
            match key.as_str() {
                "sequence" => link.sequence = value,
                "dark" => link.dark = parse_flag(&key, &value, link.dark),
                "controls" => link.controls = parse_flag(&key, &value, link.controls),
                other => tracing::debug!(key = other, "ignoring unknown link parameter"),
            }
        }
        link
    }

    /// Copy of this link with `seq` written back in canonical form.
    pub fn with_sequence(&self, seq: &Sequence) -> Self {
        Self {
            sequence: seq.to_string(),
            ..self.clone()
        }
    }

    /// Encode as `sequence=...&dark=...&controls=...`.
    pub fn to_query(&self) -> String {
        format!(
            "sequence={}&dark={}&controls={}",
            percent_encode(&self.sequence),
            self.dark,
            self.controls
        )
    }
}

impl std::fmt::Display for ShareLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.to_query())
    }
}

fn parse_flag(key: &str, value: &str, current: bool) -> bool {
    match value {
        "" | "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value, "unrecognized flag value, keeping previous setting");
            current
        }
    }
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space, malformed escapes pass through.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Encode for a query value; spaces become `+`.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b))
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/link.rs"]
mod tests;
