//! Hue specifications embedded in theme names, e.g. `hue-210-light`.

use std::fmt;

use super::{palette, Mode, Theme};

const MARKER: &str = "hue-";

/// A parsed dynamic theme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueSpec {
    /// Degrees in `[0, 360)`.
    pub hue: u16,
    pub mode: Mode,
}

impl HueSpec {
    /// Parse a theme name. Returns `None` unless the name contains `hue-`.
    ///
    /// Matching is by substring: `light` anywhere in the name selects light
    /// mode (so `hue-0-lightish` is light), and the first run of digits
    /// anywhere is the hue. No digits means hue 0.
    pub fn parse(name: &str) -> Option<Self> {
        if !name.contains(MARKER) {
            return None;
        }
        let mode = if name.contains("light") {
            Mode::Light
        } else {
            Mode::default()
        };
        Some(Self {
            hue: first_number_mod_360(name),
            mode,
        })
    }

    pub fn palette(self) -> Theme {
        palette::generate(i64::from(self.hue), self.mode)
    }
}

impl fmt::Display for HueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MARKER}{}-{}", self.hue, self.mode.as_str())
    }
}

/// First run of ASCII digits, reduced modulo 360 as it is read so that
/// arbitrarily long runs cannot overflow.
fn first_number_mod_360(name: &str) -> u16 {
    name.bytes()
        .skip_while(|b| !b.is_ascii_digit())
        .take_while(u8::is_ascii_digit)
        .fold(0u16, |acc, digit| (acc * 10 + u16::from(digit - b'0')) % 360)
}
