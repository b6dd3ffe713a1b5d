//! Palette generation from a single hue.
//!
//! Every role gets a fixed (lightness, saturation) pair per [`Mode`]; only
//! the hue varies. Conversion is plain HLS to sRGB.

use super::{Mode, Theme};

/// Lightness and saturation for one color role, both in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
struct Tone {
    lightness: f64,
    saturation: f64,
}

const fn tone(lightness: f64, saturation: f64) -> Tone {
    Tone { lightness, saturation }
}

struct Tones {
    background: Tone,
    text: Tone,
    accent: Tone,
    code_bg: Tone,
}

const DARK: Tones = Tones {
    background: tone(0.12, 0.25),
    text: tone(0.85, 0.15),
    accent: tone(0.60, 0.65),
    code_bg: tone(0.18, 0.25),
};

const LIGHT: Tones = Tones {
    background: tone(0.97, 0.30),
    text: tone(0.15, 0.20),
    accent: tone(0.40, 0.70),
    code_bg: tone(0.92, 0.25),
};

/// Border tone, shared by both modes.
const BORDER: Tone = tone(0.50, 0.15);

/// Generate a complete theme for `hue` degrees (any value, wrapped into
/// `[0, 360)`).
pub fn generate(hue: i64, mode: Mode) -> Theme {
    let h = hue.rem_euclid(360) as f64 / 360.0;
    let tones = match mode {
        Mode::Light => &LIGHT,
        Mode::Dark => &DARK,
    };
    let color = |t: Tone| to_hex(hls_to_rgb(h, t.lightness, t.saturation));

    let accent = color(tones.accent);
    let code_bg = color(tones.code_bg);
    Theme {
        background: color(tones.background),
        text: color(tones.text),
        quote_bar: accent.clone(),
        accent,
        table_header: code_bg.clone(),
        code_bg,
        border: color(BORDER),
    }
}

/// HLS to RGB with every component in `[0, 1]`.
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        channel(m1, m2, h + 1.0 / 3.0),
        channel(m1, m2, h),
        channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// `#rrggbb`, truncating each channel when scaling to `0..=255`.
pub fn to_hex((r, g, b): (f64, f64, f64)) -> String {
    let byte = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
}
