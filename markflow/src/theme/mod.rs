//! Color themes for generated documents.
//!
//! A [`Theme`] is the resolved color mapping the stylesheet is built from.
//! Themes come from three places, tried in order by [`ThemeResolver`]:
//! a hue specification in the name (`hue-210-light`), the JSON theme
//! registry, or the built-in [`DEFAULT_THEME`].

pub mod hue;
pub mod palette;
pub mod registry;
pub mod resolver;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use hue::HueSpec;
pub use registry::ThemeRegistry;
pub use resolver::ThemeResolver;

/// Light or dark variant of a generated palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    #[default]
    Dark,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The color mapping a document is styled with.
///
/// Values are CSS colors, normally `#rrggbb`. Registry entries are taken
/// verbatim, so no format is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeEntry")]
pub struct Theme {
    #[serde(rename = "bg")]
    pub background: String,
    pub text: String,
    pub accent: String,
    pub code_bg: String,
    pub border: String,
    pub quote_bar: String,
    pub table_header: String,
}

/// On-disk shape of a registry entry. `quote_bar` may be left out.
#[derive(Deserialize)]
struct ThemeEntry {
    bg: String,
    text: String,
    accent: String,
    code_bg: String,
    border: String,
    #[serde(default)]
    quote_bar: Option<String>,
    table_header: String,
}

impl From<ThemeEntry> for Theme {
    fn from(entry: ThemeEntry) -> Self {
        let quote_bar = entry.quote_bar.unwrap_or_else(|| entry.accent.clone());
        Self {
            background: entry.bg,
            text: entry.text,
            accent: entry.accent,
            code_bg: entry.code_bg,
            border: entry.border,
            quote_bar,
            table_header: entry.table_header,
        }
    }
}

/// Fallback theme used when a name resolves to nothing else.
pub static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    background: "#1e1e1e".into(),
    text: "#d4d4d4".into(),
    accent: "#569cd6".into(),
    code_bg: "#2d2d2d".into(),
    border: "#3c3c3c".into(),
    quote_bar: "#569cd6".into(),
    table_header: "#2d2d2d".into(),
});
