//! The optional JSON theme registry.
//!
//! The file maps theme names to color objects:
//!
//! ```json
//! { "ocean": { "bg": "#000000", "text": "#ffffff", "accent": "#00ffff",
//!              "code_bg": "#111111", "border": "#222222",
//!              "quote_bar": "#00ffff", "table_header": "#111111" } }
//! ```
//!
//! The file is read-only to us and may be missing or broken; either way
//! [`ThemeRegistry::load`] returns `None` and the caller falls back.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Theme;
use crate::error::{Error, Result};

/// File name looked up next to the executable.
pub const REGISTRY_FILE: &str = "themes.json";

#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    // Entries stay raw until requested so one bad entry cannot hide the rest.
    entries: Map<String, Value>,
}

impl ThemeRegistry {
    /// `themes.json` in the directory holding the running executable.
    pub fn default_path() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join(REGISTRY_FILE))
    }

    /// Load the registry at `path`. Absent, unreadable, or malformed files
    /// yield `None`.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            debug!("No theme registry at {}", path.display());
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Ignoring unreadable theme registry {}: {}", path.display(), e);
                return None;
            }
        };
        match Self::from_json(&content) {
            Ok(registry) => {
                debug!("Loaded {} theme(s) from {}", registry.len(), path.display());
                Some(registry)
            }
            Err(e) => {
                warn!("Ignoring malformed theme registry {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Parse registry JSON. The top level must be an object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Look up `name`. A present entry that lacks required colors is an
    /// error rather than a silent fallback.
    pub fn get(&self, name: &str) -> Result<Option<Theme>> {
        let Some(entry) = self.entries.get(name) else {
            return Ok(None);
        };
        Theme::deserialize(entry)
            .map(Some)
            .map_err(|source| Error::InvalidTheme {
                name: name.to_string(),
                source,
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const OCEAN: &str = r##"{"ocean": {"bg":"#000000","text":"#ffffff","accent":"#00ffff",
        "code_bg":"#111111","border":"#222222","quote_bar":"#00ffff","table_header":"#111111"}}"##;

    #[test]
    fn test_get_returns_entry_verbatim() {
        let registry = ThemeRegistry::from_json(OCEAN).unwrap();
        let theme = registry.get("ocean").unwrap().unwrap();
        assert_eq!(theme.background, "#000000");
        assert_eq!(theme.text, "#ffffff");
        assert_eq!(theme.accent, "#00ffff");
        assert_eq!(theme.code_bg, "#111111");
        assert_eq!(theme.border, "#222222");
        assert_eq!(theme.quote_bar, "#00ffff");
        assert_eq!(theme.table_header, "#111111");
    }

    #[test]
    fn test_get_unknown_name() {
        let registry = ThemeRegistry::from_json(OCEAN).unwrap();
        assert!(registry.get("forest").unwrap().is_none());
    }

    #[test]
    fn test_incomplete_entry_is_an_error() {
        let registry = ThemeRegistry::from_json(
            r##"{"broken": {"bg":"#000000"}, "ocean": {"bg":"#000000","text":"#ffffff",
                "accent":"#00ffff","code_bg":"#111111","border":"#222222",
                "table_header":"#111111"}}"##,
        )
        .unwrap();
        let err = registry.get("broken").unwrap_err();
        assert!(matches!(err, Error::InvalidTheme { ref name, .. } if name == "broken"));
        // Siblings of a bad entry still resolve.
        assert!(registry.get("ocean").unwrap().is_some());
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(ThemeRegistry::from_json("[1, 2, 3]").is_err());
        assert!(ThemeRegistry::from_json("{not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(ThemeRegistry::load(&temp.path().join(REGISTRY_FILE)).is_none());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(REGISTRY_FILE);
        fs::write(&path, "{ \"ocean\": ").unwrap();
        assert!(ThemeRegistry::load(&path).is_none());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(REGISTRY_FILE);
        fs::write(&path, OCEAN).unwrap();
        let registry = ThemeRegistry::load(&path).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ocean"]);
    }
}
