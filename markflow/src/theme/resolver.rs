//! Theme name resolution.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{HueSpec, Theme, ThemeRegistry, DEFAULT_THEME};
use crate::error::Result;

/// Turns a theme name into a [`Theme`].
///
/// Order: hue specification, registry entry, [`DEFAULT_THEME`]. Unknown
/// names always get the default theme, never some other registry entry.
#[derive(Debug, Clone, Default)]
pub struct ThemeResolver {
    registry_path: Option<PathBuf>,
}

impl ThemeResolver {
    /// Resolver reading `themes.json` next to the executable.
    pub fn new() -> Self {
        Self {
            registry_path: ThemeRegistry::default_path(),
        }
    }

    /// Resolver reading the registry at `path` instead.
    pub fn with_registry_path(path: impl Into<PathBuf>) -> Self {
        Self {
            registry_path: Some(path.into()),
        }
    }

    pub fn registry_path(&self) -> Option<&Path> {
        self.registry_path.as_deref()
    }

    /// Resolve `name`. Fails only when the registry has an entry for `name`
    /// that is missing colors.
    pub fn resolve(&self, name: &str) -> Result<Theme> {
        if let Some(spec) = HueSpec::parse(name) {
            debug!("Theme '{}' generated from {}", name, spec);
            return Ok(spec.palette());
        }

        let Some(registry) = self.registry_path.as_deref().and_then(ThemeRegistry::load) else {
            debug!("Theme '{}' falls back to default: no registry", name);
            return Ok(DEFAULT_THEME.clone());
        };

        match registry.get(name)? {
            Some(theme) => {
                debug!("Theme '{}' loaded from registry", name);
                Ok(theme)
            }
            None => {
                let known = registry.names().collect::<Vec<_>>().join(", ");
                warn!(
                    "Theme '{}' not in registry (known: {}), using default",
                    name, known
                );
                Ok(DEFAULT_THEME.clone())
            }
        }
    }
}
