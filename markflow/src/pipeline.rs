//! One conversion run: read, pre-process, resolve, render, write.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::preprocess;
use crate::render::{DocumentRenderer, Extensions, DEFAULT_LANG, DEFAULT_TITLE};
use crate::theme::{Theme, ThemeResolver};

/// Apply the `++` pre-pass, then render.
fn render_document(renderer: &DocumentRenderer, source: &str, theme: &Theme) -> Result<String> {
    renderer.render(&preprocess::insertions(source), theme)
}

/// Everything needed to convert one file.
#[derive(Debug, Clone)]
pub struct ConvertJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub theme: String,
    pub title: String,
    pub lang: String,
    pub extensions: Extensions,
    /// Registry file to consult; `None` uses the one next to the executable.
    pub registry_path: Option<PathBuf>,
}

impl ConvertJob {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            theme: theme.into(),
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
            extensions: Extensions::default(),
            registry_path: None,
        }
    }

    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    fn resolver(&self) -> ThemeResolver {
        match &self.registry_path {
            Some(path) => ThemeResolver::with_registry_path(path),
            None => ThemeResolver::new(),
        }
    }

    fn renderer(&self) -> DocumentRenderer {
        DocumentRenderer::new()
            .with_title(&self.title)
            .with_lang(&self.lang)
            .with_extensions(self.extensions)
    }

    /// Run the conversion. The output file is only written once the whole
    /// document has rendered.
    pub fn run(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::InputNotFound {
                path: self.input.clone(),
            });
        }
        let source = fs::read_to_string(&self.input).map_err(|source| Error::Read {
            path: self.input.clone(),
            source,
        })?;
        debug!("Read {} bytes from {}", source.len(), self.input.display());

        let theme = self.resolver().resolve(&self.theme)?;
        let html = render_document(&self.renderer(), &source, &theme)?;

        fs::write(&self.output, &html).map_err(|source| Error::Write {
            path: self.output.clone(),
            source,
        })?;
        info!("Wrote {} bytes to {}", html.len(), self.output.display());
        Ok(())
    }
}
