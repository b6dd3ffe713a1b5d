//! Markdown to themed HTML.
//!
//! Rendering runs in three steps: the [`Extensions`] source rewrites, the
//! `markdown` engine (GFM: tables, footnotes, strikethrough, task lists,
//! autolinks), and the [`template`] wrapper. Raw HTML in the source is
//! passed through; the engine's GFM tag filter is the only sanitising.

pub mod extensions;
pub mod template;

use tracing::debug;

pub use extensions::Extensions;

use crate::error::{Error, Result};
use crate::theme::Theme;

pub const DEFAULT_TITLE: &str = "MarkFlow Document";
pub const DEFAULT_LANG: &str = "ru";

/// Engine options: GFM with raw HTML allowed.
pub fn markdown_options() -> markdown::Options {
    markdown::Options {
        parse: markdown::ParseOptions::gfm(),
        compile: markdown::CompileOptions {
            allow_dangerous_html: true,
            ..markdown::CompileOptions::gfm()
        },
    }
}

/// Renders Markdown into a standalone HTML document.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    title: String,
    lang: String,
    extensions: Extensions,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
            extensions: Extensions::default(),
        }
    }
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Markdown to an HTML fragment, without the document wrapper.
    pub fn fragment(&self, source: &str) -> Result<String> {
        let source = self.extensions.apply(source);
        let html = markdown::to_html_with_options(&source, &markdown_options())
            .map_err(|e| Error::Render(e.to_string()))?;
        debug!(
            "Rendered {} bytes of Markdown into {} bytes of HTML",
            source.len(),
            html.len()
        );
        Ok(html)
    }

    /// Markdown to a complete HTML document styled with `theme`.
    pub fn render(&self, source: &str, theme: &Theme) -> Result<String> {
        let fragment = self.fragment(source)?;
        Ok(template::document(&fragment, theme, &self.title, &self.lang))
    }
}

/// Escape text for use inside a double-quoted attribute or element body.
pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
