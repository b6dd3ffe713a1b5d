//! Markdown to themed, self-contained HTML.
//!
//! ```text
//! input.md --(++ins++ pre-pass)--> render::DocumentRenderer --> output.html
//!                                         ^
//!                  theme::ThemeResolver --+  (hue spec | registry | default)
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod preprocess;
pub mod render;
pub mod theme;

pub use error::{Error, Result};
pub use pipeline::ConvertJob;
pub use render::{DocumentRenderer, Extensions};
pub use theme::{Mode, Theme, ThemeResolver, DEFAULT_THEME};
