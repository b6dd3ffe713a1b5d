//! Error type shared by every stage of the conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a conversion run.
///
/// Theme registry problems are not represented here: a missing or corrupt
/// registry file is absorbed by the resolver and never fails a run.
#[derive(Error, Debug)]
pub enum Error {
    /// The input Markdown file does not exist.
    #[error("{} not found.", path.display())]
    InputNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// The input file exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry entry exists for the theme but lacks required colors.
    #[error("theme '{name}' is invalid: {source}")]
    InvalidTheme {
        /// Theme name as given on the command line
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The Markdown engine rejected the document.
    #[error("markdown rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
