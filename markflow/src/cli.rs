use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use crate::pipeline::ConvertJob;
use crate::render::{Extensions, DEFAULT_LANG, DEFAULT_TITLE};

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "markflow")]
#[command(about = "Convert a Markdown file into a themed, self-contained HTML document")]
#[command(version)]
pub struct Cli {
    /// Markdown file to convert
    pub input: PathBuf,

    /// HTML file to write (overwritten if it exists)
    pub output: PathBuf,

    /// Theme name: a registry entry, or a hue such as `hue-210-light`
    pub theme: String,

    /// Theme registry file (defaults to themes.json next to the executable)
    #[arg(long, env = "MARKFLOW_THEMES")]
    pub themes: Option<PathBuf>,

    /// Document title
    #[arg(long, env = "MARKFLOW_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Value of the `lang` attribute on <html>
    #[arg(long, default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Disable wiki links, abbreviations, and newline-to-break
    #[arg(long)]
    pub no_extensions: bool,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Effective log level: explicit level, then `--verbose`, then warn.
    pub fn level_filter(&self) -> LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level.into(),
            (None, true) => LevelFilter::DEBUG,
            (None, false) => LevelFilter::WARN,
        }
    }

    pub fn job(&self) -> ConvertJob {
        let mut job = ConvertJob::new(&self.input, &self.output, &self.theme);
        job.title = self.title.clone();
        job.lang = self.lang.clone();
        if self.no_extensions {
            job.extensions = Extensions::none();
        }
        job.registry_path = self.themes.clone();
        job
    }
}
