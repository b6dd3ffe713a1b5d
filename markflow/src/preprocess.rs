//! Source rewrites applied to the raw Markdown before rendering.
//!
//! `++text++` marks inserted text and becomes `<ins>text</ins>`. The rewrite
//! is purely textual: it also fires inside code spans and fenced blocks,
//! and spans do not nest. Keep that in mind before writing `++` in code.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static INSERTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+\+(.*?)\+\+").expect("insertion pattern is valid"));

/// Replace every `++text++` with `<ins>text</ins>`, shortest match first.
/// Spans never cross a line break. `++++` yields an empty `<ins></ins>`.
pub fn insertions(source: &str) -> Cow<'_, str> {
    INSERTION.replace_all(source, "<ins>$1</ins>")
}
