//! Markdown extensions the engine does not provide, applied as source
//! rewrites before it runs.
//!
//! Each stage parses the source with the engine first and leaves code alone:
//! fenced and indented blocks at any nesting depth, and inline code spans.
//! Line breaks are only added between lines of running text.

use std::collections::HashMap;
use std::ops::Range;

use markdown::mdast::Node;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use super::escape_attr;
/// Which extension stages run. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extensions {
    /// `[[Page Name]]` links.
    pub wikilinks: bool,
    /// `*[HTML]: Hyper Text Markup Language` definitions.
    pub abbreviations: bool,
    /// Single newlines inside a paragraph become `<br />`.
    pub line_breaks: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            wikilinks: true,
            abbreviations: true,
            line_breaks: true,
        }
    }
}

impl Extensions {
    pub const fn none() -> Self {
        Self {
            wikilinks: false,
            abbreviations: false,
            line_breaks: false,
        }
    }

    /// Run the enabled stages: wiki links, then abbreviations, then breaks.
    pub fn apply(&self, source: &str) -> String {
        let mut text = source.to_string();
        if self.wikilinks {
            text = wikilinks(&text);
        }
        if self.abbreviations {
            text = abbreviations(&text);
        }
        if self.line_breaks {
            text = line_breaks(&text);
        }
        text
    }
}

static WIKILINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([\w -]+)\]\]").expect("wikilink pattern is valid"));

static ABBR_DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\[([^\]]+)\]:[ \t]*(.*)$").expect("abbreviation pattern is valid")
});

/// `[[Label]]` to `<a class="wikilink" href="/Label/">Label</a>`. Spaces in
/// the href become underscores; a blank label removes the link.
pub fn wikilinks(source: &str) -> String {
    let regions = Regions::of(source);
    WIKILINK
        .replace_all(source, |caps: &Captures| {
            if regions.starts_in_code(caps.get(0)) {
                return caps[0].to_string();
            }
            let label = caps[1].trim();
            if label.is_empty() {
                return String::new();
            }
            format!(
                r#"<a class="wikilink" href="/{}/">{}</a>"#,
                label.replace(' ', "_"),
                label
            )
        })
        .into_owned()
}

/// Strip `*[ABBR]: title` definition lines and wrap whole-word uses of each
/// abbreviation in `<abbr title="…">`. Code, HTML tags, and link
/// destinations are not touched.
pub fn abbreviations(source: &str) -> String {
    let regions = Regions::of(source);
    let mut titles: HashMap<String, String> = HashMap::new();
    // (offset, line) pairs that survive definition removal.
    let mut kept: Vec<(usize, &str)> = Vec::new();
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        match ABBR_DEFINITION.captures(text) {
            Some(caps) if !regions.in_code(offset) => {
                titles.insert(caps[1].to_string(), caps[2].trim().to_string());
            }
            _ => kept.push((offset, line)),
        }
        offset += line.len();
    }
    if titles.is_empty() {
        return source.to_string();
    }
    debug!("Found {} abbreviation definition(s)", titles.len());

    let mut abbrs: Vec<&str> = titles.keys().map(String::as_str).collect();
    // Longest first so `HTML5` wins over `HTML`.
    abbrs.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternation = abbrs
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(pattern) = Regex::new(&format!(
        r"(</?[A-Za-z][^>]*>|\]\([^)]*\))|\b({alternation})\b"
    )) else {
        return source.to_string();
    };

    let mut out = String::with_capacity(source.len());
    for (line_offset, line) in kept {
        let replaced = pattern.replace_all(line, |caps: &Captures| {
            let in_code = caps
                .get(0)
                .is_some_and(|m| regions.in_code(line_offset + m.start()));
            if in_code || caps.get(1).is_some() {
                return caps[0].to_string();
            }
            let abbr = &caps[2];
            let title = titles.get(abbr).map(String::as_str).unwrap_or_default();
            format!(r#"<abbr title="{}">{}</abbr>"#, escape_attr(title), abbr)
        });
        out.push_str(&replaced);
    }
    out
}

/// Turn each soft line ending inside text into a hard break by adding two
/// trailing spaces. Code, HTML, tables, and existing breaks are untouched.
pub fn line_breaks(source: &str) -> String {
    let regions = Regions::of(source);
    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for (offset, _) in source.match_indices('\n') {
        if !regions.in_text(offset) {
            continue;
        }
        let cut = if source[..offset].ends_with('\r') {
            offset - 1
        } else {
            offset
        };
        out.push_str(&source[last..cut]);
        out.push_str("  ");
        last = cut;
    }
    out.push_str(&source[last..]);
    out
}

/// Byte ranges of code and of plain text, taken from the engine's syntax
/// tree.
#[derive(Debug, Default)]
struct Regions {
    code: Vec<Range<usize>>,
    text: Vec<Range<usize>>,
}

impl Regions {
    fn of(source: &str) -> Self {
        let mut regions = Self::default();
        match markdown::to_mdast(source, &markdown::ParseOptions::gfm()) {
            Ok(tree) => regions.collect(&tree),
            Err(e) => debug!("Could not locate code regions: {}", e),
        }
        regions
    }

    fn collect(&mut self, node: &Node) {
        let bucket = match node {
            Node::Code(_) | Node::InlineCode(_) => Some(&mut self.code),
            Node::Text(_) => Some(&mut self.text),
            _ => None,
        };
        if let (Some(bucket), Some(position)) = (bucket, node.position()) {
            bucket.push(position.start.offset..position.end.offset);
        }
        if let Some(children) = node.children() {
            for child in children {
                self.collect(child);
            }
        }
    }

    fn in_code(&self, offset: usize) -> bool {
        self.code.iter().any(|range| range.contains(&offset))
    }

    fn in_text(&self, offset: usize) -> bool {
        self.text.iter().any(|range| range.contains(&offset))
    }

    fn starts_in_code(&self, m: Option<regex::Match<'_>>) -> bool {
        m.is_some_and(|m| self.in_code(m.start()))
    }
}
