//! HTML document skeleton and stylesheet.

use super::escape_attr;
use crate::theme::Theme;

/// The stylesheet for `theme`. Every theme color is used at least once.
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"
        body {{
            background-color: {bg};
            color: {text};
            font-family: 'Segoe UI', system-ui, sans-serif;
            line-height: 1.6;
            padding: 50px;
            max-width: 900px;
            margin: 0 auto;
        }}
        h1, h2, h3, h4, h5, h6 {{
            color: {accent};
        }}
        a, .wikilink {{
            color: {accent};
            text-decoration: none;
            border-bottom: 1px solid;
        }}
        hr {{
            border: 0;
            border-top: 2px solid {border};
            margin: 40px 0;
        }}
        blockquote {{
            border-left: 5px solid {quote_bar};
            padding-left: 20px;
            margin: 20px 0;
            font-style: italic;
            opacity: 0.9;
        }}
        code {{
            background: {code_bg};
            padding: 3px 6px;
            border-radius: 4px;
            font-family: monospace;
        }}
        pre {{
            background: {code_bg};
            padding: 20px;
            border-radius: 10px;
            overflow-x: auto;
        }}
        pre code {{
            padding: 0;
        }}
        table {{
            border-collapse: collapse;
            width: 100%;
            margin: 25px 0;
        }}
        th, td {{
            border: 1px solid {border};
            padding: 12px;
            text-align: left;
        }}
        th {{
            background: {table_header};
        }}
        ins {{
            text-decoration: underline;
        }}
        abbr[title] {{
            text-decoration: underline dotted;
            cursor: help;
        }}
        img {{
            max-width: 100%;
            border-radius: 8px;
        }}
    "#,
        bg = theme.background,
        text = theme.text,
        accent = theme.accent,
        border = theme.border,
        quote_bar = theme.quote_bar,
        code_bg = theme.code_bg,
        table_header = theme.table_header,
    )
}

/// Wrap a rendered fragment into a complete document.
pub fn document(fragment: &str, theme: &Theme, title: &str, lang: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<article>
{fragment}
</article>
</body>
</html>
"#,
        lang = escape_attr(lang),
        title = escape_attr(title),
        css = stylesheet(theme),
        fragment = fragment.trim_end(),
    )
}
