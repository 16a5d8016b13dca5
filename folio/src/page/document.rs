//! The stored page document format.
//!
//! A page is persisted as a minimal HTML document. [`render`] and [`parse`]
//! are the only two places that know its shape, so write-time synthesis and
//! read-time extraction cannot drift apart.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern is valid")
});

// Greedy: a body that itself mentions `</body>` still round-trips
static BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body[^>]*>(.*)</body>").expect("body pattern is valid")
});

/// Title and body extracted from one read of a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parts {
    /// Unescaped `<title>` content.
    pub title: String,
    /// Verbatim `<body>` content.
    pub body: String,
}

/// Synthesize the stored document for a title and body.
///
/// The title is escaped so that any string round-trips through [`parse`];
/// the body is page markup and is embedded verbatim.
///
/// # Examples
///
/// ```
/// use folio::page::document::{parse, render};
///
/// let doc = render("Tips & Tricks", "<p>hello</p>");
/// let parts = parse("tips", &doc).unwrap();
/// assert_eq!(parts.title, "Tips & Tricks");
/// assert_eq!(parts.body, "<p>hello</p>");
/// ```
#[must_use]
pub fn render(title: &str, body: &str) -> String {
    format!(
        "<html>\n<head>\n<title>{}</title>\n</head>\n<body>{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Extract title and body from stored content.
///
/// # Errors
///
/// Returns [`Error::MalformedResource`] naming `key` if either element is
/// missing.
pub fn parse(key: &str, content: &str) -> Result<Parts> {
    let title = TITLE_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .ok_or_else(|| Error::MalformedResource {
            key: key.to_string(),
            details: "missing <title> element".to_string(),
        })?;
    let body = BODY_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .ok_or_else(|| Error::MalformedResource {
            key: key.to_string(),
            details: "missing <body> element".to_string(),
        })?;

    Ok(Parts {
        title: unescape_html(title.as_str().trim()),
        body: body.as_str().to_string(),
    })
}

/// Escape text for inclusion in HTML element content or attribute values.
///
/// # Examples
///
/// ```
/// use folio::page::document::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_html`]. Unknown entities are left as they are.
#[must_use]
pub fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
