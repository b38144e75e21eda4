//! Escaping, tag building and URL safety helpers for HTML output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder written instead of raw HTML in safe mode
pub const RAW_HTML_OMITTED: &str = "<!-- raw HTML omitted -->";

static UNSAFE_PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^javascript:|vbscript:|file:|data:").unwrap());

static SAFE_DATA_PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^data:image/(?:png|gif|jpeg|webp)").unwrap());

/// Which characters [`escape_html`] replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// Element content: `&`, `<` and `>`
    Body,
    /// Attribute values: `&`, `<`, `>` and `"`
    Attribute,
}

/// Replace markup-significant characters with entities
pub fn escape_html(text: &str, mode: EscapeMode) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if mode == EscapeMode::Attribute => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }

    result
}

/// Format an opening or self-closing tag.
///
/// Attribute values are inserted verbatim and must already be escaped.
pub fn tag(name: &str, attrs: &[(&str, String)], self_closing: bool) -> String {
    let mut result = String::with_capacity(name.len() + 2);
    result.push('<');
    result.push_str(name);

    for (key, value) in attrs {
        result.push(' ');
        result.push_str(key);
        result.push_str("=\"");
        result.push_str(value);
        result.push('"');
    }

    if self_closing {
        result.push_str(" /");
    }
    result.push('>');
    result
}

/// Check whether a link or image destination uses a script-capable protocol.
///
/// A destination starting with `javascript:`, or containing `vbscript:`,
/// `file:` or `data:` anywhere, is unsafe, except for inline PNG, GIF, JPEG
/// and WebP images.
pub fn is_unsafe_destination(url: &str) -> bool {
    UNSAFE_PROTOCOL.is_match(url) && !SAFE_DATA_PROTOCOL.is_match(url)
}

/// Remove every `<...>` span from a generated fragment.
///
/// An unterminated `<` is kept along with the rest of the fragment.
pub fn strip_tags(fragment: &str) -> String {
    let mut result = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                result.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    result.push_str(rest);
    result
}
