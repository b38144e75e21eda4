//! Configuration options for HTML rendering

use serde::Deserialize;

/// Options for [`HtmlRenderer`](crate::HtmlRenderer)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Text substituted for a soft line break.
    ///
    /// Use `"<br />\n"` to render soft breaks as hard breaks, or `" "` to
    /// ignore line wrapping in the source.
    pub softbreak: String,

    /// Replace raw HTML with a placeholder comment and drop potentially
    /// unsafe link and image destinations
    pub safe: bool,

    /// Add `data-sourcepos` attributes to block tags
    pub sourcepos: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            softbreak: "\n".to_string(),
            safe: false,
            sourcepos: false,
        }
    }
}
