//! HTML serializer.
//!
//! [`HtmlRenderer`] implements [`Render`] with one handler per node kind. Block
//! constructs are separated by single newlines via [`HtmlState::cr`], and
//! image alt text is kept free of markup by stripping tags while inside an
//! image.

use cmark_render_core::{ListType, NodeKind, NodeRef, Output, Render, Result, Tree};
use tracing::debug;

use crate::options::HtmlOptions;
use crate::utilities::{
    escape_html, is_unsafe_destination, strip_tags, tag, EscapeMode, RAW_HTML_OMITTED,
};

type Attrs = Vec<(&'static str, String)>;

/// Per-render state of the HTML serializer
#[derive(Debug)]
pub struct HtmlState {
    buffer: String,
    /// Whether the last `out` fragment was exactly a newline
    last_out_newline: bool,
    /// Image nesting depth; tags are stripped while it is non-zero
    disable_tags: usize,
}

impl Default for HtmlState {
    fn default() -> Self {
        Self {
            buffer: String::with_capacity(4096),
            last_out_newline: true,
            disable_tags: 0,
        }
    }
}

impl HtmlState {
    /// Append a newline unless the last fragment already was one
    pub fn cr(&mut self) {
        if !self.last_out_newline {
            self.lit("\n");
            self.last_out_newline = true;
        }
    }
}

impl Output for HtmlState {
    fn lit(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn out(&mut self, s: &str) {
        if self.disable_tags > 0 {
            let stripped = strip_tags(s);
            self.lit(&stripped);
        } else {
            self.lit(s);
        }
        self.last_out_newline = s == "\n";
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Renders a document tree to HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// `data-sourcepos` when enabled and known, otherwise nothing
    fn attrs(&self, node: NodeRef<'_>) -> Attrs {
        let mut attrs = Attrs::new();
        if self.options.sourcepos {
            if let Some(pos) = node.data().sourcepos {
                attrs.push(("data-sourcepos", pos.to_string()));
            }
        }
        attrs
    }

    fn unsafe_destination(&self, destination: &str) -> bool {
        let unsafe_ = self.options.safe && is_unsafe_destination(destination);
        if unsafe_ {
            debug!(destination, "dropping unsafe destination");
        }
        unsafe_
    }

    fn raw_html(&self, out: &mut HtmlState, node: NodeRef<'_>) {
        if self.options.safe {
            out.out(RAW_HTML_OMITTED);
        } else {
            out.out(node.literal().unwrap_or_default());
        }
    }

    fn custom(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        let text = if entering { node.on_enter() } else { node.on_exit() };
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            out.out(text);
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Render for HtmlRenderer {
    type State = HtmlState;

    fn text(&self, out: &mut HtmlState, node: NodeRef<'_>, _entering: bool) {
        out.out(&escape_html(node.literal().unwrap_or_default(), EscapeMode::Body));
    }

    fn softbreak(&self, out: &mut HtmlState, _node: NodeRef<'_>, _entering: bool) {
        out.out(&self.options.softbreak);
    }

    fn linebreak(&self, out: &mut HtmlState, _node: NodeRef<'_>, _entering: bool) {
        out.out(&tag("br", &[], true));
        out.cr();
    }

    fn emph(&self, out: &mut HtmlState, _node: NodeRef<'_>, entering: bool) {
        out.out(&tag(if entering { "em" } else { "/em" }, &[], false));
    }

    fn strong(&self, out: &mut HtmlState, _node: NodeRef<'_>, entering: bool) {
        out.out(&tag(if entering { "strong" } else { "/strong" }, &[], false));
    }

    fn html_inline(&self, out: &mut HtmlState, node: NodeRef<'_>, _entering: bool) {
        self.raw_html(out, node);
    }

    fn custom_inline(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        self.custom(out, node, entering);
    }

    fn link(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        if !entering {
            out.out(&tag("/a", &[], false));
            return;
        }

        let mut attrs = self.attrs(node);
        let destination = node.destination().unwrap_or_default();
        if !self.unsafe_destination(destination) {
            attrs.push(("href", escape_html(destination, EscapeMode::Attribute)));
        }
        if let Some(title) = non_empty(node.title()) {
            attrs.push(("title", escape_html(title, EscapeMode::Attribute)));
        }
        out.out(&tag("a", &attrs, false));
    }

    fn image(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        if entering {
            if out.disable_tags == 0 {
                let destination = node.destination().unwrap_or_default();
                if self.unsafe_destination(destination) {
                    out.out("<img src=\"\" alt=\"");
                } else {
                    out.out(&format!(
                        "<img src=\"{}\" alt=\"",
                        escape_html(destination, EscapeMode::Attribute)
                    ));
                }
            }
            out.disable_tags += 1;
        } else {
            out.disable_tags = out.disable_tags.saturating_sub(1);
            if out.disable_tags == 0 {
                if let Some(title) = non_empty(node.title()) {
                    out.out(&format!(
                        "\" title=\"{}",
                        escape_html(title, EscapeMode::Attribute)
                    ));
                }
                out.out("\" />");
            }
        }
    }

    fn code(&self, out: &mut HtmlState, node: NodeRef<'_>, _entering: bool) {
        let code = escape_html(node.literal().unwrap_or_default(), EscapeMode::Body);
        out.out(&format!("{}{}{}", tag("code", &[], false), code, tag("/code", &[], false)));
    }

    fn paragraph(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        let grandparent = node.parent().and_then(|parent| parent.parent());
        if let Some(grandparent) = grandparent {
            let data = grandparent.data();
            if data.kind() == Some(NodeKind::List) && data.list_tight {
                return;
            }
        }

        if entering {
            out.cr();
            out.out(&tag("p", &self.attrs(node), false));
        } else {
            out.out(&tag("/p", &[], false));
            out.cr();
        }
    }

    fn block_quote(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        out.cr();
        if entering {
            out.out(&tag("blockquote", &self.attrs(node), false));
        } else {
            out.out(&tag("/blockquote", &[], false));
        }
        out.cr();
    }

    fn item(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        if entering {
            out.out(&tag("li", &self.attrs(node), false));
        } else {
            out.out(&tag("/li", &[], false));
            out.cr();
        }
    }

    fn list(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        let data = node.data();
        let name = match data.list_type {
            ListType::Bullet => "ul",
            ListType::Ordered => "ol",
        };

        out.cr();
        if entering {
            let mut attrs = self.attrs(node);
            if data.list_type == ListType::Ordered {
                if let Some(start) = data.list_start.filter(|start| *start != 1) {
                    attrs.push(("start", start.to_string()));
                }
            }
            out.out(&tag(name, &attrs, false));
        } else {
            out.out(&tag(&format!("/{name}"), &[], false));
        }
        out.cr();
    }

    fn heading(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        let name = format!("h{}", node.data().level);
        if entering {
            out.cr();
            out.out(&tag(&name, &self.attrs(node), false));
        } else {
            out.out(&tag(&format!("/{name}"), &[], false));
            out.cr();
        }
    }

    fn code_block(&self, out: &mut HtmlState, node: NodeRef<'_>, _entering: bool) {
        let mut attrs = self.attrs(node);
        let language = node
            .info()
            .and_then(|info| info.split(char::is_whitespace).next())
            .filter(|word| !word.is_empty());
        if let Some(language) = language {
            attrs.push((
                "class",
                format!("language-{}", escape_html(language, EscapeMode::Attribute)),
            ));
        }

        out.cr();
        out.out(&format!("{}{}", tag("pre", &[], false), tag("code", &attrs, false)));
        out.out(&escape_html(node.literal().unwrap_or_default(), EscapeMode::Body));
        out.out(&format!("{}{}", tag("/code", &[], false), tag("/pre", &[], false)));
        out.cr();
    }

    fn html_block(&self, out: &mut HtmlState, node: NodeRef<'_>, _entering: bool) {
        out.cr();
        self.raw_html(out, node);
        out.cr();
    }

    fn custom_block(&self, out: &mut HtmlState, node: NodeRef<'_>, entering: bool) {
        out.cr();
        self.custom(out, node, entering);
        out.cr();
    }

    fn thematic_break(&self, out: &mut HtmlState, node: NodeRef<'_>, _entering: bool) {
        out.cr();
        out.out(&tag("hr", &self.attrs(node), true));
        out.cr();
    }
}

/// Render a tree to HTML with the given options
pub fn render_html(tree: &Tree, options: &HtmlOptions) -> Result<String> {
    HtmlRenderer::new(options.clone()).render(tree)
}
