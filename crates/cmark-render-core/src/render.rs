//! Generic walk-and-dispatch render engine
//!
//! A renderer implements [`Render`], overriding the handlers for the node
//! kinds it cares about. Every handler defaults to a no-op. The engine walks
//! the tree, resolves each node's kind and calls the matching handler with a
//! per-call [`Output`] state.

use tracing::{debug, trace, warn};

use crate::ast::NodeKind;
use crate::tree::{NodeRef, Tree};
use crate::walker::Event;
use crate::Result;

/// Accumulation buffer written to by handlers
pub trait Output {
    /// Append `s` unconditionally
    fn lit(&mut self, s: &str);

    /// Append `s`, possibly filtered. Defaults to [`Output::lit`].
    fn out(&mut self, s: &str) {
        self.lit(s);
    }

    /// Consume the state and return the rendered text
    fn finish(self) -> String;
}

impl Output for String {
    fn lit(&mut self, s: &str) {
        self.push_str(s);
    }

    fn finish(self) -> String {
        self
    }
}

/// A renderer: one handler per node kind.
///
/// Handlers receive the render state, the node and whether the walk is
/// entering or leaving it. Leaf kinds are only ever called with
/// `entering == true`.
///
/// The state is created fresh for every [`Render::render`] call, so a
/// renderer holds only immutable configuration and may be shared freely.
#[allow(unused_variables)]
pub trait Render {
    type State: Output + Default;

    fn document(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn text(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn softbreak(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn linebreak(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn emph(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn strong(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn html_inline(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn custom_inline(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn link(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn image(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn code(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn paragraph(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn block_quote(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn item(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn list(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn heading(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn code_block(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn html_block(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn custom_block(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}
    fn thematic_break(&self, out: &mut Self::State, node: NodeRef<'_>, entering: bool) {}

    /// Render a whole tree
    fn render(&self, tree: &Tree) -> Result<String>
    where
        Self: Sized,
    {
        self.render_node(tree.root())
    }

    /// Render the subtree rooted at `root`.
    ///
    /// Fails with [`RenderError::UnknownNodeKind`](crate::RenderError) as soon
    /// as a node's type name is outside the vocabulary; nothing rendered so far
    /// is returned in that case.
    fn render_node(&self, root: NodeRef<'_>) -> Result<String>
    where
        Self: Sized,
    {
        debug!(root = root.node_type(), "render started");
        let mut state = Self::State::default();
        let mut events = 0usize;

        for event in root.walker() {
            let kind = event.node.kind().inspect_err(|err| {
                warn!(%err, "aborting render");
            })?;
            dispatch(self, &mut state, kind, event);
            events += 1;
        }

        let output = state.finish();
        debug!(events, bytes = output.len(), "render finished");
        Ok(output)
    }
}

/// Call the handler registered for `kind`
fn dispatch<R: Render>(renderer: &R, state: &mut R::State, kind: NodeKind, event: Event<'_>) {
    let Event { node, entering } = event;
    trace!(%kind, entering, "dispatch");

    match kind {
        NodeKind::Document => renderer.document(state, node, entering),
        NodeKind::Text => renderer.text(state, node, entering),
        NodeKind::SoftBreak => renderer.softbreak(state, node, entering),
        NodeKind::HardBreak => renderer.linebreak(state, node, entering),
        NodeKind::Emph => renderer.emph(state, node, entering),
        NodeKind::Strong => renderer.strong(state, node, entering),
        NodeKind::HtmlInline => renderer.html_inline(state, node, entering),
        NodeKind::CustomInline => renderer.custom_inline(state, node, entering),
        NodeKind::Link => renderer.link(state, node, entering),
        NodeKind::Image => renderer.image(state, node, entering),
        NodeKind::Code => renderer.code(state, node, entering),
        NodeKind::Paragraph => renderer.paragraph(state, node, entering),
        NodeKind::BlockQuote => renderer.block_quote(state, node, entering),
        NodeKind::Item => renderer.item(state, node, entering),
        NodeKind::List => renderer.list(state, node, entering),
        NodeKind::Heading => renderer.heading(state, node, entering),
        NodeKind::CodeBlock => renderer.code_block(state, node, entering),
        NodeKind::HtmlBlock => renderer.html_block(state, node, entering),
        NodeKind::CustomBlock => renderer.custom_block(state, node, entering),
        NodeKind::ThematicBreak => renderer.thematic_break(state, node, entering),
    }
}
