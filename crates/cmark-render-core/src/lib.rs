//! cmark-render-core - document tree and generic render engine
//!
//! This crate provides the data structures shared by every renderer: the
//! closed vocabulary of node kinds, an arena tree of nodes, a depth-first
//! walker and the [`Render`] trait that dispatches walk events to per-kind
//! handlers. `cmark-render` builds its HTML serializer on top of it.
//!
//! # Architecture
//!
//! ```text
//!                ┌──────┐  Event(node, entering)  ┌──────────────┐
//! Parser ──────▶ │ Tree │ ──────── Walker ──────▶ │ impl Render  │ ──▶ String
//!  (external)    └──────┘                         │  + Output    │
//!                                                 └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use cmark_render_core::{NodeData, NodeRef, Output, Render, Tree};
//!
//! struct Shout;
//!
//! impl Render for Shout {
//!     type State = String;
//!
//!     fn text(&self, out: &mut String, node: NodeRef<'_>, _entering: bool) {
//!         out.out(&node.literal().unwrap_or_default().to_uppercase());
//!     }
//! }
//!
//! let mut tree = Tree::document();
//! let para = tree.append(tree.root_id(), NodeData::paragraph());
//! tree.append(para, NodeData::text("hello"));
//!
//! assert_eq!(Shout.render(&tree).unwrap(), "HELLO");
//! ```

mod ast;
#[cfg(feature = "json")]
mod json;
mod render;
mod tree;
mod walker;

pub use ast::{LineColumn, ListType, NodeData, NodeKind, SourcePos};
pub use render::{Output, Render};
pub use tree::{NodeId, NodeRef, Tree};
pub use walker::{Event, Walker};

/// Error type for render operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A node's type name is outside the node vocabulary
    #[error("Unknown node type: {0}")]
    UnknownNodeKind(String),

    #[cfg(feature = "json")]
    #[error("Invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
