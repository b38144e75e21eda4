//! # cmark-render
//!
//! Render CommonMark document trees to HTML.
//!
//! ## Design
//!
//! The document tree comes from an external parser. This crate only walks it:
//!
//! - **Generic engine**: [`Render`] declares one handler per node kind with
//!   no-op defaults, so a renderer overrides only what it emits
//! - **HTML serializer**: [`HtmlRenderer`] escapes text, filters unsafe link
//!   and image destinations in safe mode and keeps block output separated by
//!   single newlines
//! - **Stateless renderers**: render state lives in a fresh [`HtmlState`] per
//!   call, so one renderer can be shared between threads
//!
//! ## Example (building a tree)
//!
//! ```rust
//! use cmark_render::{HtmlRenderer, NodeData, Render, Tree};
//!
//! let mut tree = Tree::document();
//! let para = tree.append(tree.root_id(), NodeData::paragraph());
//! tree.append(para, NodeData::text("A & B"));
//!
//! let html = HtmlRenderer::default().render(&tree).unwrap();
//! assert_eq!(html, "<p>A &amp; B</p>\n");
//! ```
//!
//! ## Example (JSON tree, safe mode)
//!
//! ```rust
//! use cmark_render::{render_html, HtmlOptions, Tree};
//!
//! let tree = Tree::from_json(r#"{
//!     "type": "paragraph",
//!     "children": [{
//!         "type": "link",
//!         "destination": "javascript:alert(1)",
//!         "children": [{ "type": "text", "literal": "click" }]
//!     }]
//! }"#).unwrap();
//!
//! let options = HtmlOptions { safe: true, ..Default::default() };
//! assert_eq!(render_html(&tree, &options).unwrap(), "<p><a>click</a></p>\n");
//! ```

mod html;
mod options;
mod utilities;

pub use cmark_render_core::{
    Event, LineColumn, ListType, NodeData, NodeId, NodeKind, NodeRef, Output, Render, RenderError,
    Result, SourcePos, Tree, Walker,
};
pub use html::{render_html, HtmlRenderer, HtmlState};
pub use options::HtmlOptions;
pub use utilities::*;
