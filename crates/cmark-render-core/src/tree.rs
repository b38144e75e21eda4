//! Arena-backed document tree.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! producer builds the tree with [`Tree::append`]; renderers only ever see it
//! through read-only [`NodeRef`] handles.

use crate::ast::{NodeData, NodeKind};
use crate::walker::Walker;
use crate::{RenderError, Result};

/// Index of a node within its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Slot {
    data: NodeData,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl Slot {
    fn new(data: NodeData, parent: Option<NodeId>) -> Self {
        Self {
            data,
            parent,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }
}

/// A document tree with a single root
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Slot>,
}

impl Tree {
    /// Create a tree whose root is `root`
    pub fn new(root: NodeData) -> Self {
        Self {
            nodes: vec![Slot::new(root, None)],
        }
    }

    /// Create a tree rooted at an empty document node
    pub fn document() -> Self {
        Self::new(NodeData::document())
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root_id(),
        }
    }

    /// Append `data` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn append(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        let prev = self.nodes[parent.0].last_child;

        let mut slot = Slot::new(data, Some(parent));
        slot.prev = prev;
        self.nodes.push(slot);

        match prev {
            Some(prev) => self.nodes[prev.0].next = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);

        id
    }

    /// Get a handle to a node, if the id belongs to this tree
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes, including the root
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first walk over the whole tree
    pub fn walker(&self) -> Walker<'_> {
        Walker::new(self.root())
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::document()
    }
}

/// Read-only handle to a node within a [`Tree`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn slot(&self) -> &'a Slot {
        &self.tree.nodes[self.id.0]
    }

    fn related(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// All attributes of this node
    pub fn data(&self) -> &'a NodeData {
        &self.slot().data
    }

    /// The type name as supplied by the producer
    pub fn node_type(&self) -> &'a str {
        &self.slot().data.node_type
    }

    /// Resolve the node's kind, failing on names outside the vocabulary
    pub fn kind(&self) -> Result<NodeKind> {
        self.data()
            .kind()
            .ok_or_else(|| RenderError::UnknownNodeKind(self.node_type().to_string()))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.related(self.slot().parent)
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.related(self.slot().first_child)
    }

    pub fn last_child(&self) -> Option<NodeRef<'a>> {
        self.related(self.slot().last_child)
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.related(self.slot().next)
    }

    pub fn prev_sibling(&self) -> Option<NodeRef<'a>> {
        self.related(self.slot().prev)
    }

    /// Direct children in document order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(self.first_child(), |node| node.next_sibling())
    }

    /// Depth-first walk over this node's subtree
    pub fn walker(&self) -> Walker<'a> {
        Walker::new(*self)
    }

    pub fn literal(&self) -> Option<&'a str> {
        self.data().literal.as_deref()
    }

    pub fn destination(&self) -> Option<&'a str> {
        self.data().destination.as_deref()
    }

    pub fn title(&self) -> Option<&'a str> {
        self.data().title.as_deref()
    }

    pub fn info(&self) -> Option<&'a str> {
        self.data().info.as_deref()
    }

    pub fn on_enter(&self) -> Option<&'a str> {
        self.data().on_enter.as_deref()
    }

    pub fn on_exit(&self) -> Option<&'a str> {
        self.data().on_exit.as_deref()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("type", &self.node_type())
            .finish()
    }
}
