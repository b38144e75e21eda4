//! Depth-first traversal producing entering/exiting events.

use crate::tree::NodeRef;

/// One step of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'a> {
    pub node: NodeRef<'a>,
    /// `true` on descent; `false` when leaving a container
    pub entering: bool,
}

/// Depth-first iterator over a subtree.
///
/// Container nodes yield an entering event before their children and an
/// exiting event after them. Leaf nodes, and nodes whose type name is not in
/// the vocabulary, yield a single entering event. The walk never leaves the
/// subtree of the node it started from.
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    root: NodeRef<'a>,
    current: Option<NodeRef<'a>>,
    entering: bool,
}

impl<'a> Walker<'a> {
    pub fn new(root: NodeRef<'a>) -> Self {
        Self {
            root,
            current: Some(root),
            entering: true,
        }
    }
}

fn is_container(node: &NodeRef<'_>) -> bool {
    node.data().kind().is_some_and(|kind| kind.is_container())
}

impl<'a> Iterator for Walker<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        let node = self.current?;
        let entering = self.entering;

        if entering && is_container(&node) {
            match node.first_child() {
                Some(child) => self.current = Some(child),
                None => self.entering = false,
            }
        } else if node == self.root {
            self.current = None;
        } else if let Some(next) = node.next_sibling() {
            self.current = Some(next);
            self.entering = true;
        } else {
            self.current = node.parent();
            self.entering = false;
        }

        Some(Event { node, entering })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::NodeData;
    use crate::tree::Tree;

    fn trace(tree: &Tree) -> Vec<String> {
        tree.walker()
            .map(|e| format!("{}{}", if e.entering { "+" } else { "-" }, e.node.node_type()))
            .collect()
    }

    #[test]
    fn test_containers_visited_twice() {
        let mut tree = Tree::document();
        let para = tree.append(tree.root_id(), NodeData::paragraph());
        tree.append(para, NodeData::text("a"));
        let em = tree.append(para, NodeData::emph());
        tree.append(em, NodeData::text("b"));
        tree.append(tree.root_id(), NodeData::thematic_break());

        assert_eq!(
            trace(&tree),
            vec![
                "+document",
                "+paragraph",
                "+text",
                "+emph",
                "+text",
                "-emph",
                "-paragraph",
                "+thematic_break",
                "-document",
            ]
        );
    }

    #[test]
    fn test_empty_container() {
        let mut tree = Tree::document();
        tree.append(tree.root_id(), NodeData::paragraph());
        assert_eq!(
            trace(&tree),
            vec!["+document", "+paragraph", "-paragraph", "-document"]
        );
    }

    #[test]
    fn test_leaf_root() {
        let tree = Tree::new(NodeData::text("alone"));
        assert_eq!(trace(&tree), vec!["+text"]);
    }

    #[test]
    fn test_unknown_kind_walked_as_leaf() {
        let mut tree = Tree::document();
        let table = tree.append(tree.root_id(), NodeData::with_type("table"));
        tree.append(table, NodeData::text("hidden"));
        assert_eq!(trace(&tree), vec!["+document", "+table", "-document"]);
    }

    #[test]
    fn test_subtree_walk_stays_inside() {
        let mut tree = Tree::document();
        let quote = tree.append(tree.root_id(), NodeData::block_quote());
        let para = tree.append(quote, NodeData::paragraph());
        tree.append(para, NodeData::text("q"));
        tree.append(tree.root_id(), NodeData::paragraph());

        let events: Vec<(String, bool)> = tree
            .get(quote)
            .unwrap()
            .walker()
            .map(|e| (e.node.node_type().to_string(), e.entering))
            .collect();
        assert_eq!(
            events,
            vec![
                ("block_quote".to_string(), true),
                ("paragraph".to_string(), true),
                ("text".to_string(), true),
                ("paragraph".to_string(), false),
                ("block_quote".to_string(), false),
            ]
        );
    }
}
