//! Load trees from the nested JSON form produced by JavaScript CommonMark parsers.
//!
//! ```json
//! { "type": "document", "children": [
//!     { "type": "heading", "level": 2, "sourcepos": [[1, 1], [1, 6]],
//!       "children": [{ "type": "text", "literal": "Hi" }] }
//! ] }
//! ```
//!
//! Type names are not validated here; an unknown `type` is kept as-is and
//! reported when the tree is rendered.

use std::borrow::Cow;

use serde::Deserialize;

use crate::ast::{ListType, NodeData, SourcePos};
use crate::tree::{NodeId, Tree};
use crate::Result;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonNode {
    #[serde(rename = "type")]
    node_type: String,
    literal: Option<String>,
    destination: Option<String>,
    title: Option<String>,
    level: Option<u8>,
    info: Option<String>,
    list_type: Option<JsonListType>,
    list_start: Option<u32>,
    list_tight: Option<bool>,
    on_enter: Option<String>,
    on_exit: Option<String>,
    sourcepos: Option<[[u32; 2]; 2]>,
    #[serde(default)]
    children: Vec<JsonNode>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JsonListType {
    Bullet,
    Ordered,
}

impl From<JsonListType> for ListType {
    fn from(value: JsonListType) -> Self {
        match value {
            JsonListType::Bullet => ListType::Bullet,
            JsonListType::Ordered => ListType::Ordered,
        }
    }
}

impl JsonNode {
    /// Split into node attributes and children
    fn into_parts(self) -> (NodeData, Vec<JsonNode>) {
        let data = NodeData {
            node_type: Cow::Owned(self.node_type),
            literal: self.literal,
            destination: self.destination,
            title: self.title,
            level: self.level.unwrap_or_default(),
            info: self.info,
            list_type: self.list_type.map(ListType::from).unwrap_or_default(),
            list_start: self.list_start,
            list_tight: self.list_tight.unwrap_or_default(),
            on_enter: self.on_enter,
            on_exit: self.on_exit,
            sourcepos: self
                .sourcepos
                .map(|[start, end]| SourcePos::new((start[0], start[1]), (end[0], end[1]))),
        };
        (data, self.children)
    }
}

impl Tree {
    /// Build a tree from its JSON description
    pub fn from_json(json: &str) -> Result<Tree> {
        let root: JsonNode = serde_json::from_str(json)?;
        let (data, children) = root.into_parts();

        let mut tree = Tree::new(data);
        let mut pending: Vec<(NodeId, Vec<JsonNode>)> = vec![(tree.root_id(), children)];

        // Children are appended in order per parent, so siblings keep their order
        while let Some((parent, children)) = pending.pop() {
            for child in children {
                let (data, grandchildren) = child.into_parts();
                let id = tree.append(parent, data);
                if !grandchildren.is_empty() {
                    pending.push((id, grandchildren));
                }
            }
        }

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::RenderError;

    #[test]
    fn test_from_json() {
        let tree = Tree::from_json(
            r#"{
                "type": "document",
                "children": [
                    {
                        "type": "heading",
                        "level": 2,
                        "sourcepos": [[1, 1], [1, 6]],
                        "children": [{ "type": "text", "literal": "Hi" }]
                    },
                    {
                        "type": "list",
                        "listType": "ordered",
                        "listStart": 3,
                        "listTight": true,
                        "children": [{ "type": "item" }]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(tree.len(), 5);

        let heading = tree.root().first_child().unwrap();
        assert_eq!(heading.kind().unwrap(), NodeKind::Heading);
        assert_eq!(heading.data().level, 2);
        assert_eq!(heading.data().sourcepos, Some(SourcePos::new((1, 1), (1, 6))));
        assert_eq!(heading.first_child().unwrap().literal(), Some("Hi"));

        let list = heading.next_sibling().unwrap();
        assert_eq!(list.data().list_type, ListType::Ordered);
        assert_eq!(list.data().list_start, Some(3));
        assert!(list.data().list_tight);
        assert_eq!(list.children().count(), 1);
    }

    #[test]
    fn test_from_json_keeps_sibling_order() {
        let tree = Tree::from_json(
            r#"{ "type": "paragraph", "children": [
                { "type": "text", "literal": "a" },
                { "type": "emph", "children": [{ "type": "text", "literal": "b" }] },
                { "type": "text", "literal": "c" }
            ] }"#,
        )
        .unwrap();

        let literals: Vec<&str> = tree
            .walker()
            .filter_map(|e| e.node.literal())
            .collect();
        assert_eq!(literals, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_json_accepts_unknown_type() {
        let tree = Tree::from_json(r#"{ "type": "document", "children": [{ "type": "table" }] }"#)
            .unwrap();
        let table = tree.root().first_child().unwrap();
        assert!(table.kind().is_err());
    }

    #[test]
    fn test_from_json_null_attributes() {
        let tree = Tree::from_json(
            r#"{ "type": "document", "level": null, "listTight": null, "title": null,
                 "sourcepos": null, "children": [] }"#,
        )
        .unwrap();
        let root = tree.root().data();
        assert_eq!(root.level, 0);
        assert!(!root.list_tight);
        assert_eq!(root.title, None);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Tree::from_json(r#"{ "children": [] }"#).unwrap_err();
        assert!(matches!(err, RenderError::Json(_)));
    }
}
