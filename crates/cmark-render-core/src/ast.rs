//! Document node vocabulary and attributes
//!
//! This module defines the closed set of node kinds a renderer understands and
//! the attributes a parser attaches to each node. Nodes are linked into a
//! [`Tree`](crate::Tree) before rendering.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::RenderError;

/// The kind of a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a document
    Document,
    /// Run of plain text
    Text,
    /// Soft line break inside a paragraph
    SoftBreak,
    /// Hard line break
    HardBreak,
    /// Emphasis span
    Emph,
    /// Strong emphasis span
    Strong,
    /// Raw inline markup
    HtmlInline,
    /// Inline node with caller-supplied enter/exit text
    CustomInline,
    /// Hyperlink with destination and optional title
    Link,
    /// Image with destination and optional title; children form the alt text
    Image,
    /// Inline code span
    Code,
    /// Paragraph
    Paragraph,
    /// Block quote
    BlockQuote,
    /// List item
    Item,
    /// Bullet or ordered list
    List,
    /// Heading with level 1-6
    Heading,
    /// Fenced or indented code block
    CodeBlock,
    /// Raw markup block
    HtmlBlock,
    /// Block node with caller-supplied enter/exit text
    CustomBlock,
    /// Thematic break (horizontal rule)
    ThematicBreak,
}

impl NodeKind {
    /// Every kind, in vocabulary order
    pub const ALL: [NodeKind; 20] = [
        NodeKind::Document,
        NodeKind::Text,
        NodeKind::SoftBreak,
        NodeKind::HardBreak,
        NodeKind::Emph,
        NodeKind::Strong,
        NodeKind::HtmlInline,
        NodeKind::CustomInline,
        NodeKind::Link,
        NodeKind::Image,
        NodeKind::Code,
        NodeKind::Paragraph,
        NodeKind::BlockQuote,
        NodeKind::Item,
        NodeKind::List,
        NodeKind::Heading,
        NodeKind::CodeBlock,
        NodeKind::HtmlBlock,
        NodeKind::CustomBlock,
        NodeKind::ThematicBreak,
    ];

    /// Canonical snake_case type name
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Text => "text",
            NodeKind::SoftBreak => "softbreak",
            NodeKind::HardBreak => "linebreak",
            NodeKind::Emph => "emph",
            NodeKind::Strong => "strong",
            NodeKind::HtmlInline => "html_inline",
            NodeKind::CustomInline => "custom_inline",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::Code => "code",
            NodeKind::Paragraph => "paragraph",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::Item => "item",
            NodeKind::List => "list",
            NodeKind::Heading => "heading",
            NodeKind::CodeBlock => "code_block",
            NodeKind::HtmlBlock => "html_block",
            NodeKind::CustomBlock => "custom_block",
            NodeKind::ThematicBreak => "thematic_break",
        }
    }

    /// Look up a kind by type name.
    ///
    /// Matching ignores ASCII case and the `_`/`-` separators, so
    /// `code_block`, `CodeBlock` and `code-block` all name the same kind.
    /// `hardbreak` and `linebreak` are both accepted for [`NodeKind::HardBreak`].
    pub fn parse(name: &str) -> Option<NodeKind> {
        let compact: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let kind = match compact.as_str() {
            "document" => NodeKind::Document,
            "text" => NodeKind::Text,
            "softbreak" => NodeKind::SoftBreak,
            "hardbreak" | "linebreak" => NodeKind::HardBreak,
            "emph" => NodeKind::Emph,
            "strong" => NodeKind::Strong,
            "htmlinline" => NodeKind::HtmlInline,
            "custominline" => NodeKind::CustomInline,
            "link" => NodeKind::Link,
            "image" => NodeKind::Image,
            "code" => NodeKind::Code,
            "paragraph" => NodeKind::Paragraph,
            "blockquote" => NodeKind::BlockQuote,
            "item" => NodeKind::Item,
            "list" => NodeKind::List,
            "heading" => NodeKind::Heading,
            "codeblock" => NodeKind::CodeBlock,
            "htmlblock" => NodeKind::HtmlBlock,
            "customblock" => NodeKind::CustomBlock,
            "thematicbreak" => NodeKind::ThematicBreak,
            _ => return None,
        };
        Some(kind)
    }

    /// Containers are visited twice during a walk (entering and exiting)
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::BlockQuote
                | NodeKind::List
                | NodeKind::Item
                | NodeKind::Paragraph
                | NodeKind::Heading
                | NodeKind::Emph
                | NodeKind::Strong
                | NodeKind::Link
                | NodeKind::Image
                | NodeKind::CustomInline
                | NodeKind::CustomBlock
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::parse(s).ok_or_else(|| RenderError::UnknownNodeKind(s.to_string()))
    }
}

/// List marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    Bullet,
    Ordered,
}

/// A (line, column) position in the source text, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

/// Source span of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub start: LineColumn,
    pub end: LineColumn,
}

impl SourcePos {
    pub fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: LineColumn {
                line: start.0,
                column: start.1,
            },
            end: LineColumn {
                line: end.0,
                column: end.1,
            },
        }
    }
}

/// Formats as `startLine:startCol-endLine:endCol`
impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// Attributes of a single node.
///
/// Only the attributes relevant to the node's kind are normally set; the rest
/// stay at their empty defaults. The type name is kept exactly as the
/// producer supplied it and is resolved to a [`NodeKind`] when the node is
/// rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeData {
    /// Type name, e.g. `"paragraph"`
    pub node_type: Cow<'static, str>,

    /// Raw text payload (text, code, code blocks, raw markup)
    pub literal: Option<String>,

    /// Link or image destination
    pub destination: Option<String>,

    /// Link or image title
    pub title: Option<String>,

    /// Heading depth (1-6)
    pub level: u8,

    /// Code block info string
    pub info: Option<String>,

    pub list_type: ListType,

    /// First number of an ordered list
    pub list_start: Option<u32>,

    pub list_tight: bool,

    /// Text emitted when entering a custom node
    pub on_enter: Option<String>,

    /// Text emitted when exiting a custom node
    pub on_exit: Option<String>,

    pub sourcepos: Option<SourcePos>,
}

impl NodeData {
    /// Create a node of the given kind with no attributes
    pub fn new(kind: NodeKind) -> Self {
        Self {
            node_type: Cow::Borrowed(kind.as_str()),
            ..Default::default()
        }
    }

    /// Create a node with an arbitrary type name, as a parser would supply it
    pub fn with_type(name: impl Into<String>) -> Self {
        Self {
            node_type: Cow::Owned(name.into()),
            ..Default::default()
        }
    }

    pub fn document() -> Self {
        Self::new(NodeKind::Document)
    }

    pub fn text(content: &str) -> Self {
        Self::new(NodeKind::Text).literal(content)
    }

    pub fn softbreak() -> Self {
        Self::new(NodeKind::SoftBreak)
    }

    pub fn hardbreak() -> Self {
        Self::new(NodeKind::HardBreak)
    }

    pub fn emph() -> Self {
        Self::new(NodeKind::Emph)
    }

    pub fn strong() -> Self {
        Self::new(NodeKind::Strong)
    }

    pub fn code(content: &str) -> Self {
        Self::new(NodeKind::Code).literal(content)
    }

    pub fn html_inline(html: &str) -> Self {
        Self::new(NodeKind::HtmlInline).literal(html)
    }

    pub fn html_block(html: &str) -> Self {
        Self::new(NodeKind::HtmlBlock).literal(html)
    }

    pub fn link(destination: &str, title: Option<&str>) -> Self {
        Self {
            destination: Some(destination.to_string()),
            title: title.map(str::to_string),
            ..Self::new(NodeKind::Link)
        }
    }

    pub fn image(destination: &str, title: Option<&str>) -> Self {
        Self {
            destination: Some(destination.to_string()),
            title: title.map(str::to_string),
            ..Self::new(NodeKind::Image)
        }
    }

    pub fn paragraph() -> Self {
        Self::new(NodeKind::Paragraph)
    }

    pub fn block_quote() -> Self {
        Self::new(NodeKind::BlockQuote)
    }

    pub fn heading(level: u8) -> Self {
        Self {
            level,
            ..Self::new(NodeKind::Heading)
        }
    }

    pub fn bullet_list(tight: bool) -> Self {
        Self {
            list_type: ListType::Bullet,
            list_tight: tight,
            ..Self::new(NodeKind::List)
        }
    }

    pub fn ordered_list(start: u32, tight: bool) -> Self {
        Self {
            list_type: ListType::Ordered,
            list_start: Some(start),
            list_tight: tight,
            ..Self::new(NodeKind::List)
        }
    }

    pub fn item() -> Self {
        Self::new(NodeKind::Item)
    }

    pub fn code_block(info: Option<&str>, code: &str) -> Self {
        Self {
            info: info.map(str::to_string),
            ..Self::new(NodeKind::CodeBlock).literal(code)
        }
    }

    pub fn thematic_break() -> Self {
        Self::new(NodeKind::ThematicBreak)
    }

    pub fn custom_inline(on_enter: Option<&str>, on_exit: Option<&str>) -> Self {
        Self {
            on_enter: on_enter.map(str::to_string),
            on_exit: on_exit.map(str::to_string),
            ..Self::new(NodeKind::CustomInline)
        }
    }

    pub fn custom_block(on_enter: Option<&str>, on_exit: Option<&str>) -> Self {
        Self {
            on_enter: on_enter.map(str::to_string),
            on_exit: on_exit.map(str::to_string),
            ..Self::new(NodeKind::CustomBlock)
        }
    }

    /// Set the literal payload
    pub fn literal(mut self, literal: &str) -> Self {
        self.literal = Some(literal.to_string());
        self
    }

    /// Attach a source span
    pub fn at(mut self, start: (u32, u32), end: (u32, u32)) -> Self {
        self.sourcepos = Some(SourcePos::new(start, end));
        self
    }

    /// Resolve the type name against the node vocabulary
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::parse(&self.node_type)
    }
}
