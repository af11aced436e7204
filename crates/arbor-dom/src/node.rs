//! Tree nodes
//!
//! `Node` carries the kind tag, linkage, and optional source provenance;
//! `NodeData` holds the variant payload. Linkage is by `NodeId` index
//! into the owning `Tree` arena, so parent back-references cost nothing
//! and cannot form ownership cycles.

use crate::{NodeId, NodeKind};

/// A single node in a markup tree.
///
/// Fields are public: producers (parsers, tree builders) construct nodes
/// and wire links directly, and are trusted to keep the sibling chain
/// consistent with each container's child order.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind tag, fixed at construction
    pub kind: NodeKind,
    /// Owning container, `None` for a detached node or the root
    pub parent: Option<NodeId>,
    /// Previous sibling within the parent's child sequence
    pub prev_sibling: Option<NodeId>,
    /// Next sibling within the parent's child sequence
    pub next_sibling: Option<NodeId>,
    /// Byte offset where this node starts in the source text
    pub start_index: Option<usize>,
    /// Byte offset just past the end of this node in the source text
    pub end_index: Option<usize>,
    /// Structured source position, set when location tracking is on
    pub source_location: Option<SourceLocation>,
    /// Variant payload
    pub data: NodeData,
}

impl Node {
    fn with_data(kind: NodeKind, data: NodeData) -> Self {
        Self {
            kind,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            start_index: None,
            end_index: None,
            source_location: None,
            data,
        }
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeKind::Text, NodeData::Text(content.into()))
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeKind::Comment, NodeData::Comment(content.into()))
    }

    /// Create a processing instruction
    pub fn processing_instruction(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self::with_data(
            NodeKind::ProcessingInstruction,
            NodeData::Pi(PiData {
                name: name.into(),
                data: data.into(),
                doctype: None,
            }),
        )
    }

    /// Create an element node.
    ///
    /// Elements named "script" or "style" get the specialized kinds so
    /// raw-text handling never needs a name comparison.
    pub fn element(name: impl Into<String>, attrs: Vec<Attribute>) -> Self {
        let name = name.into();
        let kind = NodeKind::for_tag_name(&name);
        Self::with_data(
            kind,
            NodeData::Element(ElementData {
                name,
                attrs,
                namespace: None,
                children: Vec::new(),
            }),
        )
    }

    /// Create an empty character-data section
    pub fn cdata() -> Self {
        Self::with_data(NodeKind::CData, NodeData::CData { children: Vec::new() })
    }

    /// Create a document root node
    pub fn document() -> Self {
        Self::with_data(
            NodeKind::Root,
            NodeData::Document {
                children: Vec::new(),
                quirks_mode: None,
            },
        )
    }

    /// Check if this is an element (tag, script, or style)
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind.is_element_kind()
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Check if this is a comment
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind == NodeKind::Comment
    }

    /// Check if this is a processing instruction
    #[inline]
    pub fn is_processing_instruction(&self) -> bool {
        self.kind == NodeKind::ProcessingInstruction
    }

    /// Check if this is a character-data section
    #[inline]
    pub fn is_cdata(&self) -> bool {
        self.kind == NodeKind::CData
    }

    /// Check if this is the document root
    #[inline]
    pub fn is_document(&self) -> bool {
        self.kind == NodeKind::Root
    }

    /// Check if this node's payload carries a child sequence.
    ///
    /// This asks the payload itself, not the kind tag, so it stays
    /// correct for any container variant added later.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.data.children().is_some()
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get processing-instruction data if this is one
    #[inline]
    pub fn as_processing_instruction(&self) -> Option<&PiData> {
        match &self.data {
            NodeData::Pi(pi) => Some(pi),
            _ => None,
        }
    }

    /// DOM alias for `parent`
    #[inline]
    pub fn parent_node(&self) -> Option<NodeId> {
        self.parent
    }

    /// DOM alias for `prev_sibling`
    #[inline]
    pub fn previous_sibling(&self) -> Option<NodeId> {
        self.prev_sibling
    }

    /// DOM alias for `next_sibling`
    #[inline]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// DOM-Level-1 numeric node type
    #[inline]
    pub fn node_type(&self) -> u8 {
        self.kind.dom_code()
    }

    /// DOM alias for the string payload of data-bearing nodes.
    ///
    /// Text, comments, and processing instructions report their `data`;
    /// containers have no node value.
    pub fn node_value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(d) | NodeData::Comment(d) => Some(d),
            NodeData::Pi(pi) => Some(&pi.data),
            _ => None,
        }
    }

    /// Mutable access to the string payload of data-bearing nodes
    pub fn node_value_mut(&mut self) -> Option<&mut String> {
        match &mut self.data {
            NodeData::Text(d) | NodeData::Comment(d) => Some(d),
            NodeData::Pi(pi) => Some(&mut pi.data),
            _ => None,
        }
    }
}

/// Variant payload of a node
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Text content
    Text(String),
    /// Comment content
    Comment(String),
    /// Processing instruction or doctype declaration
    Pi(PiData),
    /// Element with attributes and children
    Element(ElementData),
    /// Character-data section
    CData { children: Vec<NodeId> },
    /// Document root
    Document {
        children: Vec<NodeId>,
        quirks_mode: Option<QuirksMode>,
    },
}

impl NodeData {
    /// Child sequence of container payloads, `None` for data nodes
    pub fn children(&self) -> Option<&Vec<NodeId>> {
        match self {
            Self::Element(e) => Some(&e.children),
            Self::CData { children } | Self::Document { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Mutable child sequence of container payloads
    pub fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::Element(e) => Some(&mut e.children),
            Self::CData { children } | Self::Document { children, .. } => Some(children),
            _ => None,
        }
    }
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name
    pub name: String,
    /// Attributes, keys unique
    pub attrs: Vec<Attribute>,
    /// Element namespace, set by namespace-aware producers
    pub namespace: Option<String>,
    /// Child nodes in document order
    pub children: Vec<NodeId>,
}

impl ElementData {
    /// DOM alias for `name`
    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing the value if the name exists
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute {
            name,
            value,
            namespace: None,
            prefix: None,
        });
    }
}

/// A single element attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    /// Attribute namespace, set by namespace-aware producers
    pub namespace: Option<String>,
    /// Attribute prefix, set by namespace-aware producers
    pub prefix: Option<String>,
}

impl Attribute {
    /// Plain name/value attribute with no namespace information
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            namespace: None,
            prefix: None,
        }
    }
}

/// Processing-instruction data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiData {
    /// Instruction target, e.g. a doctype name
    pub name: String,
    /// Instruction content
    pub data: String,
    /// Doctype identifiers, present only on doctype declarations
    pub doctype: Option<DoctypeIds>,
}

/// Doctype identifiers.
///
/// The three identifiers travel as a group: cloning a doctype node
/// copies the whole record even when the public or system id is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctypeIds {
    pub name: String,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
}

/// Document parsing compatibility mode, stored but not interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuirksMode {
    NoQuirks,
    Quirks,
    LimitedQuirks,
}

/// Source position of a node in the original input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub start_offset: usize,
    pub end_offset: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub start_col: usize,
    pub end_col: usize,
}
