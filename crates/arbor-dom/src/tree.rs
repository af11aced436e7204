//! Tree arena and construction surface
//!
//! A `Tree` owns every node of one document in a single `Vec` arena.
//! Producers push nodes and wire them with `append_child`, which keeps
//! the sibling chain consistent with each container's child order.

use crate::{Attribute, Node, NodeId, QuirksMode};

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;

/// Tree operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Id does not resolve to a node in this arena
    #[error("node {0:?} not found")]
    NotFound(NodeId),

    /// Target node carries no child sequence
    #[error("node {0:?} is not a container")]
    NotAContainer(NodeId),

    /// Node's kind tag does not match any known variant payload.
    ///
    /// Signals a corrupted tree; never occurs for consistently
    /// constructed nodes.
    #[error("unsupported node kind {0:?}")]
    UnsupportedKind(crate::NodeKind),
}

/// Arena-based markup tree
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node to the arena, returning its id
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a document root node
    pub fn create_document(&mut self, quirks_mode: Option<QuirksMode>) -> NodeId {
        let mut node = Node::document();
        if let crate::NodeData::Document { quirks_mode: qm, .. } = &mut node.data {
            *qm = quirks_mode;
        }
        self.push(node)
    }

    /// Create an element node
    pub fn create_element(&mut self, name: impl Into<String>, attrs: Vec<Attribute>) -> NodeId {
        self.push(Node::element(name, attrs))
    }

    /// Create a text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a comment node
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a processing instruction
    pub fn create_processing_instruction(
        &mut self,
        name: impl Into<String>,
        data: impl Into<String>,
    ) -> NodeId {
        self.push(Node::processing_instruction(name, data))
    }

    /// Create an empty character-data section
    pub fn create_cdata(&mut self) -> NodeId {
        self.push(Node::cdata())
    }

    /// Append a child to a container, maintaining linkage invariants.
    ///
    /// Sets the child's parent, links it to the previous last child, and
    /// pushes it onto the container's child sequence.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(child).is_none() {
            return Err(DomError::NotFound(child));
        }
        let prev_last = {
            let node = self.get(parent).ok_or(DomError::NotFound(parent))?;
            let children = node
                .data
                .children()
                .ok_or(DomError::NotAContainer(parent))?;
            children.last().copied()
        };

        tracing::debug!("appending {:?} to {:?}", child, parent);

        if let Some(prev) = prev_last {
            self.nodes[prev.index()].next_sibling = Some(child);
        }
        {
            let node = &mut self.nodes[child.index()];
            node.parent = Some(parent);
            node.prev_sibling = prev_last;
            node.next_sibling = None;
        }
        self.nodes[parent.index()]
            .data
            .children_mut()
            .ok_or(DomError::NotAContainer(parent))?
            .push(child);
        Ok(())
    }

    /// Child ids of a container in document order, empty for data nodes
    pub fn child_nodes(&self, id: NodeId) -> &[NodeId] {
        self.get(id)
            .and_then(|n| n.data.children())
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    /// First child of a container
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.child_nodes(id).first().copied()
    }

    /// Last child of a container
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.child_nodes(id).last().copied()
    }

    /// Iterate a container's children as `(id, node)` pairs
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        self.child_nodes(id)
            .iter()
            .filter_map(move |&child| self.get(child).map(|node| (child, node)))
    }
}
