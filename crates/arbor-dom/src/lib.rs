//! Arbor DOM - Markup Tree Model
//!
//! Arena-based tree representation for parsed markup documents
//! (HTML/XML-like). Stores nodes, parent/sibling linkage, and optional
//! source provenance; classifies node variants; clones subtrees. Parsing
//! and serialization live in the crates that produce and consume trees.

mod clone;
mod kind;
mod node;
mod tree;

pub use kind::NodeKind;
pub use node::{
    Attribute, DoctypeIds, ElementData, Node, NodeData, PiData, QuirksMode, SourceLocation,
};
pub use tree::{DomError, DomResult, Tree};

/// Node identifier (index into a tree's arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
