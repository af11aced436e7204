//! Node cloning
//!
//! Deep/shallow clone of a node into the same arena. A clone is
//! structurally self-contained: its parent and sibling links are unset,
//! and a deep clone's subtree is re-threaded entirely within the new
//! nodes, sharing no mutable structure with the original.

use crate::node::{ElementData, NodeData};
use crate::tree::{DomError, DomResult, Tree};
use crate::{Node, NodeId, NodeKind};

impl Tree {
    /// Clone a node, optionally with its whole subtree.
    ///
    /// A shallow clone of a container gets an empty child sequence
    /// rather than sharing children with the original. Source offsets
    /// and location records copy verbatim, absent stays absent.
    ///
    /// Fails with [`DomError::UnsupportedKind`] when the node's kind tag
    /// does not match its payload, which only happens on a tree mutated
    /// into inconsistency.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        tracing::trace!("cloning {:?} (deep: {})", id, deep);

        let src = self.get(id).ok_or(DomError::NotFound(id))?;
        let kind = src.kind;
        let start_index = src.start_index;
        let end_index = src.end_index;
        let source_location = src.source_location;

        // Variant dispatch. Container payloads still carry the original
        // child ids here; the sequence is rebuilt below.
        let mut data = match (kind, &src.data) {
            (NodeKind::Text, NodeData::Text(d)) => NodeData::Text(d.clone()),
            (NodeKind::Comment, NodeData::Comment(d)) => NodeData::Comment(d.clone()),
            (NodeKind::Tag | NodeKind::Script | NodeKind::Style, NodeData::Element(e)) => {
                NodeData::Element(ElementData {
                    name: e.name.clone(),
                    attrs: e.attrs.clone(),
                    namespace: e.namespace.clone(),
                    children: e.children.clone(),
                })
            }
            (NodeKind::CData, NodeData::CData { children }) => NodeData::CData {
                children: children.clone(),
            },
            (NodeKind::Root, NodeData::Document { children, quirks_mode }) => {
                NodeData::Document {
                    children: children.clone(),
                    quirks_mode: *quirks_mode,
                }
            }
            // Doctype identifiers travel as a group inside PiData
            (NodeKind::ProcessingInstruction, NodeData::Pi(pi)) => NodeData::Pi(pi.clone()),
            (kind, _) => return Err(DomError::UnsupportedKind(kind)),
        };

        if let Some(children) = data.children_mut() {
            let originals = std::mem::take(children);
            if deep {
                let mut cloned = Vec::with_capacity(originals.len());
                for child in originals {
                    cloned.push(self.clone_node(child, true)?);
                }
                *children = cloned;
            }
        }

        let new_id = self.push(Node {
            kind,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            start_index,
            end_index,
            source_location,
            data,
        });
        self.rethread_children(new_id);
        Ok(new_id)
    }

    /// Rebuild sibling links and parent back-references for a
    /// container's child sequence.
    fn rethread_children(&mut self, parent: NodeId) {
        let children: Vec<NodeId> = match self.get(parent).and_then(|n| n.data.children()) {
            Some(children) => children.clone(),
            None => return,
        };
        for (i, &child) in children.iter().enumerate() {
            let prev = if i > 0 { Some(children[i - 1]) } else { None };
            let next = children.get(i + 1).copied();
            if let Some(node) = self.get_mut(child) {
                node.parent = Some(parent);
                node.prev_sibling = prev;
                node.next_sibling = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    #[test]
    fn test_shallow_clone_of_container_is_empty() {
        let mut tree = Tree::new();
        let div = tree.create_element("div", vec![Attribute::new("id", "x")]);
        let text = tree.create_text("inner");
        tree.append_child(div, text).unwrap();

        let copy = tree.clone_node(div, false).unwrap();
        let node = tree.get(copy).unwrap();
        assert!(tree.child_nodes(copy).is_empty());
        assert_eq!(node.parent, None);
        assert_eq!(node.as_element().unwrap().get_attr("id"), Some("x"));
    }

    #[test]
    fn test_clone_fails_on_kind_payload_mismatch() {
        let mut tree = Tree::new();
        let div = tree.create_element("div", Vec::new());
        // Corrupt the kind tag through the public field
        tree.get_mut(div).unwrap().kind = NodeKind::Text;

        assert_eq!(
            tree.clone_node(div, false),
            Err(DomError::UnsupportedKind(NodeKind::Text))
        );
    }
}
