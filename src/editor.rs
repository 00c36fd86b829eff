use crate::document::{Document, Node, NodeType};
use crate::error::EditError;
use std::collections::HashSet;

/// Monotonic node id source, owned by the editing context.
///
/// Seeded at zero so test runs are reproducible. Ids must stay unique for
/// the lifetime of every document the generator feeds; a collision is a
/// correctness bug, not a recoverable state.
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    next: u64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next += 1;
        format!("node_{}", self.next)
    }
}

/// Implements the structural edits: add, delete and relabel.
///
/// Every operation takes the current document by reference and returns a
/// wholly new one; feeding the result into a `History` is the caller's job.
/// Operations are total, failure is always a returned `EditError`.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    ids: NodeIdGenerator,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node of `node_type` under `parent_id`.
    ///
    /// The node gets `label`, or the type's default when none (or an empty
    /// string) is given, and starts with no children. `insert_index` places
    /// its id at a specific position in the parent's children list, which
    /// for branch parents is the path order; an absent or out-of-range index
    /// appends. No other node is touched, so an action parent can
    /// transiently hold two children until the validator flags it.
    pub fn add_node(
        &mut self,
        document: &Document,
        parent_id: &str,
        node_type: NodeType,
        label: Option<&str>,
        insert_index: Option<usize>,
    ) -> Result<Document, EditError> {
        let mut updated = document.clone();

        let Some(parent) = updated.nodes.get_mut(parent_id) else {
            return Err(EditError::ParentNotFound {
                parent_id: parent_id.to_string(),
            });
        };
        if parent.node_type == NodeType::End {
            return Err(EditError::EndNodeChild {
                node_id: parent_id.to_string(),
            });
        }

        let new_id = self.ids.next_id();
        let label = match label {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => node_type.default_label().to_string(),
        };

        match insert_index {
            Some(index) if index <= parent.children.len() => {
                parent.children.insert(index, new_id.clone());
            }
            _ => parent.children.push(new_id.clone()),
        }

        let node = Node::new(new_id.clone(), node_type, label);
        updated.nodes.insert(new_id, node);

        Ok(updated)
    }

    /// Removes `node_id` and every node reachable from it.
    ///
    /// Each referencing parent has the first occurrence of the id spliced
    /// out and the deleted node's children promoted into its place, in
    /// order. The subtree is then collected from the original node, promoted
    /// children included, and purged; a final sweep drops any child id left
    /// dangling. Deleting the root is rejected; deleting an absent id
    /// returns the document unchanged.
    pub fn delete_node(
        &self,
        document: &Document,
        node_id: &str,
    ) -> Result<Document, EditError> {
        if node_id == document.root_id {
            return Err(EditError::RootDeletion);
        }

        let mut updated = document.clone();
        let Some(target) = updated.get(node_id) else {
            return Ok(updated);
        };
        let promoted = target.children.clone();

        for parent_id in updated.parent_ids(node_id) {
            if let Some(parent) = updated.nodes.get_mut(&parent_id) {
                if let Some(position) = parent.children.iter().position(|c| c == node_id) {
                    parent
                        .children
                        .splice(position..=position, promoted.iter().cloned());
                }
            }
        }

        // The subtree is collected before any removal, so it still includes
        // the children just promoted into the parent.
        let descendants = updated.descendant_ids(node_id);
        updated.nodes.remove(node_id);
        for descendant_id in &descendants {
            updated.nodes.remove(descendant_id);
        }

        // Defensive sweep against dangling references.
        let live: HashSet<String> = updated.nodes.keys().cloned().collect();
        for node in updated.nodes.values_mut() {
            node.children.retain(|child_id| live.contains(child_id));
        }

        Ok(updated)
    }

    /// Replaces the label of `node_id` with the trimmed `new_label`.
    ///
    /// A whitespace-only label is never committed, the node keeps its
    /// current one. Targeting an absent id returns the document unchanged.
    pub fn relabel_node(
        &self,
        document: &Document,
        node_id: &str,
        new_label: &str,
    ) -> Result<Document, EditError> {
        let mut updated = document.clone();
        if let Some(node) = updated.nodes.get_mut(node_id) {
            let trimmed = new_label.trim();
            if !trimmed.is_empty() {
                node.label = trimmed.to_string();
            }
        }
        Ok(updated)
    }
}
