use thiserror::Error;

/// Failures signaled by structural edit operations.
///
/// Only rule violations are errors. Well-formed edits that happen to have no
/// effect (deleting an id that is already gone, relabeling to whitespace)
/// return an unchanged document instead, so callers can always tell a
/// rejection apart from a quiet no-change edit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Parent node '{parent_id}' not found")]
    ParentNotFound { parent_id: String },

    #[error("Node '{node_id}' is an end node and accepts no children")]
    EndNodeChild { node_id: String },

    #[error("The start node is the workflow root and cannot be deleted")]
    RootDeletion,
}
