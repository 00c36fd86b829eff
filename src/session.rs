use crate::document::{Document, NodeType, ValidationReport, validate};
use crate::editor::Editor;
use crate::error::EditError;
use crate::history::History;
use crate::layout::{Layout, calculate_layout};
use tracing::{debug, warn};

/// Owns the (document, history) pair and serializes edit intents the way a
/// presentation layer drives the engine: one intent at a time, each running
/// to completion before the next is admitted. Successful structural edits
/// are committed to history; rejected and no-effect edits leave the session
/// untouched. A multi-threaded host wraps the whole session in a mutex.
#[derive(Debug, Clone)]
pub struct Session {
    editor: Editor,
    history: History,
    document: Document,
}

impl Session {
    /// A fresh session: one start node, history seeded with that document.
    pub fn new() -> Self {
        let document = Document::initial();
        Self {
            editor: Editor::new(),
            history: History::new(document.clone()),
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Adds a node under `parent_id` and commits the result to history.
    pub fn add_node(
        &mut self,
        parent_id: &str,
        node_type: NodeType,
        label: Option<&str>,
        insert_index: Option<usize>,
    ) -> Result<(), EditError> {
        match self
            .editor
            .add_node(&self.document, parent_id, node_type, label, insert_index)
        {
            Ok(updated) => {
                self.commit(updated);
                Ok(())
            }
            Err(error) => {
                warn!(%error, parent_id, "add rejected");
                Err(error)
            }
        }
    }

    /// Deletes `node_id` with its subtree and commits the result to history.
    /// An id that no longer exists is quietly ignored, with no history entry.
    pub fn delete_node(&mut self, node_id: &str) -> Result<(), EditError> {
        if node_id != self.document.root_id && !self.document.contains(node_id) {
            debug!(node_id, "delete target already absent");
            return Ok(());
        }
        match self.editor.delete_node(&self.document, node_id) {
            Ok(updated) => {
                self.commit(updated);
                Ok(())
            }
            Err(error) => {
                warn!(%error, node_id, "delete rejected");
                Err(error)
            }
        }
    }

    /// Relabels `node_id` and commits the result to history. Relabeling an
    /// existing node always records an entry, even when the trimmed label
    /// was empty and the node kept its old one; an absent id is quietly
    /// ignored.
    pub fn relabel_node(&mut self, node_id: &str, label: &str) -> Result<(), EditError> {
        if !self.document.contains(node_id) {
            debug!(node_id, "relabel target already absent");
            return Ok(());
        }
        let updated = self.editor.relabel_node(&self.document, node_id, label)?;
        self.commit(updated);
        Ok(())
    }

    /// Steps the session back one history entry. Returns false at the
    /// oldest retained snapshot.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(document) => {
                self.document = document;
                true
            }
            None => false,
        }
    }

    /// Steps the session forward one history entry. Returns false at the tip.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(document) => {
                self.document = document;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Recomputes placement for the current document.
    pub fn layout(&self) -> Layout {
        calculate_layout(&self.document)
    }

    /// Runs the structural validator over the current document.
    pub fn validate(&self) -> ValidationReport {
        validate(&self.document)
    }

    /// Pretty JSON for the save-to-log collaborator. The shape is the plain
    /// keyed node table plus the root id and round-trips losslessly.
    pub fn document_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.document)
    }

    fn commit(&mut self, updated: Document) {
        self.history.apply(updated.clone());
        self.document = updated;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
