//! Common test utilities for building workflow documents.
use kigumi::prelude::*;

/// A document grown to start -> action -> branch -> (end, end), together
/// with the editor that produced it and the generated ids.
#[allow(dead_code)]
pub struct BranchFixture {
    pub editor: Editor,
    pub document: Document,
    pub action_id: String,
    pub branch_id: String,
    pub end_yes_id: String,
    pub end_no_id: String,
}

#[allow(dead_code)]
pub fn create_branch_fixture() -> BranchFixture {
    let mut editor = Editor::new();
    let document = Document::initial();

    let document = editor
        .add_node(&document, "start", NodeType::Action, Some("Check stock"), None)
        .expect("add action");
    let action_id = document.get("start").unwrap().children[0].clone();

    let document = editor
        .add_node(&document, &action_id, NodeType::Branch, Some("In stock?"), None)
        .expect("add branch");
    let branch_id = document.get(&action_id).unwrap().children[0].clone();

    let document = editor
        .add_node(&document, &branch_id, NodeType::End, Some("Ship"), Some(0))
        .expect("add yes path");
    let end_yes_id = document.get(&branch_id).unwrap().children[0].clone();

    let document = editor
        .add_node(&document, &branch_id, NodeType::End, Some("Reorder"), Some(1))
        .expect("add no path");
    let end_no_id = document.get(&branch_id).unwrap().children[1].clone();

    BranchFixture {
        editor,
        document,
        action_id,
        branch_id,
        end_yes_id,
        end_no_id,
    }
}

/// A start -> action chain, returning the document and the action's id.
#[allow(dead_code)]
pub fn create_chain(editor: &mut Editor) -> (Document, String) {
    let document = editor
        .add_node(&Document::initial(), "start", NodeType::Action, None, None)
        .expect("add action");
    let action_id = document.get("start").unwrap().children[0].clone();
    (document, action_id)
}
