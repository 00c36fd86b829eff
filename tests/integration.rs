//! End-to-end tests driving the engine the way a presentation layer would.
use kigumi::prelude::*;

#[test]
fn test_build_edit_and_delete_workflow() {
    let mut session = Session::new();
    assert_eq!(session.document().len(), 1);

    // start -> action
    session
        .add_node("start", NodeType::Action, Some("Check"), None)
        .expect("add action");
    assert_eq!(session.document().len(), 2);
    let action_id = session.document().get("start").unwrap().children[0].clone();
    assert_eq!(
        session.document().get("start").unwrap().children,
        vec![action_id.clone()]
    );

    // action -> branch
    session
        .add_node(&action_id, NodeType::Branch, None, None)
        .expect("add branch");
    let branch_id = session.document().get(&action_id).unwrap().children[0].clone();

    // Two end paths, both inserted at the front in turn.
    session
        .add_node(&branch_id, NodeType::End, None, Some(0))
        .expect("add first path");
    session
        .add_node(&branch_id, NodeType::End, None, Some(0))
        .expect("add second path");
    let branch = session.document().get(&branch_id).unwrap();
    assert_eq!(branch.children.len(), 2);
    for child_id in &branch.children {
        assert_eq!(
            session.document().get(child_id).unwrap().node_type,
            NodeType::End
        );
    }
    assert!(session.validate().valid);

    // Deleting the action takes its whole subtree with it; the branch is
    // not reconnected under start.
    session.delete_node(&action_id).expect("delete action");
    assert_eq!(session.document().len(), 1);
    assert!(session.document().get("start").unwrap().children.is_empty());
    assert!(!session.document().contains(&branch_id));
}

#[test]
fn test_session_undo_redo_flags() {
    let mut session = Session::new();
    assert!(!session.can_undo());
    assert!(!session.can_redo());

    session
        .add_node("start", NodeType::Action, None, None)
        .expect("add action");
    assert!(session.can_undo());
    assert!(!session.can_redo());

    assert!(session.undo());
    assert_eq!(session.document().len(), 1);
    assert!(!session.can_undo());
    assert!(session.can_redo());

    assert!(session.redo());
    assert_eq!(session.document().len(), 2);
    assert!(!session.can_redo());
    assert!(!session.redo());
}

#[test]
fn test_rejected_edits_leave_session_untouched() {
    let mut session = Session::new();
    session
        .add_node("start", NodeType::End, None, None)
        .expect("add end");
    let end_id = session.document().get("start").unwrap().children[0].clone();
    let before = session.document().clone();

    assert!(session.add_node(&end_id, NodeType::Action, None, None).is_err());
    assert!(session.add_node("nope", NodeType::Action, None, None).is_err());
    assert!(session.delete_node("start").is_err());

    assert_eq!(session.document(), &before);
    // None of the rejections produced a history entry.
    assert!(session.undo());
    assert!(!session.undo());
}

#[test]
fn test_noop_edits_record_no_history() {
    let mut session = Session::new();
    session.delete_node("node_999").expect("absent delete is quiet");
    session
        .relabel_node("node_999", "Ghost")
        .expect("absent relabel is quiet");

    assert!(!session.can_undo());

    // A whitespace relabel of an existing node does commit an entry, even
    // though the label is unchanged.
    session.relabel_node("start", "   ").expect("relabel start");
    assert!(session.can_undo());
    assert_eq!(session.document().get("start").unwrap().label, "Start");
}

#[test]
fn test_relabel_then_undo_restores_label() {
    let mut session = Session::new();
    session
        .relabel_node("start", "Kickoff")
        .expect("relabel start");
    assert_eq!(session.document().get("start").unwrap().label, "Kickoff");

    assert!(session.undo());
    assert_eq!(session.document().get("start").unwrap().label, "Start");
}

#[test]
fn test_layout_follows_session_edits() {
    let mut session = Session::new();
    session
        .add_node("start", NodeType::Branch, None, None)
        .expect("add branch");
    let branch_id = session.document().get("start").unwrap().children[0].clone();
    session
        .add_node(&branch_id, NodeType::End, None, None)
        .expect("add path");
    session
        .add_node(&branch_id, NodeType::End, None, None)
        .expect("add path");

    let layout = session.layout();
    assert_eq!(layout.positions.len(), session.document().len());

    session.undo();
    let layout = session.layout();
    assert_eq!(layout.positions.len(), 3);
}

#[test]
fn test_document_json_round_trips() {
    let mut session = Session::new();
    session
        .add_node("start", NodeType::Action, Some("Check"), None)
        .expect("add action");

    let json = session.document_json().expect("serialize document");
    let parsed: Document = serde_json::from_str(&json).expect("parse document");
    assert_eq!(&parsed, session.document());

    // The serialized shape is the plain keyed node table plus the root id.
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse value");
    assert_eq!(value["rootId"], "start");
    assert_eq!(value["nodes"]["start"]["type"], "start");
    assert_eq!(value["nodes"]["start"]["children"][0], "node_1");
    assert_eq!(value["nodes"]["node_1"]["label"], "Check");
}
