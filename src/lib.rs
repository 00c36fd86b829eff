//! # Kigumi - Workflow Document Engine
//!
//! **Kigumi** is the document engine behind a visual editor for tree-shaped
//! workflows: users compose start, action, branch and end nodes into a
//! directed tree, edit labels inline, and undo or redo structural edits.
//! The crate owns the data model, the structural edit operations, the
//! deterministic tree layout and the bounded linear history. Rendering,
//! menus and event wiring stay in the host application, which calls into
//! the engine and reads its layout output.
//!
//! ## Core Workflow
//!
//! The engine is driven one edit intent at a time:
//!
//! 1.  **Start a session**: [`Session::new`](session::Session::new) creates
//!     the initial document (a single start node) with history seeded.
//! 2.  **Edit**: add, delete or relabel nodes. Each operation validates its
//!     input, produces a wholly new immutable document and commits it to
//!     history; rejected edits leave the session untouched.
//! 3.  **Lay out**: [`layout::calculate_layout`] recomputes 2D positions and
//!     canvas bounds from the current document for the renderer.
//! 4.  **Undo/redo**: the session steps through its bounded linear history,
//!     handing out independent snapshots.
//!
//! The pieces compose freely as well: [`editor::Editor`],
//! [`history::History`] and [`layout`] have no knowledge of each other, so a
//! host with its own state management can use them directly.
//!
//! ## Quick Start
//!
//! ```rust
//! use kigumi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new();
//!
//!     // Grow the tree: start -> action -> branch with two end paths.
//!     session.add_node("start", NodeType::Action, Some("Check inventory"), None)?;
//!     let action_id = session.document().get("start").unwrap().children[0].clone();
//!     session.add_node(&action_id, NodeType::Branch, Some("In stock?"), None)?;
//!     let branch_id = session.document().get(&action_id).unwrap().children[0].clone();
//!     session.add_node(&branch_id, NodeType::End, Some("Ship"), Some(0))?;
//!     session.add_node(&branch_id, NodeType::End, Some("Reorder"), Some(1))?;
//!
//!     // Positions for the renderer.
//!     let layout = session.layout();
//!     println!("canvas: {} x {}", layout.width, layout.height);
//!
//!     // Structural diagnostics, accumulated in one pass.
//!     let report = session.validate();
//!     assert!(report.valid);
//!
//!     // Undo is a full snapshot step.
//!     session.undo();
//!     assert_eq!(session.document().len(), 4);
//!
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod layout;
pub mod prelude;
pub mod session;
