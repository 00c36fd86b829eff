//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the kigumi crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use kigumi::prelude::*;
//!
//! let mut session = Session::new();
//! session
//!     .add_node("start", NodeType::Action, Some("Check inventory"), None)
//!     .unwrap();
//!
//! let layout = session.layout();
//! assert_eq!(layout.positions.len(), session.document().len());
//! ```

// Document model
pub use crate::document::{
    DisplayDocument, Document, Node, NodeType, ValidationReport, branch_path_label, validate,
};

// Structural editing
pub use crate::editor::{Editor, NodeIdGenerator};

// Layout
pub use crate::layout::{Layout, LayoutConfig, Position, calculate_layout, calculate_layout_with};

// History and the session facade
pub use crate::history::{History, MAX_HISTORY};
pub use crate::session::Session;

// Error types
pub use crate::error::EditError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EditError>;
