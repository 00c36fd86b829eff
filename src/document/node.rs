use serde::{Deserialize, Serialize};
use std::fmt;

/// The four structural roles a workflow node can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Action,
    Branch,
    End,
}

impl NodeType {
    /// Label assigned to a freshly created node when the caller provides none.
    pub fn default_label(&self) -> &'static str {
        match self {
            NodeType::Start => "Start",
            NodeType::Action => "Action",
            NodeType::Branch => "Branch",
            NodeType::End => "End",
        }
    }

    /// Accent color renderers use for this node type.
    pub fn color(&self) -> &'static str {
        match self {
            NodeType::Start => "#4CAF50",
            NodeType::Action => "#2196F3",
            NodeType::Branch => "#FF9800",
            NodeType::End => "#F44336",
        }
    }

    /// Whether this node type accepts children at all. Only end nodes refuse
    /// them outright; everything else is governed by the count policy below.
    pub fn accepts_children(&self) -> bool {
        !matches!(self, NodeType::End)
    }

    /// Advisory children-count policy: start takes 0 or 1, action exactly 1,
    /// branch at least 2, end none. The editor never blocks on this; the
    /// validator reports violations.
    pub fn child_count_ok(&self, count: usize) -> bool {
        match self {
            NodeType::Start => count <= 1,
            NodeType::Action => count == 1,
            NodeType::Branch => count >= 2,
            NodeType::End => count == 0,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Start => "start",
            NodeType::Action => "action",
            NodeType::Branch => "branch",
            NodeType::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// A single typed, labeled unit in the workflow tree.
///
/// Children are an ordered list of node ids; for branch nodes the order
/// encodes path order. A node never stores a parent pointer, parents are
/// derived by scanning (`Document::parent_ids`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub children: Vec<String>,
}

impl Node {
    /// A node with no children yet.
    pub fn new(id: impl Into<String>, node_type: NodeType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type,
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// Positional label for a branch child: the first path reads "Yes", the
/// second "No", later ones "Path N".
pub fn branch_path_label(index: usize) -> String {
    match index {
        0 => "Yes".to_string(),
        1 => "No".to_string(),
        n => format!("Path {}", n + 1),
    }
}
