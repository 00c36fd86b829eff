use super::model::Document;
use super::node::NodeType;
use itertools::Itertools;
use std::collections::HashSet;

/// Accumulated findings from a full-document structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks every structural invariant over the whole document and returns all
/// findings in one pass. Nothing is raised individually; an edit that leaves
/// a node out of the children-count policy is reported here, not blocked
/// there. Diagnostics are ordered by node id so output is deterministic.
pub fn validate(document: &Document) -> ValidationReport {
    let mut errors = Vec::new();

    let Some(root) = document.nodes.get(&document.root_id) else {
        errors.push("Root node does not exist".to_string());
        return ValidationReport {
            valid: false,
            errors,
        };
    };

    if root.node_type != NodeType::Start {
        errors.push("Root node must be a start node".to_string());
    }

    for (id, node) in document.nodes.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        if node.node_type == NodeType::Start && *id != document.root_id {
            errors.push(format!("Node {} is a start node but not the root", id));
        }

        if !node.node_type.child_count_ok(node.children.len()) {
            errors.push(format!(
                "Node {} ({}) has invalid number of children: {}",
                id,
                node.node_type,
                node.children.len()
            ));
        }

        for child_id in &node.children {
            if !document.contains(child_id) {
                errors.push(format!(
                    "Node {} references non-existent child: {}",
                    id, child_id
                ));
            }
        }
    }

    let mut reachable = HashSet::new();
    mark_reachable(document, &document.root_id, &mut reachable);
    for id in document.nodes.keys().sorted() {
        if !reachable.contains(id.as_str()) {
            errors.push(format!("Node {} is orphaned (not reachable from root)", id));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

fn mark_reachable(document: &Document, node_id: &str, reachable: &mut HashSet<String>) {
    if !reachable.insert(node_id.to_string()) {
        return;
    }
    if let Some(node) = document.get(node_id) {
        for child_id in &node.children {
            mark_reachable(document, child_id, reachable);
        }
    }
}
