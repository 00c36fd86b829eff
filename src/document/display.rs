use super::model::Document;
use super::node::{NodeType, branch_path_label};
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;

/// Formats a document as an indented tree for debug logging.
///
/// Reachable nodes print in traversal order with type, label and id; branch
/// paths carry their positional labels. Anything unreachable from the root
/// is listed afterwards so the orphans show up in the same dump.
pub struct DisplayDocument<'a> {
    pub document: &'a Document,
}

impl fmt::Display for DisplayDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut visited = HashSet::new();
        self.fmt_node(&self.document.root_id, None, f, "", true, &mut visited)?;

        for (id, node) in self.document.nodes.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            if !visited.contains(id.as_str()) {
                writeln!(
                    f,
                    "(unreachable) [{}] {} ({})",
                    node.node_type, node.label, node.id
                )?;
            }
        }
        Ok(())
    }
}

impl DisplayDocument<'_> {
    fn fmt_node(
        &self,
        node_id: &str,
        edge_label: Option<String>,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<String>,
    ) -> fmt::Result {
        let marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, marker)?;
        if let Some(label) = edge_label {
            write!(f, "{}: ", label)?;
        }

        let Some(node) = self.document.get(node_id) else {
            return writeln!(f, "<missing node {}>", node_id);
        };
        visited.insert(node_id.to_string());
        writeln!(f, "[{}] {} ({})", node.node_type, node.label, node.id)?;

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let labeled = node.node_type == NodeType::Branch && node.children.len() > 1;
        for (index, child_id) in node.children.iter().enumerate() {
            let edge = if labeled {
                Some(branch_path_label(index))
            } else {
                None
            };
            self.fmt_node(
                child_id,
                edge,
                f,
                &child_prefix,
                index + 1 == node.children.len(),
                visited,
            )?;
        }
        Ok(())
    }
}
