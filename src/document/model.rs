use super::node::{Node, NodeType};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A complete workflow document: the node table plus the root id.
///
/// Documents are only ever created by `Document::initial` or by an editor
/// operation; nothing mutates one in place. `Clone` deep-copies the node
/// table and every children list, which is what makes history snapshots and
/// externally observed documents independent of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: AHashMap<String, Node>,
    #[serde(rename = "rootId")]
    pub root_id: String,
}

impl Document {
    /// The initial document: a single start node (id `start`) and nothing
    /// else. The start node is the permanent root and can never be deleted.
    pub fn initial() -> Self {
        let root = Node::new("start", NodeType::Start, "Start");
        let mut nodes = AHashMap::new();
        nodes.insert(root.id.clone(), root);
        Self {
            nodes,
            root_id: "start".to_string(),
        }
    }

    pub fn get(&self, node_id: &str) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Number of nodes in the table, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of all nodes whose children list references `node_id`, sorted for
    /// deterministic processing.
    ///
    /// In a well-formed tree this is at most one node, but the scan
    /// tolerates multiple referrers and reports each of them.
    pub fn parent_ids(&self, node_id: &str) -> Vec<String> {
        let mut parents: Vec<String> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.children.iter().any(|child_id| child_id == node_id))
            .map(|(id, _)| id.clone())
            .collect();
        parents.sort();
        parents
    }

    /// Every id reachable from `node_id` by child-following, in pre-order,
    /// not including `node_id` itself. Child ids missing from the table are
    /// still listed; the walk just stops below them.
    pub fn descendant_ids(&self, node_id: &str) -> Vec<String> {
        let mut descendants = Vec::new();
        self.collect_descendants(node_id, &mut descendants);
        descendants
    }

    fn collect_descendants(&self, node_id: &str, out: &mut Vec<String>) {
        if let Some(node) = self.nodes.get(node_id) {
            for child_id in &node.children {
                out.push(child_id.clone());
                self.collect_descendants(child_id, out);
            }
        }
    }
}
