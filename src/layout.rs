//! Deterministic placement of a document's nodes for rendering.

use crate::document::Document;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Spacing and sizing constants for `calculate_layout_with`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of a node's layout box. Reserved for renderers; the position
    /// math does not consume it.
    pub node_width: f64,
    /// Height of a node's layout box. Contributes to canvas height only.
    pub node_height: f64,
    /// Horizontal pitch between columns within a level.
    pub horizontal_spacing: f64,
    /// Vertical pitch between levels.
    pub vertical_spacing: f64,
    /// Floor on canvas width, so small trees still get a full-width canvas.
    pub min_canvas_width: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            node_height: 100.0,
            horizontal_spacing: 300.0,
            vertical_spacing: 150.0,
            min_canvas_width: 800.0,
            top_margin: 50.0,
            bottom_margin: 100.0,
        }
    }
}

/// A single node's placement on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Derived placement for a whole document. Ephemeral: recomputed from
/// scratch after every edit, never persisted and never part of history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub positions: AHashMap<String, Position>,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn position(&self, node_id: &str) -> Option<Position> {
        self.positions.get(node_id).copied()
    }
}

/// Computes a layout with the default configuration.
pub fn calculate_layout(document: &Document) -> Layout {
    calculate_layout_with(document, &LayoutConfig::default())
}

/// Assigns every reachable node a level and a centered position within it.
///
/// Levels are populated by depth-first traversal from the root, so siblings
/// keep their child order and a node always sits one level below its parent.
/// Spacing is uniform and centering is level-local, so nodes within a level
/// never overlap. Nodes unreachable from the root receive no position;
/// reporting them is the validator's job, not this one's.
pub fn calculate_layout_with(document: &Document, config: &LayoutConfig) -> Layout {
    let mut levels: Vec<Vec<String>> = Vec::new();
    assign_levels(document, &document.root_id, 0, &mut levels);

    let widest = levels
        .iter()
        .map(|level| level.len())
        .max()
        .unwrap_or(0)
        .max(1);
    let width = (widest as f64 * config.horizontal_spacing).max(config.min_canvas_width);
    let center_x = width / 2.0;

    let mut positions = AHashMap::new();
    for (level, ids) in levels.iter().enumerate() {
        let y = level as f64 * config.vertical_spacing + config.top_margin;
        let level_width = ids.len() as f64 * config.horizontal_spacing;
        let start_x = center_x - level_width / 2.0 + config.horizontal_spacing / 2.0;

        for (column, id) in ids.iter().enumerate() {
            positions.insert(
                id.clone(),
                Position {
                    x: start_x + column as f64 * config.horizontal_spacing,
                    y,
                },
            );
        }
    }

    let max_level = levels.len().saturating_sub(1);
    Layout {
        positions,
        width,
        height: max_level as f64 * config.vertical_spacing
            + config.node_height
            + config.bottom_margin,
    }
}

fn assign_levels(
    document: &Document,
    node_id: &str,
    level: usize,
    levels: &mut Vec<Vec<String>>,
) {
    if level >= levels.len() {
        levels.push(Vec::new());
    }
    levels[level].push(node_id.to_string());

    if let Some(node) = document.get(node_id) {
        for child_id in &node.children {
            assign_levels(document, child_id, level + 1, levels);
        }
    }
}
