//! Horizontal placement.
//!
//! Levels are stacked top to bottom; each level is as tall as its tallest node and levels are
//! `rank_spacing` apart. Inside a level nodes are laid out left to right in order; the cursor
//! advances by the previous node's width or the margin for the pair of node kinds, whichever is
//! larger. Nodes wider than the margin therefore sit flush against their right neighbour.

use crate::LayoutGraph;
use crate::graphlib::NodeId;
use crate::model::NodeKind;

/// Assigns `x`/`y` (top-left corner) to every node of every level.
pub fn arrange_horizontally(g: &mut LayoutGraph) {
    let config = g.config.clone();
    let mut y = config.margin_y;

    for rank in 0..g.levels.len() {
        let nodes: Vec<NodeId> = g.levels[rank].nodes().to_vec();
        let level_height = nodes
            .iter()
            .filter_map(|&n| g.graph.node(n))
            .fold(0.0_f64, |h, node| h.max(node.height));

        let mut x = config.margin_x;
        let mut prev: Option<(NodeKind, f64)> = None;
        for n in nodes {
            let Some(node) = g.graph.node_mut(n) else {
                continue;
            };
            if let Some((prev_kind, prev_width)) = prev {
                x += prev_width.max(config.spacing(prev_kind, node.kind));
            }
            node.x = Some(x);
            node.y = Some(y);
            prev = Some((node.kind, node.width));
        }

        y += level_height + config.rank_spacing;
    }
    tracing::debug!(levels = g.levels.len(), "arranged levels");
}
