//! Level building: one level per rank and unit-rank edges only.
//!
//! An edge whose (effective) endpoints are more than one rank apart is detached from the topology
//! and replaced with a chain of control nodes, one per intermediate rank. The chain segments keep
//! the original edge's stored direction, `is_back` and `fixed` flags, so the acyclic view of the
//! chain runs top-down while a renderer can still recover the original direction.

use crate::LayoutGraph;
use crate::error::Result;
use crate::graphlib::{EdgeId, NodeId};
use crate::model::{Level, NodeKind, Rank};

/// Builds the levels and normalizes long edges. Returns the number of inserted control nodes.
///
/// # Panics
///
/// Panics if ranking has not run.
pub fn init_levels(g: &mut LayoutGraph) -> Result<usize> {
    let max_rank = g.max_rank;
    g.levels = (0..=max_rank).map(Level::new).collect();

    let nodes: Vec<NodeId> = g.graph.nodes().collect();
    for n in nodes {
        let rank = g.ranking[n];
        g.levels[rank as usize].add(n);
    }

    let edges: Vec<EdgeId> = g.graph.edges().collect();
    let mut inserted: usize = 0;
    for e in edges {
        inserted += split_edge(g, e)?;
    }

    tracing::debug!(
        levels = g.levels.len(),
        control_nodes = inserted,
        split_edges = g.split_edges.len(),
        "built levels"
    );
    Ok(inserted)
}

fn split_edge(g: &mut LayoutGraph, e: EdgeId) -> Result<usize> {
    let upper = g.effective_pred(e);
    let lower = g.effective_succ(e);
    if upper == lower {
        return Ok(0);
    }
    let upper_rank: Rank = g.ranking[upper];
    let lower_rank: Rank = g.ranking[lower];
    debug_assert!(lower_rank > upper_rank, "edge {e} points upward in the acyclic view");
    if lower_rank <= upper_rank + 1 {
        return Ok(0);
    }

    let (fixed, is_back) = match g.graph.edge(e) {
        Some(edge) => (edge.fixed, edge.is_back),
        None => return Ok(0),
    };

    g.graph.detach_edge(e);
    g.split_edges.push(e);

    let mut controls: Vec<NodeId> = Vec::with_capacity((lower_rank - upper_rank - 1) as usize);
    for rank in upper_rank + 1..lower_rank {
        let c = g.new_node(NodeKind::Control)?;
        g.ranking.set(c, rank);
        g.levels[rank as usize].add(c);
        g.controls.push(c);
        controls.push(c);
    }

    let chain: Vec<NodeId> = std::iter::once(upper)
        .chain(controls.iter().copied())
        .chain(std::iter::once(lower))
        .collect();
    for pair in chain.windows(2) {
        let (top, bottom) = (pair[0], pair[1]);
        let segment = if is_back {
            g.new_edge(bottom, top)?
        } else {
            g.new_edge(top, bottom)?
        };
        if let Some(label) = g.graph.edge_mut(segment) {
            label.fixed = fixed;
            label.is_back = is_back;
            label.segment_of = Some(e);
        }
    }

    let count = controls.len();
    if let Some(label) = g.graph.edge_mut(e) {
        label.controls = controls;
    }
    Ok(count)
}
