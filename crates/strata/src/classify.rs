//! Edge classification: find back edges so the remaining graph is acyclic for ranking.
//!
//! Depth-first search from every source (then from any node still unvisited, which covers
//! components that are one big cycle), in node creation order. An edge whose successor is still
//! on the DFS stack closes a cycle and is marked `is_back`. Self-loops are marked as well; the
//! later stages ignore them.

use crate::LayoutGraph;
use crate::graphlib::{EdgeId, Marker, NodeId};

/// Marks back edges and returns how many were found.
pub fn classify_edges(g: &mut LayoutGraph) -> usize {
    let edges: Vec<EdgeId> = g.graph.edges().collect();
    for &e in &edges {
        if let Some(edge) = g.graph.edge_mut(e) {
            edge.is_back = false;
        }
    }

    let back = find_back_edges(g);
    for &e in &back {
        if let Some(edge) = g.graph.edge_mut(e) {
            edge.is_back = true;
        }
    }
    tracing::debug!(edges = edges.len(), back_edges = back.len(), "classified edges");
    back.len()
}

fn find_back_edges(g: &LayoutGraph) -> Vec<EdgeId> {
    let graph = &g.graph;
    let mut visited = Marker::new();
    let mut on_stack = Marker::new();
    let mut back: Vec<EdgeId> = Vec::new();

    // Explicit stack of (node, index of the next out-edge to look at).
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    let roots = graph.sources().into_iter().chain(graph.nodes());
    for root in roots {
        if !visited.mark(root) {
            continue;
        }
        on_stack.mark(root);
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let Some(&e) = graph.out_edges(v).get(next) else {
                on_stack.unmark(v);
                stack.pop();
                continue;
            };
            top.1 += 1;

            let w = graph.succ(e);
            if on_stack.is_marked(w) {
                back.push(e);
            } else if visited.mark(w) {
                on_stack.mark(w);
                stack.push((w, 0));
            }
        }
    }

    back.sort();
    back
}
