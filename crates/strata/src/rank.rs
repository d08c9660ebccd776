//! Longest-path ranking over the acyclic view of the graph.
//!
//! Nodes are visited in a topological order (Kahn, seeded in creation order) and each node gets
//! `max(rank(p) + 1)` over its effective predecessors, or 0 for a source. Ranks are not tightened
//! afterwards: long edges are spread over more levels instead of compacting the drawing.

use crate::LayoutGraph;
use crate::graphlib::{NodeId, Numeration};
use crate::model::Rank;
use std::collections::VecDeque;

/// Computes ranks without touching the graph.
pub fn rank_nodes(g: &LayoutGraph) -> Numeration<Rank> {
    let mut ranking: Numeration<Rank> = Numeration::with_capacity(g.graph.node_bound());
    let mut indegree: Numeration<usize> = Numeration::with_capacity(g.graph.node_bound());

    for n in g.graph.nodes() {
        indegree.set(n, g.effective_in_edges(n).count());
    }

    let mut queue: VecDeque<NodeId> = g
        .graph
        .nodes()
        .filter(|&n| indegree[n] == 0)
        .collect();
    for &n in &queue {
        ranking.set(n, 0);
    }

    let mut processed: usize = 0;
    while let Some(v) = queue.pop_front() {
        processed += 1;
        let next = ranking[v] + 1;
        for (_, w) in g.effective_out_edges(v) {
            if ranking.get(w).is_none_or(|r| r < next) {
                ranking.set(w, next);
            }
            let left = indegree[w] - 1;
            indegree.set(w, left);
            if left == 0 {
                queue.push_back(w);
            }
        }
    }

    // Classification leaves no cycle behind, so every node is reached.
    debug_assert_eq!(processed, g.graph.node_count(), "ranking met a cycle");
    if processed != g.graph.node_count() {
        tracing::warn!(
            processed,
            nodes = g.graph.node_count(),
            "ranking left nodes unreached; placing them on rank 0"
        );
        for n in g.graph.nodes() {
            if !ranking.is_numbered(n) {
                ranking.set(n, 0);
            }
        }
    }

    ranking
}

/// Ranks every node, stores the ranking on the graph and returns the maximum rank.
pub fn run(g: &mut LayoutGraph) -> Rank {
    let ranking = rank_nodes(g);
    let max_rank = ranking.iter().map(|(_, r)| r).max().unwrap_or(0);
    g.ranking = ranking;
    g.max_rank = max_rank;
    tracing::debug!(max_rank, nodes = g.graph.node_count(), "ranked nodes");
    max_rank
}
