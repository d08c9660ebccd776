use crate::LayoutGraph;
use crate::graphlib::{Marker, NodeId, Numeration};

/// Computes the initial order: DFS from the rank-0 nodes, following the acyclic view downward.
/// Each node takes the next free position of its level when it is first reached.
///
/// # Panics
///
/// Panics if levels have not been built.
pub fn init_order(g: &LayoutGraph) -> Numeration<usize> {
    let mut visited = Marker::new();
    let mut next_free: Vec<usize> = vec![0; g.levels.len()];
    let mut order: Numeration<usize> = Numeration::with_capacity(g.graph.node_bound());
    let mut number = |v: NodeId| {
        let rank = g.ranking[v] as usize;
        order.set(v, next_free[rank]);
        next_free[rank] += 1;
    };

    // Every node below rank 0 hangs off an effective predecessor one level up, so the rank-0
    // roots normally reach everything; the remaining levels are only a fallback.
    for level in &g.levels {
        for &root in level.nodes() {
            if !visited.mark(root) {
                continue;
            }
            number(root);

            // One pending successor iterator per node on the current path.
            let mut stack = vec![g.effective_out_edges(root)];
            while let Some(successors) = stack.last_mut() {
                let Some((_, w)) = successors.next() else {
                    stack.pop();
                    continue;
                };
                if visited.mark(w) {
                    number(w);
                    stack.push(g.effective_out_edges(w));
                }
            }
        }
    }
    order
}

/// Runs [`init_order`] and stores the result, reordering each level to match.
pub fn order_nodes_by_dfs(g: &mut LayoutGraph) {
    let order = init_order(g);
    for level in &mut g.levels {
        let mut nodes = level.nodes().to_vec();
        nodes.sort_by_key(|&n| order[n]);
        level.set_nodes(nodes);
    }
    g.order = order;
    tracing::debug!(levels = g.levels.len(), "assigned initial order");
}
