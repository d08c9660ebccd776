//! Barycenter arrangement of a single level.

use crate::LayoutGraph;
use crate::graphlib::{GraphDir, NodeId, Numeration};

/// Computes the barycenter of every node in `nodes` against the adjacent level on side `dir`
/// (`Up`: effective predecessors, `Down`: effective successors) and returns the level stably
/// sorted by it.
///
/// A node without neighbours on that side keeps the barycenter recorded by an earlier pass (the
/// seeding pass included), or its current position if it has none yet. On the first pass the
/// barycenters are only recorded and the current arrangement is returned as is.
pub fn arrange_nodes(
    g: &LayoutGraph,
    orders: &Numeration<usize>,
    nodes: &[NodeId],
    dir: GraphDir,
    first_pass: bool,
    barycenters: &mut Numeration<f64>,
) -> Vec<NodeId> {
    for (pos, &v) in nodes.iter().enumerate() {
        let mut sum: f64 = 0.0;
        let mut count: usize = 0;
        let mut add = |u: NodeId| {
            if let Some(o) = orders.get(u) {
                sum += o as f64;
                count += 1;
            }
        };
        match dir {
            GraphDir::Up => g.effective_in_edges(v).for_each(|(_, u)| add(u)),
            GraphDir::Down => g.effective_out_edges(v).for_each(|(_, w)| add(w)),
        }
        let bc = if count == 0 {
            barycenters
                .get(v)
                .unwrap_or_else(|| orders.get(v).unwrap_or(pos) as f64)
        } else {
            sum / count as f64
        };
        barycenters.set(v, bc);
    }

    let mut arranged = nodes.to_vec();
    if first_pass {
        return arranged;
    }
    // `sort_by` is stable: equal barycenters keep their previous relative order.
    arranged.sort_by(|&a, &b| barycenters[a].total_cmp(&barycenters[b]));
    arranged
}
