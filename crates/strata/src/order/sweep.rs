use super::{arrange_nodes, cross_count, layering};
use crate::LayoutGraph;
use crate::config::OrderingStrategy;
use crate::graphlib::{GraphDir, NodeId, Numeration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Crossings of the initial (DFS) order.
    pub initial_crossings: usize,
    /// Crossings of the order left on the graph.
    pub final_crossings: usize,
    /// Sweeps whose result was written back.
    pub committed_sweeps: usize,
}

/// Runs one sweep in direction `dir` (`Down`: rank 0 towards the bottom, anchored on level 0;
/// `Up`: the bottom level towards rank 0, anchored on the last level).
///
/// Each level is arranged against its neighbour already handled in this sweep. With
/// `commit_placement` the new order is stored on the graph; otherwise the graph is left untouched
/// and the resulting layering is only returned for evaluation.
pub fn sweep(
    g: &mut LayoutGraph,
    dir: GraphDir,
    commit_placement: bool,
    first_pass: bool,
    barycenters: &mut Numeration<f64>,
) -> Vec<Vec<NodeId>> {
    let mut orders = g.order.clone();
    let mut layers = layering(g);
    let count = layers.len();
    if count < 2 {
        return layers;
    }

    let ranks: Vec<usize> = match dir {
        GraphDir::Down => (1..count).collect(),
        GraphDir::Up => (0..count - 1).rev().collect(),
    };
    // Going down, the fixed neighbour level is above.
    let side = dir.reverse();

    for r in ranks {
        let arranged = arrange_nodes(g, &orders, &layers[r], side, first_pass, barycenters);
        for (i, &v) in arranged.iter().enumerate() {
            orders.set(v, i);
        }
        tracing::trace!(rank = r, nodes = arranged.len(), ?dir, "arranged level");
        layers[r] = arranged;
    }

    if commit_placement && !first_pass {
        apply_layering(g, &layers);
    }
    layers
}

fn apply_layering(g: &mut LayoutGraph, layers: &[Vec<NodeId>]) {
    for (level, nodes) in g.levels.iter_mut().zip(layers) {
        for (i, &v) in nodes.iter().enumerate() {
            g.order.set(v, i);
        }
        level.set_nodes(nodes.clone());
    }
}

/// Refines the current order with `ordering_passes` alternating sweeps, starting downward.
///
/// The first (seeding) sweep only records barycenters. Under
/// [`OrderingStrategy::KeepBest`] each sweep is evaluated and committed only when it does not
/// raise the total crossing count; under [`OrderingStrategy::Commit`] every sweep is written
/// back.
pub fn reduce_crossings(g: &mut LayoutGraph) -> SweepReport {
    let passes = g.config.ordering_passes;
    let strategy = g.config.ordering_strategy;
    let mut barycenters: Numeration<f64> = Numeration::with_capacity(g.graph.node_bound());

    sweep(g, GraphDir::Down, false, true, &mut barycenters);

    let initial = cross_count(g, &layering(g));
    let mut report = SweepReport {
        initial_crossings: initial,
        final_crossings: initial,
        committed_sweeps: 0,
    };

    for pass in 0..passes {
        let dir = if pass % 2 == 0 {
            GraphDir::Down
        } else {
            GraphDir::Up
        };
        match strategy {
            OrderingStrategy::Commit => {
                let layers = sweep(g, dir, true, false, &mut barycenters);
                report.final_crossings = cross_count(g, &layers);
                report.committed_sweeps += 1;
            }
            OrderingStrategy::KeepBest => {
                let layers = sweep(g, dir, false, false, &mut barycenters);
                let cc = cross_count(g, &layers);
                if cc <= report.final_crossings {
                    apply_layering(g, &layers);
                    report.final_crossings = cc;
                    report.committed_sweeps += 1;
                }
            }
        }
        tracing::debug!(pass, ?dir, crossings = report.final_crossings, "crossing reduction sweep");
    }

    report
}
