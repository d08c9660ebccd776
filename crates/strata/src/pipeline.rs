//! `do_layout` and the per-stage entry points on [`LayoutGraph`].

use crate::error::Result;
use crate::graphlib::{EdgeId, NodeId};
use crate::model::Rank;
use crate::order::SweepReport;
use crate::{LayoutGraph, classify, levels, order, position, rank};

impl LayoutGraph {
    /// Lays the graph out from scratch: classify edges, rank, build levels, order, arrange.
    ///
    /// On error every trace of the failed run is rolled back, so no partial layout is visible.
    pub fn do_layout(&mut self) -> Result<()> {
        self.config.validate()?;
        self.reset();
        if let Err(err) = self.run_stages() {
            tracing::debug!(%err, "layout failed; rolling back");
            self.reset();
            return Err(err);
        }
        Ok(())
    }

    fn run_stages(&mut self) -> Result<()> {
        let back_edges = self.classify_edges();
        let max_rank = self.rank_nodes();
        let controls = self.init_levels()?;
        self.order_nodes_by_dfs();
        let report = self.reduce_crossings();
        self.arrange_horizontally();
        tracing::debug!(
            nodes = self.graph.node_count(),
            back_edges,
            max_rank,
            controls,
            crossings = report.final_crossings,
            "layout done"
        );
        Ok(())
    }

    /// Undoes everything a previous layout added: control nodes, segments, back-edge flags,
    /// ranks, orders, levels and coordinates. Caller nodes and edges come back as they were.
    pub fn reset(&mut self) {
        for n in std::mem::take(&mut self.controls) {
            self.graph.remove_node(n);
        }
        for e in std::mem::take(&mut self.split_edges) {
            if !self.graph.contains_edge(e) {
                continue;
            }
            self.graph.attach_edge(e);
            if let Some(edge) = self.graph.edge_mut(e) {
                edge.controls.clear();
            }
        }
        let edges: Vec<EdgeId> = self.graph.edges().collect();
        for e in edges {
            if let Some(edge) = self.graph.edge_mut(e) {
                edge.is_back = false;
            }
        }
        let nodes: Vec<NodeId> = self.graph.nodes().collect();
        for n in nodes {
            if let Some(node) = self.graph.node_mut(n) {
                node.x = None;
                node.y = None;
            }
        }
        self.levels.clear();
        self.ranking.clear();
        self.order.clear();
        self.max_rank = 0;
    }

    /// Marks back edges; returns how many were found.
    pub fn classify_edges(&mut self) -> usize {
        classify::classify_edges(self)
    }

    /// Assigns ranks; returns the maximum rank.
    pub fn rank_nodes(&mut self) -> Rank {
        rank::run(self)
    }

    /// Builds levels and splits long edges; returns the number of inserted control nodes.
    pub fn init_levels(&mut self) -> Result<usize> {
        levels::init_levels(self)
    }

    pub fn order_nodes_by_dfs(&mut self) {
        order::order_nodes_by_dfs(self);
    }

    pub fn reduce_crossings(&mut self) -> SweepReport {
        order::reduce_crossings(self)
    }

    pub fn arrange_horizontally(&mut self) {
        position::arrange_horizontally(self);
    }
}
