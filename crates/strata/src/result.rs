//! Layout output handed to a renderer.

use crate::LayoutGraph;
use crate::error::Result;
use crate::graphlib::{EdgeId, NodeId};
use crate::model::{NodeKind, Point, Rank};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePlacement {
    pub id: usize,
    pub kind: NodeKind,
    pub rank: Option<Rank>,
    pub order: Option<usize>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
}

/// A caller edge in its original direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRoute {
    pub id: usize,
    pub pred: usize,
    pub succ: usize,
    pub is_back: bool,
    pub fixed: bool,
    /// Centers of the control nodes from `pred` to `succ`; empty for unsplit edges.
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub max_rank: Rank,
    pub nodes: Vec<NodePlacement>,
    pub edges: Vec<EdgeRoute>,
}

impl LayoutResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl LayoutGraph {
    pub fn placement(&self, n: NodeId) -> Option<NodePlacement> {
        let node = self.graph.node(n)?;
        Some(NodePlacement {
            id: n.index(),
            kind: node.kind,
            rank: self.rank(n),
            order: self.order(n),
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
        })
    }

    /// Route of a caller edge. Segments generated for split edges have no route of their own.
    pub fn route(&self, e: EdgeId) -> Option<EdgeRoute> {
        let edge = self.graph.edge(e)?;
        if edge.is_segment() {
            return None;
        }
        let (pred, succ) = self.graph.endpoints(e);
        let mut points: Vec<Point> = edge
            .controls
            .iter()
            .filter_map(|&c| {
                let node = self.graph.node(c)?;
                Some(Point {
                    x: node.x? + node.width / 2.0,
                    y: node.y? + node.height / 2.0,
                })
            })
            .collect();
        // Controls are stored top-down; a back edge runs bottom-up.
        if edge.is_back {
            points.reverse();
        }
        Some(EdgeRoute {
            id: e.index(),
            pred: pred.index(),
            succ: succ.index(),
            is_back: edge.is_back,
            fixed: edge.fixed,
            points,
        })
    }

    /// Snapshot of the current layout: every node and every caller edge, in creation order.
    pub fn result(&self) -> LayoutResult {
        let nodes = self
            .graph
            .nodes()
            .filter_map(|n| self.placement(n))
            .collect();

        let mut edge_ids: Vec<EdgeId> = self
            .graph
            .edges()
            .chain(self.split_edges.iter().copied())
            .collect();
        edge_ids.sort();
        edge_ids.dedup();
        let edges = edge_ids.into_iter().filter_map(|e| self.route(e)).collect();

        LayoutResult {
            max_rank: self.max_rank,
            nodes,
            edges,
        }
    }
}
