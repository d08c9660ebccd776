//! Layout node/edge payloads and levels.

use crate::graphlib::{EdgeId, NodeId};
use serde::Serialize;

/// Layer index. Rank 0 is the top level.
pub type Rank = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Stands for one node of the caller's graph.
    #[default]
    Simple,
    /// Routing point of an edge that crosses intermediate levels.
    Control,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub width: f64,
    pub height: f64,
    /// Left edge of the node, set by horizontal placement.
    pub x: Option<f64>,
    /// Top edge of the node, set by horizontal placement.
    pub y: Option<f64>,
}

impl LayoutNode {
    pub fn new(kind: NodeKind, width: f64, height: f64) -> Self {
        Self {
            kind,
            width,
            height,
            x: None,
            y: None,
        }
    }

    pub fn is_simple(&self) -> bool {
        self.kind == NodeKind::Simple
    }

    pub fn is_edge_control(&self) -> bool {
        self.kind == NodeKind::Control
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    /// Routing of this edge must not be altered by later passes.
    pub fixed: bool,
    /// The edge closes a cycle; ranking and ordering treat it as `succ -> pred`.
    pub is_back: bool,
    /// Control nodes of a split edge, top level first.
    pub controls: Vec<NodeId>,
    /// Set on the unit-rank segments generated for a split edge.
    pub segment_of: Option<EdgeId>,
}

impl Default for LayoutEdge {
    fn default() -> Self {
        Self {
            fixed: true,
            is_back: false,
            controls: Vec::new(),
            segment_of: None,
        }
    }
}

impl LayoutEdge {
    pub fn is_inverted(&self) -> bool {
        self.is_back
    }

    pub fn is_segment(&self) -> bool {
        self.segment_of.is_some()
    }
}

/// Nodes sharing one rank, stored left to right once ordering ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    rank: Rank,
    nodes: Vec<NodeId>,
}

impl Level {
    pub fn new(rank: Rank) -> Self {
        Self {
            rank,
            nodes: Vec::new(),
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn add(&mut self, n: NodeId) {
        self.nodes.push(n);
    }

    pub(crate) fn set_nodes(&mut self, nodes: Vec<NodeId>) {
        self.nodes = nodes;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
