//! Node/edge creation strategy.
//!
//! Every node and edge a [`LayoutGraph`](crate::LayoutGraph) creates, including the control
//! nodes and segments inserted by level building, goes through its factory. A layout variant
//! that needs different defaults (control point sizes, edge flags) supplies its own
//! implementation instead of branching inside the pipeline.

use crate::config::LayoutConfig;
use crate::graphlib::NodeId;
use crate::model::{LayoutEdge, LayoutNode, NodeKind};

pub trait LayoutFactory: Send + Sync {
    fn create_node(&self, kind: NodeKind, config: &LayoutConfig) -> LayoutNode {
        match kind {
            NodeKind::Simple => LayoutNode::new(kind, 0.0, 0.0),
            NodeKind::Control => LayoutNode::new(kind, config.control_width, config.control_height),
        }
    }

    fn create_edge(&self, _pred: NodeId, _succ: NodeId) -> LayoutEdge {
        LayoutEdge::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl LayoutFactory for DefaultFactory {}
