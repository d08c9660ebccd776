//! Layout configuration.
//!
//! All lengths are in model units. The three margins encode the clearance between two
//! order-adjacent nodes of a level depending on their kinds; routing points need less room than
//! full node bodies, so the margins must not increase from node/node to control/control.

use crate::error::{Error, Result};
use crate::model::NodeKind;
use serde::{Deserialize, Serialize};

pub const NODE_NODE_MARGIN: f64 = 20.0;
pub const NODE_CONTROL_MARGIN: f64 = 10.0;
pub const CONTROL_CONTROL_MARGIN: f64 = 5.0;
pub const RANK_SPACING: f64 = 40.0;
pub const EDGE_CONTROL_WIDTH: f64 = 10.0;
pub const EDGE_CONTROL_HEIGHT: f64 = 10.0;
pub const ORDERING_PASSES: usize = 8;

/// How refinement sweeps of the orderer treat their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingStrategy {
    /// Evaluate every sweep first and keep it only if the total crossing count does not grow.
    #[default]
    KeepBest,
    /// Write every sweep back unconditionally.
    Commit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub node_node_margin: f64,
    pub node_control_margin: f64,
    pub control_control_margin: f64,
    pub rank_spacing: f64,
    pub control_width: f64,
    pub control_height: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub ordering_passes: usize,
    pub ordering_strategy: OrderingStrategy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_node_margin: NODE_NODE_MARGIN,
            node_control_margin: NODE_CONTROL_MARGIN,
            control_control_margin: CONTROL_CONTROL_MARGIN,
            rank_spacing: RANK_SPACING,
            control_width: EDGE_CONTROL_WIDTH,
            control_height: EDGE_CONTROL_HEIGHT,
            margin_x: 0.0,
            margin_y: 0.0,
            ordering_passes: ORDERING_PASSES,
            ordering_strategy: OrderingStrategy::KeepBest,
        }
    }
}

impl LayoutConfig {
    /// Parses a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("nodeNodeMargin", self.node_node_margin),
            ("nodeControlMargin", self.node_control_margin),
            ("controlControlMargin", self.control_control_margin),
            ("rankSpacing", self.rank_spacing),
            ("controlWidth", self.control_width),
            ("controlHeight", self.control_height),
            ("marginX", self.margin_x),
            ("marginY", self.margin_y),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig {
                    field,
                    reason: format!("expected a finite non-negative length, got {value}"),
                });
            }
        }
        if self.node_control_margin > self.node_node_margin {
            return Err(Error::InvalidConfig {
                field: "nodeControlMargin",
                reason: "must not exceed nodeNodeMargin".to_string(),
            });
        }
        if self.control_control_margin > self.node_control_margin {
            return Err(Error::InvalidConfig {
                field: "controlControlMargin",
                reason: "must not exceed nodeControlMargin".to_string(),
            });
        }
        Ok(())
    }

    /// Minimum clearance between two order-adjacent nodes.
    pub fn spacing(&self, prev: NodeKind, curr: NodeKind) -> f64 {
        match (prev, curr) {
            (NodeKind::Simple, NodeKind::Simple) => self.node_node_margin,
            (NodeKind::Simple, NodeKind::Control) | (NodeKind::Control, NodeKind::Simple) => {
                self.node_control_margin
            }
            (NodeKind::Control, NodeKind::Control) => self.control_control_margin,
        }
    }
}
