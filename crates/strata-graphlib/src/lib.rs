#![forbid(unsafe_code)]

//! Graph container APIs used by `strata`.
//!
//! Nodes and edges live in arenas owned by [`Graph`] and are addressed by [`NodeId`] /
//! [`EdgeId`]. Per-node algorithm state is kept outside the graph in [`Numeration`] and
//! [`Marker`] values so a pass can be rerun without touching node payloads.

pub mod error;
pub mod graph;
pub mod marker;
pub mod numeration;

pub use error::{Error, Result};
pub use graph::{
    EdgeId, GRAPH_MAX_EDGE_NUM, GRAPH_MAX_NODE_NUM, Graph, GraphDir, GraphOptions, NodeId, alg,
};
pub use marker::Marker;
pub use numeration::Numeration;
