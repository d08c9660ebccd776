#![forbid(unsafe_code)]

//! Layered graph layout.
//!
//! `strata` assigns every node of a directed graph a rank (level) and an order within that level,
//! routes edges that span several levels through control nodes, reduces crossings with barycenter
//! sweeps and computes model coordinates. It only needs topology and node sizes; painting and
//! persistence belong to the caller.
//!
//! ```
//! use strata::{LayoutConfig, LayoutGraph};
//!
//! let mut g = LayoutGraph::new(LayoutConfig::default());
//! let a = g.add_node(40.0, 20.0)?;
//! let b = g.add_node(40.0, 20.0)?;
//! g.new_edge(a, b)?;
//! g.do_layout()?;
//! assert_eq!(g.rank(b), Some(1));
//! # Ok::<(), strata::Error>(())
//! ```

pub use strata_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod classify;
pub mod config;
pub mod error;
pub mod factory;
mod graph;
pub mod levels;
pub mod model;
pub mod order;
mod pipeline;
pub mod position;
pub mod rank;
pub mod result;

pub use config::{LayoutConfig, OrderingStrategy};
pub use error::{Error, Result};
pub use factory::{DefaultFactory, LayoutFactory};
pub use graph::LayoutGraph;
pub use graphlib::{EdgeId, GraphDir, NodeId};
pub use model::{LayoutEdge, LayoutNode, Level, NodeKind, Point, Rank};
pub use result::{EdgeRoute, LayoutResult, NodePlacement};
