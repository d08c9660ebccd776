//! Node ordering / crossing reduction.
//!
//! A deterministic DFS gives every level an initial left-to-right order, then a fixed number of
//! barycenter sweeps, alternating downward and upward, try to reduce edge crossings between
//! adjacent levels.

mod barycenter;
pub use barycenter::arrange_nodes;

mod cross_count;
pub use cross_count::{cross_count, layering};

mod init_order;
pub use init_order::{init_order, order_nodes_by_dfs};

mod sweep;
pub use sweep::{SweepReport, reduce_crossings, sweep};
