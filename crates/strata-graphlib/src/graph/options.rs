//! Graph configuration options.

/// Maximum number of nodes a graph can hold.
pub const GRAPH_MAX_NODE_NUM: usize = u32::MAX as usize;
/// Maximum number of edges a graph can hold.
pub const GRAPH_MAX_EDGE_NUM: usize = u32::MAX as usize;

#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    pub max_nodes: usize,
    pub max_edges: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            max_nodes: GRAPH_MAX_NODE_NUM,
            max_edges: GRAPH_MAX_EDGE_NUM,
        }
    }
}
