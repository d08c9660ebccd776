//! Internal storage entries for [`Graph`](super::Graph).

use super::{EdgeId, NodeId};

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeEntry<N> {
    pub(in crate::graph) label: N,
    pub(in crate::graph) out_edges: Vec<EdgeId>,
    pub(in crate::graph) in_edges: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) pred: NodeId,
    pub(in crate::graph) succ: NodeId,
    pub(in crate::graph) attached: bool,
    pub(in crate::graph) label: E,
}

/// Inserts `e` keeping the list sorted by id, so re-attached edges return to their creation slot.
pub(in crate::graph) fn insert_sorted(list: &mut Vec<EdgeId>, e: EdgeId) {
    if let Err(pos) = list.binary_search(&e) {
        list.insert(pos, e);
    }
}

pub(in crate::graph) fn remove_id(list: &mut Vec<EdgeId>, e: EdgeId) {
    if let Ok(pos) = list.binary_search(&e) {
        list.remove(pos);
    }
}
