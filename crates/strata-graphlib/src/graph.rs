//! Arena-backed directed multigraph.
//!
//! Nodes and edges are stored in slot vectors and addressed by index-based ids. Removing an item
//! leaves an empty slot behind, so ids stay stable for the lifetime of the graph. Iteration always
//! follows creation order, which keeps every traversal built on top of this container
//! reproducible.

mod entries;
mod ids;
mod options;

pub mod alg;

use crate::error::{Error, Result};
use entries::{EdgeEntry, NodeEntry, insert_sorted, remove_id};

pub use ids::{EdgeId, GraphDir, NodeId};
pub use options::{GRAPH_MAX_EDGE_NUM, GRAPH_MAX_NODE_NUM, GraphOptions};

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    options: GraphOptions,
    nodes: Vec<Option<NodeEntry<N>>>,
    edges: Vec<Option<EdgeEntry<E>>>,
    node_num: usize,
    // Live edges, attached or not. Capacity is checked against this.
    edge_num: usize,
    attached_num: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N, E> Graph<N, E> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_num: 0,
            edge_num: 0,
            attached_num: 0,
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    fn node_entry(&self, n: NodeId) -> &NodeEntry<N> {
        match self.nodes.get(n.index()).and_then(Option::as_ref) {
            Some(entry) => entry,
            None => panic!("node {n} is not part of this graph"),
        }
    }

    fn node_entry_mut(&mut self, n: NodeId) -> &mut NodeEntry<N> {
        match self.nodes.get_mut(n.index()).and_then(Option::as_mut) {
            Some(entry) => entry,
            None => panic!("node {n} is not part of this graph"),
        }
    }

    fn edge_entry(&self, e: EdgeId) -> &EdgeEntry<E> {
        match self.edges.get(e.index()).and_then(Option::as_ref) {
            Some(entry) => entry,
            None => panic!("edge {e} is not part of this graph"),
        }
    }

    pub fn add_node(&mut self, label: N) -> Result<NodeId> {
        if self.node_num >= self.options.max_nodes || self.nodes.len() >= GRAPH_MAX_NODE_NUM {
            return Err(Error::OutOfCapacity {
                what: "node",
                limit: self.options.max_nodes.min(GRAPH_MAX_NODE_NUM),
            });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(NodeEntry {
            label,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }));
        self.node_num += 1;
        Ok(id)
    }

    /// Creates an edge `pred -> succ`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a live node of this graph.
    pub fn add_edge(&mut self, pred: NodeId, succ: NodeId, label: E) -> Result<EdgeId> {
        // Endpoint validation comes first: a dangling endpoint is a caller bug, not a capacity
        // condition.
        self.node_entry(pred);
        self.node_entry(succ);

        if self.edge_num >= self.options.max_edges || self.edges.len() >= GRAPH_MAX_EDGE_NUM {
            return Err(Error::OutOfCapacity {
                what: "edge",
                limit: self.options.max_edges.min(GRAPH_MAX_EDGE_NUM),
            });
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(EdgeEntry {
            pred,
            succ,
            attached: true,
            label,
        }));
        self.node_entry_mut(pred).out_edges.push(id);
        self.node_entry_mut(succ).in_edges.push(id);
        self.edge_num += 1;
        self.attached_num += 1;
        Ok(id)
    }

    pub fn remove_edge(&mut self, e: EdgeId) -> Option<E> {
        let entry = self.edges.get_mut(e.index())?.take()?;
        if entry.attached {
            remove_id(&mut self.node_entry_mut(entry.pred).out_edges, e);
            remove_id(&mut self.node_entry_mut(entry.succ).in_edges, e);
            self.attached_num -= 1;
        }
        self.edge_num -= 1;
        Some(entry.label)
    }

    /// Removes a node together with every edge incident to it, detached edges included.
    pub fn remove_node(&mut self, n: NodeId) -> Option<N> {
        if !self.contains_node(n) {
            return None;
        }
        let incident: Vec<EdgeId> = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                let entry = slot.as_ref()?;
                (entry.pred == n || entry.succ == n).then_some(EdgeId(i as u32))
            })
            .collect();
        for e in incident {
            self.remove_edge(e);
        }
        let entry = self.nodes.get_mut(n.index())?.take()?;
        self.node_num -= 1;
        Some(entry.label)
    }

    /// Takes an edge out of the topology. The id, endpoints and payload stay valid.
    pub fn detach_edge(&mut self, e: EdgeId) {
        let (pred, succ) = {
            let entry = self.edge_entry(e);
            if !entry.attached {
                return;
            }
            (entry.pred, entry.succ)
        };
        remove_id(&mut self.node_entry_mut(pred).out_edges, e);
        remove_id(&mut self.node_entry_mut(succ).in_edges, e);
        if let Some(Some(entry)) = self.edges.get_mut(e.index()) {
            entry.attached = false;
        }
        self.attached_num -= 1;
    }

    /// Puts a detached edge back at its creation position in the adjacency lists.
    pub fn attach_edge(&mut self, e: EdgeId) {
        let (pred, succ) = {
            let entry = self.edge_entry(e);
            if entry.attached {
                return;
            }
            (entry.pred, entry.succ)
        };
        insert_sorted(&mut self.node_entry_mut(pred).out_edges, e);
        insert_sorted(&mut self.node_entry_mut(succ).in_edges, e);
        if let Some(Some(entry)) = self.edges.get_mut(e.index()) {
            entry.attached = true;
        }
        self.attached_num += 1;
    }

    pub fn is_attached(&self, e: EdgeId) -> bool {
        self.edge_entry(e).attached
    }

    /// Drops every node and edge. Ids handed out before stay unused.
    pub fn clear(&mut self) {
        for slot in &mut self.nodes {
            *slot = None;
        }
        for slot in &mut self.edges {
            *slot = None;
        }
        self.node_num = 0;
        self.edge_num = 0;
        self.attached_num = 0;
    }

    pub fn contains_node(&self, n: NodeId) -> bool {
        matches!(self.nodes.get(n.index()), Some(Some(_)))
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        matches!(self.edges.get(e.index()), Some(Some(_)))
    }

    pub fn node(&self, n: NodeId) -> Option<&N> {
        self.nodes.get(n.index())?.as_ref().map(|entry| &entry.label)
    }

    pub fn node_mut(&mut self, n: NodeId) -> Option<&mut N> {
        self.nodes
            .get_mut(n.index())?
            .as_mut()
            .map(|entry| &mut entry.label)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&E> {
        self.edges.get(e.index())?.as_ref().map(|entry| &entry.label)
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Option<&mut E> {
        self.edges
            .get_mut(e.index())?
            .as_mut()
            .map(|entry| &mut entry.label)
    }

    pub fn node_count(&self) -> usize {
        self.node_num
    }

    /// Number of attached edges.
    pub fn edge_count(&self) -> usize {
        self.attached_num
    }

    /// Upper bound (exclusive) of node indices handed out so far.
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId(i as u32))
    }

    /// Attached edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|entry| entry.attached))
            .map(|(i, _)| EdgeId(i as u32))
    }

    pub fn first_node(&self) -> Option<NodeId> {
        self.next_live_node(0)
    }

    pub fn next_node(&self, n: NodeId) -> Option<NodeId> {
        self.next_live_node(n.index() + 1)
    }

    fn next_live_node(&self, from: usize) -> Option<NodeId> {
        (from..self.nodes.len())
            .find(|&i| self.nodes[i].is_some())
            .map(|i| NodeId(i as u32))
    }

    pub fn first_edge(&self) -> Option<EdgeId> {
        self.next_attached_edge(0)
    }

    pub fn next_edge(&self, e: EdgeId) -> Option<EdgeId> {
        self.next_attached_edge(e.index() + 1)
    }

    fn next_attached_edge(&self, from: usize) -> Option<EdgeId> {
        (from..self.edges.len())
            .find(|&i| self.edges[i].as_ref().is_some_and(|entry| entry.attached))
            .map(|i| EdgeId(i as u32))
    }

    pub fn pred(&self, e: EdgeId) -> NodeId {
        self.edge_entry(e).pred
    }

    pub fn succ(&self, e: EdgeId) -> NodeId {
        self.edge_entry(e).succ
    }

    pub fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        let entry = self.edge_entry(e);
        (entry.pred, entry.succ)
    }

    pub fn out_edges(&self, n: NodeId) -> &[EdgeId] {
        &self.node_entry(n).out_edges
    }

    pub fn in_edges(&self, n: NodeId) -> &[EdgeId] {
        &self.node_entry(n).in_edges
    }

    pub fn successors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(n).iter().map(move |&e| self.succ(e))
    }

    pub fn predecessors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.in_edges(n).iter().map(move |&e| self.pred(e))
    }

    pub fn sources(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|&n| self.node_entry(n).in_edges.is_empty())
            .collect()
    }

    pub fn sinks(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|&n| self.node_entry(n).out_edges.is_empty())
            .collect()
    }
}
