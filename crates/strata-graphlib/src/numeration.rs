//! Resettable per-node integer (or any `Copy`) maps.
//!
//! A numeration is allocated once, cleared before each recomputation and indexed by
//! [`NodeId`]. It never owns nodes, so it can outlive removals: a slot of a removed node is
//! simply never read again.

use crate::NodeId;
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct Numeration<T> {
    values: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for Numeration<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            len: 0,
        }
    }
}

impl<T: Copy> Numeration<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            values: Vec::with_capacity(nodes),
            len: 0,
        }
    }

    pub fn get(&self, n: NodeId) -> Option<T> {
        self.values.get(n.index()).copied().flatten()
    }

    pub fn set(&mut self, n: NodeId, value: T) {
        let idx = n.index();
        if idx >= self.values.len() {
            self.values.resize(idx + 1, None);
        }
        if self.values[idx].replace(value).is_none() {
            self.len += 1;
        }
    }

    pub fn unset(&mut self, n: NodeId) -> Option<T> {
        let old = self.values.get_mut(n.index())?.take();
        if old.is_some() {
            self.len -= 1;
        }
        old
    }

    pub fn is_numbered(&self, n: NodeId) -> bool {
        self.get(n).is_some()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.len = 0;
    }

    /// Number of numbered nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (NodeId(i as u32), v)))
    }
}

impl<T: Copy> Index<NodeId> for Numeration<T> {
    type Output = T;

    fn index(&self, n: NodeId) -> &T {
        match self.values.get(n.index()).and_then(Option::as_ref) {
            Some(v) => v,
            None => panic!("node {n} has not been numbered"),
        }
    }
}
