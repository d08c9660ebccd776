use crate::NodeId;

/// Resettable visited flags keyed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct Marker {
    marks: Vec<bool>,
}

impl Marker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `n`; returns `true` if it was not marked before.
    pub fn mark(&mut self, n: NodeId) -> bool {
        let idx = n.index();
        if idx >= self.marks.len() {
            self.marks.resize(idx + 1, false);
        }
        !std::mem::replace(&mut self.marks[idx], true)
    }

    pub fn unmark(&mut self, n: NodeId) {
        if let Some(m) = self.marks.get_mut(n.index()) {
            *m = false;
        }
    }

    pub fn is_marked(&self, n: NodeId) -> bool {
        self.marks.get(n.index()).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}
