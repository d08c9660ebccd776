//! The layout graph: caller topology plus the state produced by the pipeline stages.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::factory::{DefaultFactory, LayoutFactory};
use crate::graphlib::{EdgeId, Graph, GraphOptions, NodeId, Numeration, alg};
use crate::model::{LayoutEdge, LayoutNode, Level, NodeKind, Rank};

pub struct LayoutGraph {
    pub(crate) graph: Graph<LayoutNode, LayoutEdge>,
    pub(crate) config: LayoutConfig,
    factory: Box<dyn LayoutFactory>,

    pub(crate) levels: Vec<Level>,
    pub(crate) ranking: Numeration<Rank>,
    pub(crate) order: Numeration<usize>,
    pub(crate) max_rank: Rank,

    // Bookkeeping of the last level build, undone before the next run.
    pub(crate) controls: Vec<NodeId>,
    pub(crate) split_edges: Vec<EdgeId>,
}

impl Default for LayoutGraph {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutGraph {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_factory(config, DefaultFactory)
    }

    pub fn with_factory(config: LayoutConfig, factory: impl LayoutFactory + 'static) -> Self {
        Self::with_options(config, GraphOptions::default(), factory)
    }

    pub fn with_options(
        config: LayoutConfig,
        options: GraphOptions,
        factory: impl LayoutFactory + 'static,
    ) -> Self {
        Self {
            graph: Graph::new(options),
            config,
            factory: Box::new(factory),
            levels: Vec::new(),
            ranking: Numeration::new(),
            order: Numeration::new(),
            max_rank: 0,
            controls: Vec::new(),
            split_edges: Vec::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Read-only view of the underlying topology.
    pub fn graph(&self) -> &Graph<LayoutNode, LayoutEdge> {
        &self.graph
    }

    pub fn new_node(&mut self, kind: NodeKind) -> Result<NodeId> {
        let label = self.factory.create_node(kind, &self.config);
        Ok(self.graph.add_node(label)?)
    }

    /// Creates a simple node of the given size.
    pub fn add_node(&mut self, width: f64, height: f64) -> Result<NodeId> {
        let n = self.new_node(NodeKind::Simple)?;
        if let Some(node) = self.graph.node_mut(n) {
            node.width = width;
            node.height = height;
        }
        Ok(n)
    }

    /// # Panics
    ///
    /// Panics if an endpoint is not a node of this graph.
    pub fn new_edge(&mut self, pred: NodeId, succ: NodeId) -> Result<EdgeId> {
        let label = self.factory.create_edge(pred, succ);
        Ok(self.graph.add_edge(pred, succ, label)?)
    }

    pub fn remove_node(&mut self, n: NodeId) -> Option<LayoutNode> {
        self.graph.remove_node(n)
    }

    pub fn remove_edge(&mut self, e: EdgeId) -> Option<LayoutEdge> {
        self.graph.remove_edge(e)
    }

    pub fn node(&self, n: NodeId) -> Option<&LayoutNode> {
        self.graph.node(n)
    }

    pub fn node_mut(&mut self, n: NodeId) -> Option<&mut LayoutNode> {
        self.graph.node_mut(n)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&LayoutEdge> {
        self.graph.edge(e)
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Option<&mut LayoutEdge> {
        self.graph.edge_mut(e)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.graph.edges()
    }

    pub fn kind(&self, n: NodeId) -> NodeKind {
        self.graph.node(n).map(|node| node.kind).unwrap_or_default()
    }

    fn is_back(&self, e: EdgeId) -> bool {
        self.graph.edge(e).is_some_and(|edge| edge.is_back)
    }

    /// Upper endpoint of `e` once back edges are inverted.
    pub fn effective_pred(&self, e: EdgeId) -> NodeId {
        let (pred, succ) = self.graph.endpoints(e);
        if self.is_back(e) { succ } else { pred }
    }

    /// Lower endpoint of `e` once back edges are inverted.
    pub fn effective_succ(&self, e: EdgeId) -> NodeId {
        let (pred, succ) = self.graph.endpoints(e);
        if self.is_back(e) { pred } else { succ }
    }

    /// Edges leaving `n` in the acyclic view, with their lower endpoint. Self-loops are skipped.
    pub fn effective_out_edges(&self, n: NodeId) -> impl Iterator<Item = (EdgeId, NodeId)> + '_ {
        let g = &self.graph;
        let forward = g
            .out_edges(n)
            .iter()
            .filter(move |&&e| !self.is_back(e))
            .map(move |&e| (e, g.succ(e)));
        let inverted = g
            .in_edges(n)
            .iter()
            .filter(move |&&e| self.is_back(e))
            .map(move |&e| (e, g.pred(e)));
        forward.chain(inverted).filter(move |&(_, w)| w != n)
    }

    /// Edges entering `n` in the acyclic view, with their upper endpoint. Self-loops are skipped.
    pub fn effective_in_edges(&self, n: NodeId) -> impl Iterator<Item = (EdgeId, NodeId)> + '_ {
        let g = &self.graph;
        let forward = g
            .in_edges(n)
            .iter()
            .filter(move |&&e| !self.is_back(e))
            .map(move |&e| (e, g.pred(e)));
        let inverted = g
            .out_edges(n)
            .iter()
            .filter(move |&&e| self.is_back(e))
            .map(move |&e| (e, g.succ(e)));
        forward.chain(inverted).filter(move |&(_, u)| u != n)
    }

    pub fn rank(&self, n: NodeId) -> Option<Rank> {
        self.ranking.get(n)
    }

    pub fn order(&self, n: NodeId) -> Option<usize> {
        self.order.get(n)
    }

    /// Rank of every node, valid after ranking ran.
    pub fn ranks(&self) -> &Numeration<Rank> {
        &self.ranking
    }

    /// Position of every node within its level, valid after ordering ran.
    pub fn orders(&self) -> &Numeration<usize> {
        &self.order
    }

    pub fn max_rank(&self) -> Rank {
        self.max_rank
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, rank: Rank) -> Option<&Level> {
        self.levels.get(rank as usize)
    }

    /// Control nodes inserted by the last level build.
    pub fn control_nodes(&self) -> &[NodeId] {
        &self.controls
    }

    /// Caller edges that were replaced by a chain of segments in the last level build.
    pub fn split_edges(&self) -> &[EdgeId] {
        &self.split_edges
    }

    /// Graphviz dump of the current topology, annotated with rank/order where known.
    pub fn to_dot(&self) -> String {
        alg::to_dot(
            &self.graph,
            |n, node| {
                let shape = match node.kind {
                    NodeKind::Simple => "box",
                    NodeKind::Control => "point",
                };
                match (self.rank(n), self.order(n)) {
                    (Some(r), Some(o)) => format!("shape={shape}, label=\"{n} r{r} o{o}\""),
                    (Some(r), None) => format!("shape={shape}, label=\"{n} r{r}\""),
                    _ => format!("shape={shape}"),
                }
            },
            |_, edge| {
                if edge.is_back {
                    "style=dashed".to_string()
                } else {
                    String::new()
                }
            },
        )
    }
}
