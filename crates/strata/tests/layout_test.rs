use strata::graphlib::{self, EdgeId, GraphOptions, NodeId};
use strata::{
    DefaultFactory, Error, LayoutConfig, LayoutEdge, LayoutFactory, LayoutGraph, LayoutNode,
    NodeKind, NodePlacement,
};

fn build(n: usize, edges: &[(usize, usize)]) -> (LayoutGraph, Vec<NodeId>, Vec<EdgeId>) {
    let mut g = LayoutGraph::new(LayoutConfig::default());
    let nodes: Vec<NodeId> = (0..n).map(|_| g.add_node(40.0, 20.0).unwrap()).collect();
    let edges: Vec<EdgeId> = edges
        .iter()
        .map(|&(u, v)| g.new_edge(nodes[u], nodes[v]).unwrap())
        .collect();
    (g, nodes, edges)
}

fn caller_placements(g: &LayoutGraph) -> Vec<NodePlacement> {
    g.result()
        .nodes
        .into_iter()
        .filter(|p| p.kind == NodeKind::Simple)
        .collect()
}

#[test]
fn layout_single_node() {
    let (mut g, n, _) = build(1, &[]);
    g.do_layout().unwrap();
    assert_eq!(g.rank(n[0]), Some(0));
    assert_eq!(g.order(n[0]), Some(0));
    assert_eq!(g.max_rank(), 0);
    assert_eq!(g.node(n[0]).unwrap().x, Some(0.0));
    assert_eq!(g.node(n[0]).unwrap().y, Some(0.0));
}

#[test]
fn layout_empty_graph() {
    let mut g = LayoutGraph::default();
    g.do_layout().unwrap();
    assert_eq!(g.max_rank(), 0);
    assert_eq!(g.levels().len(), 1);
    assert!(g.level(0).unwrap().is_empty());
}

#[test]
fn layout_chain() {
    let (mut g, n, _) = build(3, &[(0, 1), (1, 2)]);
    g.do_layout().unwrap();
    let ranks: Vec<_> = n.iter().map(|&v| g.rank(v)).collect();
    assert_eq!(ranks, vec![Some(0), Some(1), Some(2)]);
    assert!(g.control_nodes().is_empty());
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn layout_skip_edge_gets_one_control() {
    let (mut g, _, e) = build(3, &[(0, 1), (1, 2), (0, 2)]);
    g.do_layout().unwrap();
    assert_eq!(g.control_nodes().len(), 1);
    assert_eq!(g.rank(g.control_nodes()[0]), Some(1));
    assert_eq!(g.edge(e[2]).unwrap().controls, g.control_nodes());
    assert_eq!(g.route(e[2]).unwrap().points.len(), 1);
}

#[test]
fn layout_two_cycle_has_one_back_edge() {
    let (mut g, n, e) = build(2, &[(0, 1), (1, 0)]);
    g.do_layout().unwrap();
    let back: Vec<EdgeId> = g.edges().filter(|&x| g.edge(x).unwrap().is_back).collect();
    assert_eq!(back, vec![e[1]]);
    assert_eq!(g.rank(n[0]), Some(0));
    assert_eq!(g.rank(n[1]), Some(1));
    assert!(g.to_dot().contains("style=dashed"));
}

#[test]
fn layout_self_loop_is_ignored() {
    let (mut g, n, e) = build(2, &[(0, 0), (0, 1)]);
    g.do_layout().unwrap();
    assert_eq!(g.rank(n[1]), Some(1));
    let route = g.route(e[0]).unwrap();
    assert!(route.is_back);
    assert!(route.points.is_empty());
}

#[test]
fn layout_routes_long_back_edges_bottom_up() {
    let (mut g, n, e) = build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    g.do_layout().unwrap();

    let route = g.route(e[3]).unwrap();
    assert_eq!((route.pred, route.succ), (n[3].index(), n[0].index()));
    assert!(route.is_back);
    assert_eq!(route.points.len(), 2);
    assert!(route.points[0].y > route.points[1].y);
}

#[test]
fn layout_segments_have_no_route() {
    let (mut g, _, e) = build(3, &[(0, 1), (1, 2), (0, 2)]);
    g.do_layout().unwrap();
    for x in g.edges().collect::<Vec<_>>() {
        assert_eq!(g.route(x).is_none(), g.edge(x).unwrap().is_segment());
    }
    let routed: Vec<usize> = g.result().edges.iter().map(|r| r.id).collect();
    assert_eq!(routed, e.iter().map(|x| x.index()).collect::<Vec<_>>());
}

#[test]
fn layout_every_edge_spans_one_level() {
    let (mut g, _, _) = build(
        7,
        &[(0, 1), (1, 2), (2, 3), (3, 1), (0, 3), (4, 5), (5, 6), (6, 4), (0, 6), (2, 2)],
    );
    g.do_layout().unwrap();
    for x in g.edges().collect::<Vec<_>>() {
        let upper = g.effective_pred(x);
        let lower = g.effective_succ(x);
        if upper != lower {
            assert_eq!(g.rank(lower).unwrap(), g.rank(upper).unwrap() + 1);
        }
    }
    for level in g.levels() {
        for (i, &v) in level.nodes().iter().enumerate() {
            assert_eq!(g.order(v), Some(i));
            assert_eq!(g.rank(v), Some(level.rank()));
        }
    }
}

#[test]
fn layout_reset_restores_the_caller_graph() {
    let (mut g, n, e) = build(3, &[(0, 1), (1, 2), (0, 2)]);
    g.do_layout().unwrap();
    g.reset();

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!(g.graph().is_attached(e[2]));
    assert!(g.edge(e[2]).unwrap().controls.is_empty());
    assert!(g.control_nodes().is_empty());
    assert!(g.levels().is_empty());
    assert_eq!(g.rank(n[0]), None);
    assert_eq!(g.node(n[0]).unwrap().x, None);
    assert_eq!(g.graph().out_edges(n[0]), &[e[0], e[2]]);
}

#[test]
fn layout_twice_gives_the_same_result() {
    let (mut g, _, _) = build(
        6,
        &[(0, 2), (0, 3), (1, 2), (2, 4), (3, 5), (0, 5), (5, 0), (1, 4)],
    );
    g.do_layout().unwrap();
    let first_nodes = caller_placements(&g);
    let first_edges = g.result().edges;
    let controls = g.control_nodes().len();

    g.do_layout().unwrap();
    assert_eq!(caller_placements(&g), first_nodes);
    assert_eq!(g.result().edges, first_edges);
    assert_eq!(g.control_nodes().len(), controls);
}

#[test]
fn layout_keeps_caller_control_nodes() {
    let (mut g, n, _) = build(1, &[]);
    let c = g.new_node(NodeKind::Control).unwrap();
    g.new_edge(n[0], c).unwrap();
    g.do_layout().unwrap();
    g.do_layout().unwrap();

    assert!(g.graph().contains_node(c));
    assert_eq!(g.rank(c), Some(1));
    assert_eq!(g.node(c).unwrap().width, 10.0);
}

struct TinyControls;

impl LayoutFactory for TinyControls {
    fn create_node(&self, kind: NodeKind, _config: &LayoutConfig) -> LayoutNode {
        match kind {
            NodeKind::Simple => LayoutNode::new(kind, 0.0, 0.0),
            NodeKind::Control => LayoutNode::new(kind, 2.0, 4.0),
        }
    }

    fn create_edge(&self, _pred: NodeId, _succ: NodeId) -> LayoutEdge {
        LayoutEdge {
            fixed: false,
            ..LayoutEdge::default()
        }
    }
}

#[test]
fn layout_uses_the_factory_for_controls() {
    let mut g = LayoutGraph::with_factory(LayoutConfig::default(), TinyControls);
    let a = g.add_node(40.0, 20.0).unwrap();
    let b = g.add_node(40.0, 20.0).unwrap();
    let c = g.add_node(40.0, 20.0).unwrap();
    g.new_edge(a, b).unwrap();
    g.new_edge(b, c).unwrap();
    let skip = g.new_edge(a, c).unwrap();
    g.do_layout().unwrap();

    let control = g.node(g.control_nodes()[0]).unwrap();
    assert_eq!((control.width, control.height), (2.0, 4.0));
    for x in g.edges().collect::<Vec<_>>() {
        assert!(!g.edge(x).unwrap().fixed);
    }
    assert!(!g.route(skip).unwrap().fixed);
}

#[test]
fn layout_rolls_back_when_out_of_capacity() {
    let options = GraphOptions {
        max_nodes: 3,
        ..GraphOptions::default()
    };
    let mut g = LayoutGraph::with_options(LayoutConfig::default(), options, DefaultFactory);
    let a = g.add_node(40.0, 20.0).unwrap();
    let b = g.add_node(40.0, 20.0).unwrap();
    let c = g.add_node(40.0, 20.0).unwrap();
    g.new_edge(a, b).unwrap();
    g.new_edge(b, c).unwrap();
    let skip = g.new_edge(a, c).unwrap();

    let err = g.do_layout().unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(graphlib::Error::OutOfCapacity {
            what: "node",
            limit: 3
        })
    ));

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!(g.graph().is_attached(skip));
    assert!(g.control_nodes().is_empty());
    assert!(g.levels().is_empty());
    assert_eq!(g.rank(a), None);
    assert_eq!(g.node(a).unwrap().x, None);
}

#[test]
fn layout_rejects_an_invalid_config() {
    let config = LayoutConfig {
        node_control_margin: 30.0,
        ..LayoutConfig::default()
    };
    let mut g = LayoutGraph::new(config);
    g.add_node(40.0, 20.0).unwrap();
    let err = g.do_layout().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidConfig {
            field: "nodeControlMargin",
            ..
        }
    ));
}

#[test]
#[should_panic]
fn layout_new_edge_panics_on_a_removed_node() {
    let (mut g, n, _) = build(2, &[]);
    g.remove_node(n[1]);
    let _ = g.new_edge(n[0], n[1]);
}

#[test]
fn layout_result_serializes_to_camel_case_json() {
    let (mut g, _, _) = build(3, &[(0, 1), (1, 2), (0, 2)]);
    g.do_layout().unwrap();
    let json = g.result().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["maxRank"], 2);
    assert_eq!(value["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(value["nodes"][3]["kind"], "control");
    assert_eq!(value["edges"].as_array().unwrap().len(), 3);
    assert_eq!(value["edges"][2]["isBack"], false);
    assert_eq!(value["edges"][2]["points"].as_array().unwrap().len(), 1);
}

#[test]
fn layout_to_dot_shows_ranks_and_controls() {
    let (mut g, _, _) = build(3, &[(0, 1), (1, 2), (0, 2)]);
    g.do_layout().unwrap();
    let dot = g.to_dot();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("shape=point"));
    assert!(dot.contains("label=\"n0 r0 o0\""));
}
