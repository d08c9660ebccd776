use strata::graphlib::{GraphDir, NodeId, Numeration};
use strata::order::{arrange_nodes, cross_count, init_order, layering, sweep};
use strata::{LayoutConfig, LayoutGraph, OrderingStrategy};

fn build(config: LayoutConfig, n: usize, edges: &[(usize, usize)]) -> (LayoutGraph, Vec<NodeId>) {
    let mut g = LayoutGraph::new(config);
    let nodes: Vec<NodeId> = (0..n).map(|_| g.add_node(40.0, 20.0).unwrap()).collect();
    for &(u, v) in edges {
        g.new_edge(nodes[u], nodes[v]).unwrap();
    }
    (g, nodes)
}

fn prepare(g: &mut LayoutGraph) {
    g.classify_edges();
    g.rank_nodes();
    g.init_levels().unwrap();
    g.order_nodes_by_dfs();
}

fn assert_orders_are_permutations(g: &LayoutGraph) {
    for level in g.levels() {
        for (i, &n) in level.nodes().iter().enumerate() {
            assert_eq!(g.order(n), Some(i), "node {n} on rank {}", level.rank());
        }
    }
}

// a -> c, a -> d, b -> c: the DFS order puts `c` left of `d`, which makes `b -> c` cross `a -> d`.
const CROSSED: &[(usize, usize)] = &[(0, 2), (0, 3), (1, 2)];

#[test]
fn dfs_order_follows_edge_creation_order() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);
    assert_eq!(g.level(0).unwrap().nodes(), &[n[0], n[1]]);
    assert_eq!(g.level(1).unwrap().nodes(), &[n[2], n[3]]);
    assert_orders_are_permutations(&g);
}

#[test]
fn dfs_order_is_deterministic() {
    let (mut g, _) = build(
        LayoutConfig::default(),
        7,
        &[(0, 3), (1, 3), (0, 4), (2, 5), (3, 6), (5, 6), (1, 6)],
    );
    prepare(&mut g);
    let first: Vec<(NodeId, usize)> = init_order(&g).iter().collect();
    let second: Vec<(NodeId, usize)> = init_order(&g).iter().collect();
    assert_eq!(first, second);
}

#[test]
fn arrange_nodes_sorts_by_barycenter() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    let level = g.level(1).unwrap().nodes().to_vec();
    let arranged = arrange_nodes(&g, g.orders(), &level, GraphDir::Up, false, &mut barycenters);
    assert_eq!(arranged, vec![n[3], n[2]]);
    assert_eq!(barycenters[n[2]], 0.5);
    assert_eq!(barycenters[n[3]], 0.0);
}

#[test]
fn arrange_nodes_only_records_on_the_first_pass() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    let level = g.level(1).unwrap().nodes().to_vec();
    let arranged = arrange_nodes(&g, g.orders(), &level, GraphDir::Up, true, &mut barycenters);
    assert_eq!(arranged, level);
    assert_eq!(barycenters[n[2]], 0.5);
}

#[test]
fn arrange_nodes_keeps_isolated_nodes_in_place() {
    let (mut g, n) = build(LayoutConfig::default(), 3, &[]);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    let level = g.level(0).unwrap().nodes().to_vec();
    let arranged = arrange_nodes(&g, g.orders(), &level, GraphDir::Down, false, &mut barycenters);
    assert_eq!(arranged, vec![n[0], n[1], n[2]]);
    assert_eq!(barycenters[n[2]], 2.0);
}

#[test]
fn arrange_nodes_reuses_recorded_barycenters_for_isolated_nodes() {
    let (mut g, n) = build(LayoutConfig::default(), 3, &[]);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    barycenters.set(n[0], 2.5);
    barycenters.set(n[2], 0.5);
    let level = g.level(0).unwrap().nodes().to_vec();
    let arranged = arrange_nodes(&g, g.orders(), &level, GraphDir::Down, false, &mut barycenters);
    assert_eq!(arranged, vec![n[2], n[1], n[0]]);
    assert_eq!(barycenters[n[1]], 1.0);
}

#[test]
fn seeding_sweep_records_barycenters_only() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    let layers = sweep(&mut g, GraphDir::Down, true, true, &mut barycenters);
    assert_eq!(layers, vec![vec![n[0], n[1]], vec![n[2], n[3]]]);
    assert_eq!(g.level(1).unwrap().nodes(), &[n[2], n[3]]);
    assert_eq!(barycenters[n[2]], 0.5);
    assert_eq!(barycenters[n[3]], 0.0);
}

#[test]
fn sweep_without_commit_leaves_the_graph_alone() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    let layers = sweep(&mut g, GraphDir::Down, false, false, &mut barycenters);
    assert_eq!(layers, vec![vec![n[0], n[1]], vec![n[3], n[2]]]);
    assert_eq!(g.level(1).unwrap().nodes(), &[n[2], n[3]]);
    assert_eq!(g.order(n[2]), Some(0));
}

#[test]
fn sweep_with_commit_stores_the_order() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);

    let mut barycenters = Numeration::new();
    sweep(&mut g, GraphDir::Down, true, false, &mut barycenters);
    assert_eq!(g.level(1).unwrap().nodes(), &[n[3], n[2]]);
    assert_orders_are_permutations(&g);
}

#[test]
fn reduce_crossings_removes_a_crossing() {
    let (mut g, n) = build(LayoutConfig::default(), 4, CROSSED);
    prepare(&mut g);

    let report = g.reduce_crossings();
    assert_eq!(report.initial_crossings, 1);
    assert_eq!(report.final_crossings, 0);
    assert_eq!(report.committed_sweeps, 8);
    assert_eq!(g.level(1).unwrap().nodes(), &[n[3], n[2]]);
    assert_eq!(cross_count(&g, &layering(&g)), 0);
    assert_orders_are_permutations(&g);
}

#[test]
fn reduce_crossings_with_commit_strategy() {
    let config = LayoutConfig {
        ordering_strategy: OrderingStrategy::Commit,
        ..LayoutConfig::default()
    };
    let (mut g, _) = build(config, 4, CROSSED);
    prepare(&mut g);

    let report = g.reduce_crossings();
    assert_eq!(report.final_crossings, 0);
    assert_eq!(report.committed_sweeps, 8);
    assert_orders_are_permutations(&g);
}

#[test]
fn reduce_crossings_without_passes_keeps_the_dfs_order() {
    let config = LayoutConfig {
        ordering_passes: 0,
        ..LayoutConfig::default()
    };
    let (mut g, n) = build(config, 4, CROSSED);
    prepare(&mut g);

    let report = g.reduce_crossings();
    assert_eq!(report.initial_crossings, 1);
    assert_eq!(report.final_crossings, 1);
    assert_eq!(report.committed_sweeps, 0);
    assert_eq!(g.level(1).unwrap().nodes(), &[n[2], n[3]]);
}

#[test]
fn reduce_crossings_never_makes_things_worse() {
    let (mut g, _) = build(
        LayoutConfig::default(),
        10,
        &[
            (0, 5),
            (0, 3),
            (1, 4),
            (1, 2),
            (2, 6),
            (3, 7),
            (4, 6),
            (5, 8),
            (0, 9),
            (2, 8),
            (6, 0),
            (7, 9),
            (1, 7),
        ],
    );
    prepare(&mut g);
    let before = cross_count(&g, &layering(&g));

    let report = g.reduce_crossings();
    assert_eq!(report.initial_crossings, before);
    assert!(report.final_crossings <= report.initial_crossings);
    assert_eq!(report.final_crossings, cross_count(&g, &layering(&g)));
    assert_orders_are_permutations(&g);
}

#[test]
fn dfs_order_handles_a_long_chain() {
    let n = 100_000;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    let (mut g, nodes) = build(LayoutConfig::default(), n, &edges);
    g.do_layout().unwrap();

    assert_eq!(g.max_rank() as usize, n - 1);
    assert_eq!(g.rank(nodes[n - 1]), Some(n as u32 - 1));
    assert!(nodes.iter().all(|&v| g.order(v) == Some(0)));
}

#[test]
fn dfs_order_handles_a_long_control_chain() {
    // The skip edge spans the whole chain and gets one control per intermediate rank.
    let n = 50_000;
    let mut edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    edges.push((0, n - 1));
    let (mut g, _) = build(LayoutConfig::default(), n, &edges);
    prepare(&mut g);

    assert_eq!(g.control_nodes().len(), n - 2);
    assert_orders_are_permutations(&g);
    for &c in g.control_nodes() {
        assert_eq!(g.order(c), Some(1));
    }
}
