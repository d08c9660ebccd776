//! Bilayer crossing count.
//!
//! Ported from Dagre's `order/cross-count.js`, itself the accumulator-tree counter of Barth,
//! Jünger & Mutzel ("Simple and Efficient Bilayer Cross Counting"), with unit edge weights.

use crate::LayoutGraph;
use crate::graphlib::NodeId;
use rustc_hash::FxHashMap as HashMap;

/// Current levels as a list of node lists.
pub fn layering(g: &LayoutGraph) -> Vec<Vec<NodeId>> {
    g.levels.iter().map(|l| l.nodes().to_vec()).collect()
}

/// Total number of crossings between consecutive layers, counting each parallel edge.
pub fn cross_count(g: &LayoutGraph, layering: &[Vec<NodeId>]) -> usize {
    let mut cc: usize = 0;
    for i in 1..layering.len() {
        cc += two_layer_cross_count(g, &layering[i - 1], &layering[i]);
    }
    cc
}

// Edges are sorted by (north, south) position; each insertion counts the already inserted
// entries to its right in the tree.
fn two_layer_cross_count(g: &LayoutGraph, north: &[NodeId], south: &[NodeId]) -> usize {
    if south.is_empty() {
        return 0;
    }

    let mut south_pos: HashMap<NodeId, usize> = HashMap::default();
    for (i, &v) in south.iter().enumerate() {
        south_pos.insert(v, i);
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = g
            .effective_out_edges(v)
            .filter_map(|(_, w)| south_pos.get(&w).copied())
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}
