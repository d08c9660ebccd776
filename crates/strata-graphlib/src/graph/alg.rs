//! Traversal helpers and debug output.

use super::{EdgeId, Graph, NodeId};
use crate::Marker;
use std::collections::VecDeque;
use std::fmt::Write as _;

/// Nodes reachable from `roots` in depth-first preorder, successors in insertion order.
pub fn preorder<N, E>(g: &Graph<N, E>, roots: &[NodeId]) -> Vec<NodeId> {
    let mut visited = Marker::new();
    let mut out: Vec<NodeId> = Vec::new();
    for &r in roots {
        if !visited.mark(r) {
            continue;
        }
        out.push(r);
        let mut stack = vec![g.successors(r)];
        while let Some(successors) = stack.last_mut() {
            let Some(w) = successors.next() else {
                stack.pop();
                continue;
            };
            if visited.mark(w) {
                out.push(w);
                stack.push(g.successors(w));
            }
        }
    }
    out
}

pub fn postorder<N, E>(g: &Graph<N, E>, roots: &[NodeId]) -> Vec<NodeId> {
    let mut visited = Marker::new();
    let mut out: Vec<NodeId> = Vec::new();
    for &r in roots {
        if !visited.mark(r) {
            continue;
        }
        let mut stack = vec![(r, g.successors(r))];
        while let Some((v, successors)) = stack.last_mut() {
            match successors.next() {
                Some(w) => {
                    if visited.mark(w) {
                        stack.push((w, g.successors(w)));
                    }
                }
                None => {
                    out.push(*v);
                    stack.pop();
                }
            }
        }
    }
    out
}

/// Weakly connected components, each listed in discovery order starting from the oldest node.
pub fn components<N, E>(g: &Graph<N, E>) -> Vec<Vec<NodeId>> {
    let mut seen = Marker::new();
    let mut out: Vec<Vec<NodeId>> = Vec::new();

    for start in g.nodes() {
        if !seen.mark(start) {
            continue;
        }
        let mut comp: Vec<NodeId> = Vec::new();
        let mut q: VecDeque<NodeId> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            comp.push(v);
            for n in g.successors(v).chain(g.predecessors(v)) {
                if seen.mark(n) {
                    q.push_back(n);
                }
            }
        }
        out.push(comp);
    }

    out
}

/// Renders the graph as a Graphviz `digraph`. The callbacks return the attribute list body
/// (without brackets); an empty string omits the list.
pub fn to_dot<N, E, FN, FE>(g: &Graph<N, E>, mut node_attrs: FN, mut edge_attrs: FE) -> String
where
    FN: FnMut(NodeId, &N) -> String,
    FE: FnMut(EdgeId, &E) -> String,
{
    let mut out = String::from("digraph {\n");
    for n in g.nodes() {
        let Some(label) = g.node(n) else {
            continue;
        };
        let attrs = node_attrs(n, label);
        if attrs.is_empty() {
            let _ = writeln!(out, "  {n};");
        } else {
            let _ = writeln!(out, "  {n} [{attrs}];");
        }
    }
    for e in g.edges() {
        let Some(label) = g.edge(e) else {
            continue;
        };
        let (pred, succ) = g.endpoints(e);
        let attrs = edge_attrs(e, label);
        if attrs.is_empty() {
            let _ = writeln!(out, "  {pred} -> {succ};");
        } else {
            let _ = writeln!(out, "  {pred} -> {succ} [{attrs}];");
        }
    }
    out.push('}');
    out
}
