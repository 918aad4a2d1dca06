//! Shared graph builders for the unit tests.

use crate::graph::{
    AdjacencyListUndirectedGraph, AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphLabel,
    GraphNode,
};

// Helper function to create a directed graph from labels and (from, to, weight) triples
pub fn directed<L: GraphLabel>(
    labels: &[L],
    edges: &[(L, L, f64)],
) -> AdjacencyMatrixDirectedGraph<L> {
    let mut graph = AdjacencyMatrixDirectedGraph::with_capacity(labels.len());
    for label in labels {
        graph.add_node(GraphNode::new(label.clone()));
    }
    for (from, to, weight) in edges {
        graph
            .add_edge(GraphEdge::new(from.clone(), to.clone(), true, *weight))
            .unwrap();
    }
    graph
}

// Helper function to create an undirected graph from labels and (a, b, weight) triples
pub fn undirected<L: GraphLabel>(
    labels: &[L],
    edges: &[(L, L, f64)],
) -> AdjacencyListUndirectedGraph<L> {
    let mut graph = AdjacencyListUndirectedGraph::with_capacity(labels.len());
    for label in labels {
        graph.add_node(GraphNode::new(label.clone()));
    }
    for (a, b, weight) in edges {
        graph
            .add_edge(GraphEdge::new(a.clone(), b.clone(), false, *weight))
            .unwrap();
    }
    graph
}

/// The five-node reference graph; `u_to_x` is the weight of the edge u -> x.
pub fn scenario_graph(u_to_x: f64) -> AdjacencyMatrixDirectedGraph<&'static str> {
    directed(
        &["s", "u", "x", "y", "v"],
        &[
            ("s", "u", 10.1),
            ("s", "x", 5.12),
            ("u", "x", u_to_x),
            ("x", "u", 3.04),
            ("x", "y", 2.0),
            ("y", "s", 7.03),
            ("u", "v", 1.0),
            ("x", "v", 9.05),
            ("y", "v", 6.0),
            ("v", "y", 4.07),
        ],
    )
}

/// 1 -> 2 -> 4 and 1 -> 3 -> 4, the lower branch being cheaper.
pub fn diamond_graph() -> AdjacencyMatrixDirectedGraph<i32> {
    directed(
        &[1, 2, 3, 4],
        &[(1, 2, 10.0), (1, 3, 5.0), (2, 4, 5.0), (3, 4, 5.0)],
    )
}

/// 1 -> 2 -> 3 -> 1 with a total weight of -1.
pub fn negative_cycle_graph() -> AdjacencyMatrixDirectedGraph<i32> {
    directed(&[1, 2, 3], &[(1, 2, 10.0), (2, 3, -5.0), (3, 1, -6.0)])
}

/// The nine-node spanning-tree reference graph.
pub fn kruskal_graph() -> AdjacencyListUndirectedGraph<&'static str> {
    undirected(
        &["a", "b", "c", "d", "e", "f", "g", "h", "i"],
        &[
            ("a", "b", 4.0),
            ("a", "h", 8.5),
            ("b", "h", 11.0),
            ("b", "c", 8.0),
            ("c", "i", 2.0),
            ("c", "d", 7.0),
            ("c", "f", 4.0),
            ("d", "f", 14.0),
            ("d", "e", 9.0),
            ("e", "f", 10.0),
            ("f", "g", 2.0),
            ("g", "i", 6.0),
            ("g", "h", 1.0),
            ("h", "i", 7.0),
        ],
    )
}

// Helper function to list the nodes visited by a path, source first
pub fn labels_of<L: Clone>(path: &[&GraphEdge<L>]) -> Vec<L> {
    let mut labels: Vec<L> = path.first().map(|e| e.node1().clone()).into_iter().collect();
    labels.extend(path.iter().map(|e| e.node2().clone()));
    labels
}
