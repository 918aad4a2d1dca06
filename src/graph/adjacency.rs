//! Undirected graph backed by per-node adjacency sets.
//!
//! This module provides [`AdjacencyListUndirectedGraph`], which maps every node to the set of
//! undirected edges incident to it. Each edge is recorded in the sets of both endpoints (once
//! for a self-loop), so incident-edge queries are O(degree).
//!
//! Unlike [`AdjacencyMatrixDirectedGraph`](crate::graph::AdjacencyMatrixDirectedGraph), this
//! representation keeps no index bijection. In exchange it supports node removal, which
//! cascades to every incident edge. Index addressing and ingoing-edge queries return
//! [`Error::Unsupported`].

use std::collections::{HashMap, HashSet};

use crate::{
    graph::{Graph, GraphEdge, GraphLabel, GraphNode, NodeId},
    Error, Result,
};

/// An undirected graph storing the incident edges of every node in a hash set.
///
/// Iteration order of [`Graph::nodes`], [`Graph::edges`] and the adjacency queries is
/// unspecified.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyListUndirectedGraph, Graph, GraphEdge, GraphNode};
///
/// let mut graph = AdjacencyListUndirectedGraph::new();
/// graph.add_node(GraphNode::new("a"));
/// graph.add_node(GraphNode::new("b"));
/// graph.add_edge(GraphEdge::new("a", "b", false, 4.0))?;
///
/// // order-insensitive lookup
/// assert!(graph.edge(&"b", &"a")?.is_some());
///
/// // removing a node takes its edges along
/// assert!(graph.remove_node(&"b")?);
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyListUndirectedGraph<L> {
    /// Nodes keyed by label
    nodes: HashMap<L, GraphNode<L>>,
    /// Incident edges of every node, keyed by label
    adjacent_lists: HashMap<L, HashSet<GraphEdge<L>>>,
}

impl<L: GraphLabel> Default for AdjacencyListUndirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: GraphLabel> AdjacencyListUndirectedGraph<L> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            adjacent_lists: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes before reallocating.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(nodes),
            adjacent_lists: HashMap::with_capacity(nodes),
        }
    }

    fn incident(&self, label: &L) -> Result<&HashSet<GraphEdge<L>>> {
        self.adjacent_lists
            .get(label)
            .ok_or_else(|| invalid_argument!("node {:?} is not part of this graph", label))
    }

    /// Checks that an edge is undirected and that both of its endpoints exist.
    fn check_edge(&self, edge: &GraphEdge<L>) -> Result<()> {
        if edge.is_directed() {
            return Err(invalid_argument!(
                "directed edge {:?} cannot be used with an undirected graph",
                edge
            ));
        }
        self.incident(edge.node1())?;
        self.incident(edge.node2())?;
        Ok(())
    }
}

impl<L: GraphLabel> Graph<L> for AdjacencyListUndirectedGraph<L> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.adjacent_lists.clear();
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.values().collect()
    }

    fn add_node(&mut self, node: GraphNode<L>) -> bool {
        if self.nodes.contains_key(node.label()) {
            return false;
        }

        self.adjacent_lists
            .insert(node.label().clone(), HashSet::new());
        self.nodes.insert(node.label().clone(), node);
        true
    }

    fn remove_node(&mut self, label: &L) -> Result<bool> {
        let Some(incident) = self.adjacent_lists.remove(label) else {
            return Ok(false);
        };

        for edge in &incident {
            if let Some(other) = edge.opposite(label) {
                if let Some(neighbours) = self.adjacent_lists.get_mut(other) {
                    neighbours.remove(edge);
                }
            }
        }
        self.nodes.remove(label);
        Ok(true)
    }

    fn contains_node(&self, label: &L) -> bool {
        self.nodes.contains_key(label)
    }

    fn node_of(&self, label: &L) -> Option<&GraphNode<L>> {
        self.nodes.get(label)
    }

    fn node_index_of(&self, _label: &L) -> Result<NodeId> {
        Err(Error::Unsupported(
            "an adjacency-list graph does not index its nodes",
        ))
    }

    fn node_at_index(&self, _index: NodeId) -> Result<&GraphNode<L>> {
        Err(Error::Unsupported(
            "an adjacency-list graph does not index its nodes",
        ))
    }

    fn edge(&self, node1: &L, node2: &L) -> Result<Option<&GraphEdge<L>>> {
        let incident = self.incident(node1)?;
        self.incident(node2)?;
        let probe = GraphEdge::unweighted(node1.clone(), node2.clone(), false);
        Ok(incident.get(&probe))
    }

    fn edge_at_node_indexes(&self, _i: NodeId, _j: NodeId) -> Result<Option<&GraphEdge<L>>> {
        Err(Error::Unsupported(
            "an adjacency-list graph does not index its nodes",
        ))
    }

    fn adjacent_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>> {
        let incident = self.incident(label)?;
        Ok(incident
            .iter()
            .filter_map(|edge| edge.opposite(label))
            .filter(|other| *other != label)
            .filter_map(|other| self.nodes.get(other))
            .collect())
    }

    fn predecessor_nodes_of(&self, _label: &L) -> Result<Vec<&GraphNode<L>>> {
        Err(Error::Unsupported(
            "predecessors are only defined for directed graphs",
        ))
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        let unique: HashSet<&GraphEdge<L>> = self.adjacent_lists.values().flatten().collect();
        unique.into_iter().collect()
    }

    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool> {
        self.check_edge(&edge)?;

        let first = edge.node1().clone();
        let second = edge.node2().clone();
        if let Some(incident) = self.adjacent_lists.get_mut(&first) {
            if !incident.insert(edge.clone()) {
                return Ok(false);
            }
        }
        if let Some(incident) = self.adjacent_lists.get_mut(&second) {
            incident.insert(edge);
        }
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool> {
        self.check_edge(edge)?;

        let mut removed = false;
        for endpoint in [edge.node1(), edge.node2()] {
            if let Some(incident) = self.adjacent_lists.get_mut(endpoint) {
                removed |= incident.remove(edge);
            }
        }
        Ok(removed)
    }

    fn set_edge_weight(&mut self, node1: &L, node2: &L, weight: f64) -> Result<bool> {
        self.incident(node1)?;
        self.incident(node2)?;

        // both endpoint sets hold their own copy of the edge
        let probe = GraphEdge::unweighted(node1.clone(), node2.clone(), false);
        let mut updated = false;
        for endpoint in [node1, node2] {
            if let Some(incident) = self.adjacent_lists.get_mut(endpoint) {
                if let Some(mut edge) = incident.take(&probe) {
                    edge.set_weight(weight);
                    incident.insert(edge);
                    updated = true;
                }
            }
        }
        Ok(updated)
    }

    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool> {
        let incident = self.incident(edge.node1())?;
        self.incident(edge.node2())?;
        Ok(incident.contains(edge))
    }

    fn edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>> {
        Ok(self.incident(label)?.iter().collect())
    }

    fn ingoing_edges_of(&self, _label: &L) -> Result<Vec<&GraphEdge<L>>> {
        Err(Error::Unsupported(
            "ingoing edges are only defined for directed graphs",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjacencyListUndirectedGraph<&'static str> {
        let mut graph = AdjacencyListUndirectedGraph::new();
        for label in ["a", "b", "c"] {
            graph.add_node(GraphNode::new(label));
        }
        graph.add_edge(GraphEdge::new("a", "b", false, 1.0)).unwrap();
        graph.add_edge(GraphEdge::new("b", "c", false, 2.0)).unwrap();
        graph.add_edge(GraphEdge::new("c", "a", false, 3.0)).unwrap();
        graph
    }

    fn sorted(nodes: Vec<&GraphNode<&'static str>>) -> Vec<&'static str> {
        let mut labels: Vec<_> = nodes.iter().map(|n| *n.label()).collect();
        labels.sort_unstable();
        labels
    }

    #[test]
    fn test_counts() {
        let graph = triangle();
        assert!(!graph.is_directed());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.size(), 6);
        assert_eq!(graph.edges().len(), 3);
    }

    #[test]
    fn test_add_existing_node_keeps_edges() {
        let mut graph = triangle();
        assert!(!graph.add_node(GraphNode::new("a")));
        assert_eq!(graph.degree_of(&"a").unwrap(), 2);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_duplicate_edge_is_rejected_in_either_order() {
        let mut graph = triangle();
        assert!(!graph.add_edge(GraphEdge::new("b", "a", false, 9.0)).unwrap());
        assert_eq!(graph.edge(&"a", &"b").unwrap().unwrap().weight(), 1.0);
    }

    #[test]
    fn test_add_edge_rejects_invalid() {
        let mut graph = triangle();
        assert!(matches!(
            graph.add_edge(GraphEdge::new("a", "b", true, 1.0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.add_edge(GraphEdge::new("a", "z", false, 1.0)),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_edge_lookup() {
        let graph = triangle();
        assert_eq!(graph.edge(&"c", &"b").unwrap().unwrap().weight(), 2.0);
        assert!(graph
            .contains_edge(&GraphEdge::unweighted("a", "c", false))
            .unwrap());
        assert!(matches!(
            graph.edge(&"a", &"z"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_adjacency() {
        let mut graph = triangle();
        graph.add_node(GraphNode::new("d"));
        graph.add_edge(GraphEdge::new("d", "d", false, 1.0)).unwrap();

        assert_eq!(sorted(graph.adjacent_nodes_of(&"a").unwrap()), vec!["b", "c"]);
        assert!(graph.adjacent_nodes_of(&"d").unwrap().is_empty());
        assert_eq!(graph.edges_of(&"b").unwrap().len(), 2);
        assert_eq!(graph.degree_of(&"b").unwrap(), 2);
        assert_eq!(graph.degree_of(&"d").unwrap(), 1);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_unsupported_operations() {
        let graph = triangle();
        assert!(matches!(
            graph.node_index_of(&"a"),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            graph.node_at_index(NodeId::new(0)),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            graph.edge_at_node_indexes(NodeId::new(0), NodeId::new(1)),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            graph.predecessor_nodes_of(&"a"),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            graph.ingoing_edges_of(&"a"),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut graph = triangle();
        assert!(graph.remove_node(&"a").unwrap());
        assert!(!graph.remove_node(&"a").unwrap());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree_of(&"b").unwrap(), 1);
        assert_eq!(sorted(graph.adjacent_nodes_of(&"c").unwrap()), vec!["b"]);
        assert!(graph.node_of(&"a").is_none());
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();
        let edge = GraphEdge::unweighted("c", "b", false);

        assert!(graph.remove_edge(&edge).unwrap());
        assert!(!graph.remove_edge(&edge).unwrap());
        assert!(!graph.contains_edge(&edge).unwrap());
        assert_eq!(graph.degree_of(&"b").unwrap(), 1);
        assert_eq!(graph.degree_of(&"c").unwrap(), 1);
        assert!(matches!(
            graph.remove_edge(&GraphEdge::unweighted("a", "b", true)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_edge_weight_updates_both_endpoints() {
        let mut graph = triangle();
        assert!(graph.set_edge_weight(&"b", &"a", 9.0).unwrap());

        for (from, to) in [("a", "b"), ("b", "a")] {
            assert_eq!(graph.edge(&from, &to).unwrap().unwrap().weight(), 9.0);
        }
        for label in ["a", "b"] {
            let weights: Vec<f64> = graph
                .edges_of(&label)
                .unwrap()
                .iter()
                .filter(|edge| edge.connects(&"a") && edge.connects(&"b"))
                .map(|edge| edge.weight())
                .collect();
            assert_eq!(weights, vec![9.0]);
        }
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_set_edge_weight_missing_edge() {
        let mut graph = triangle();
        graph.add_node(GraphNode::new("d"));

        assert!(!graph.set_edge_weight(&"a", &"d", 1.0).unwrap());
        assert!(graph.edge(&"a", &"d").unwrap().is_none());
        assert!(matches!(
            graph.set_edge_weight(&"a", &"z", 1.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut graph = triangle();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
