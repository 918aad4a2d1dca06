//! Trait definitions for graph abstractions.
//!
//! This module defines the capability trait that every graph representation implements, so
//! that algorithms can be written once and run against any representation.
//!
//! # Architecture
//!
//! - [`GraphLabel`] - The bounds a node label must satisfy
//! - [`Graph`] - The full capability set: node and edge management, lookup, adjacency and
//!   degree queries
//!
//! # Partial Capabilities
//!
//! Representations differ in what they can offer. The matrix-backed graph never renumbers its
//! nodes and therefore cannot remove them; the adjacency-list graph has no index bijection and
//! no notion of ingoing edges. Such operations return [`Error::Unsupported`](crate::Error),
//! which callers must treat as a regular outcome distinct from a missing node or index.
//!
//! # Node Arguments
//!
//! Nodes are identified by their labels. Every operation that refers to a node takes a `&L`,
//! and fails with [`Error::InvalidArgument`](crate::Error) if no node with that label exists.

use std::{fmt::Debug, hash::Hash};

use crate::{
    graph::{GraphEdge, GraphNode, NodeId},
    Result,
};

/// Bounds required of a node label.
///
/// Blanket-implemented for every type that satisfies them, so `&str`, integers and `String`
/// all work as labels out of the box.
pub trait GraphLabel: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> GraphLabel for T {}

/// The capability set shared by all graph representations.
///
/// Collections are returned as `Vec`s of borrowed nodes and edges; their order is unspecified
/// unless an implementation documents otherwise.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
///
/// fn describe<G: Graph<&'static str>>(graph: &G) -> String {
///     format!("{} nodes, {} edges", graph.node_count(), graph.edge_count())
/// }
///
/// let mut graph = AdjacencyMatrixDirectedGraph::new();
/// graph.add_node(GraphNode::new("a"));
/// graph.add_node(GraphNode::new("b"));
/// graph.add_edge(GraphEdge::new("a", "b", true, 1.5))?;
///
/// assert_eq!(describe(&graph), "2 nodes, 1 edges");
/// assert_eq!(graph.size(), 3);
/// # Ok::<(), graphalgos::Error>(())
/// ```
pub trait Graph<L: GraphLabel> {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns the number of nodes plus the number of edges.
    fn size(&self) -> usize {
        self.node_count() + self.edge_count()
    }

    /// Returns `true` if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Removes every node and edge.
    fn clear(&mut self);

    /// Returns `true` if this representation stores directed edges.
    fn is_directed(&self) -> bool;

    /// Returns every node.
    fn nodes(&self) -> Vec<&GraphNode<L>>;

    /// Adds a node, returning `false` without any change if its label is already present.
    fn add_node(&mut self, node: GraphNode<L>) -> bool;

    /// Removes a node together with its incident edges.
    ///
    /// Returns `Ok(false)` if no node has this label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`](crate::Error) if the representation cannot remove nodes.
    fn remove_node(&mut self, label: &L) -> Result<bool>;

    /// Returns `true` if a node with this label exists.
    fn contains_node(&self, label: &L) -> bool;

    /// Returns the node with this label, if any.
    fn node_of(&self, label: &L) -> Option<&GraphNode<L>>;

    /// Returns the index assigned to the node at insertion.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::Error) if no node has this label
    /// - [`Error::Unsupported`](crate::Error) if the representation is not indexed
    fn node_index_of(&self, label: &L) -> Result<NodeId>;

    /// Returns the node at an index.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`](crate::Error) if `index` is not in `[0, node_count - 1]`
    /// - [`Error::Unsupported`](crate::Error) if the representation is not indexed
    fn node_at_index(&self, index: NodeId) -> Result<&GraphNode<L>>;

    /// Returns the edge connecting two nodes, if any.
    ///
    /// For a directed graph the edge must go from `node1` to `node2`; for an undirected graph
    /// the order is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if either node is absent.
    fn edge(&self, node1: &L, node2: &L) -> Result<Option<&GraphEdge<L>>>;

    /// Returns the edge connecting the nodes at two indexes, if any.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`](crate::Error) if either index is out of range
    /// - [`Error::Unsupported`](crate::Error) if the representation is not indexed
    fn edge_at_node_indexes(&self, i: NodeId, j: NodeId) -> Result<Option<&GraphEdge<L>>>;

    /// Returns the nodes reachable through one edge of `label`.
    ///
    /// For a directed graph only outgoing edges are followed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if the node is absent.
    fn adjacent_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>>;

    /// Returns the sources of the edges entering `label`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::Error) if the node is absent
    /// - [`Error::Unsupported`](crate::Error) if the graph is undirected
    fn predecessor_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>>;

    /// Returns every edge.
    fn edges(&self) -> Vec<&GraphEdge<L>>;

    /// Adds an edge, returning `Ok(false)` without any change if an equal edge exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if an endpoint is absent or the edge's
    /// directedness does not match the graph's.
    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool>;

    /// Removes an edge, returning whether it was present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if an endpoint is absent or the edge's
    /// directedness does not match the graph's.
    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool>;

    /// Replaces the weight of the edge connecting two nodes, returning whether such an edge
    /// exists.
    ///
    /// The weight is the only part of a stored edge that may change. Node order follows
    /// [`edge`](Self::edge).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if either node is absent.
    fn set_edge_weight(&mut self, node1: &L, node2: &L, weight: f64) -> Result<bool>;

    /// Returns `true` if an equal edge is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if an endpoint is absent.
    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool>;

    /// Returns the edges incident to `label`; outgoing edges only for a directed graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if the node is absent.
    fn edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>>;

    /// Returns the edges entering `label`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::Error) if the node is absent
    /// - [`Error::Unsupported`](crate::Error) if the graph is undirected
    fn ingoing_edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>>;

    /// Returns the number of edges touching `label`.
    ///
    /// For a directed graph this is the out-degree plus the in-degree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if the node is absent.
    fn degree_of(&self, label: &L) -> Result<usize> {
        let outgoing = self.edges_of(label)?.len();
        if self.is_directed() {
            Ok(outgoing + self.ingoing_edges_of(label)?.len())
        } else {
            Ok(outgoing)
        }
    }
}
