//! Generic graph infrastructure.
//!
//! This module provides label-identified nodes and weighted edges, two graph representations
//! sharing one capability trait, and the classic shortest-path and spanning-tree algorithms
//! that run on top of them.
//!
//! # Architecture
//!
//! The graph module is organized into several components:
//!
//! - **Core Types**: [`GraphNode`], [`GraphEdge`] and [`NodeId`] provide the fundamental
//!   building blocks for graph representation
//! - **Traits**: [`Graph`] is the capability set every representation implements;
//!   [`GraphLabel`] bounds the label type
//! - **Representations**: [`AdjacencyMatrixDirectedGraph`] (indexed, directed) and
//!   [`AdjacencyListUndirectedGraph`] (non-indexed, undirected)
//! - **Algorithms**: Dijkstra, Bellman-Ford, Floyd-Warshall, Kruskal and Prim in
//!   [`algorithms`]
//!
//! # Design Principles
//!
//! ## Label Identity
//!
//! A node is identified by its label alone. Edges refer to their endpoints by label, and the
//! predecessor link left behind by an algorithm is a label as well, so no structure ever
//! holds a second owning reference to a node.
//!
//! ## In-Place Scratch State
//!
//! Algorithms borrow the graph and write their working state (distance, predecessor, color,
//! priority, heap handle) into the nodes themselves. Running a second algorithm over the
//! same graph overwrites the first one's state; consume results before reusing the graph.
//!
//! ## Thread Safety
//!
//! Graphs are [`Send`] when their labels are, but never [`Sync`]: node scratch state uses
//! [`Cell`](std::cell::Cell), which forbids concurrent computations over a shared graph.
//!
//! # Usage Examples
//!
//! ## Creating a Simple Graph
//!
//! ```rust
//! use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! for label in ["A", "B", "C", "D"] {
//!     graph.add_node(GraphNode::new(label));
//! }
//! graph.add_edge(GraphEdge::new("A", "B", true, 1.0))?;
//! graph.add_edge(GraphEdge::new("A", "C", true, 2.0))?;
//! graph.add_edge(GraphEdge::new("B", "D", true, 3.0))?;
//! graph.add_edge(GraphEdge::new("C", "D", true, 1.0))?;
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), graphalgos::Error>(())
//! ```
//!
//! ## Computing Shortest Paths
//!
//! ```rust
//! use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
//! use graphalgos::graph::algorithms::{DijkstraShortestPathComputer, SingleSourceShortestPathComputer};
//!
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! for label in ["A", "B", "C", "D"] {
//!     graph.add_node(GraphNode::new(label));
//! }
//! graph.add_edge(GraphEdge::new("A", "B", true, 1.0))?;
//! graph.add_edge(GraphEdge::new("A", "C", true, 2.0))?;
//! graph.add_edge(GraphEdge::new("B", "D", true, 3.0))?;
//! graph.add_edge(GraphEdge::new("C", "D", true, 1.0))?;
//!
//! let mut dijkstra = DijkstraShortestPathComputer::new(&graph)?;
//! dijkstra.compute_shortest_paths_from(&"A")?;
//! assert_eq!(dijkstra.shortest_distance_to(&"D")?, 3.0);
//! # Ok::<(), graphalgos::Error>(())
//! ```

mod adjacency;
mod edge;
mod matrix;
mod node;
mod traits;

pub mod algorithms;

// Re-export core types at module level
pub use adjacency::AdjacencyListUndirectedGraph;
pub use edge::GraphEdge;
pub use matrix::AdjacencyMatrixDirectedGraph;
pub use node::{GraphNode, NodeColor, NodeId};
pub use traits::{Graph, GraphLabel};
