//! Shortest-path and spanning-tree algorithms.
//!
//! Every algorithm borrows a graph implementing [`Graph`](crate::graph::Graph) and records
//! its working state in the graph's nodes.
//!
//! # Available Algorithms
//!
//! ## Single-Source Shortest Paths
//!
//! - [`DijkstraShortestPathComputer`] - Dijkstra's algorithm, non-negative weights only
//! - [`BellmanFordShortestPathComputer`] - Bellman-Ford, negative weights allowed, negative
//!   cycles detected
//! - [`SingleSourceShortestPathComputer`] - The contract both implement
//!
//! ## All-Pairs Shortest Paths
//!
//! - [`FloydWarshallAllPairsShortestPathComputer`] - Floyd-Warshall over the node indexes
//!
//! ## Minimum Spanning Trees
//!
//! - [`KruskalMSP`] - Kruskal's algorithm, returns the forest's edge set
//! - [`PrimMSP`] - Prim's algorithm, leaves the tree in the predecessor links
//!
//! ## Helpers
//!
//! - [`print_path`] - Render a path as `[ a -- w --> b ]`
//! - [`total_weight`] - Sum the weights of a path or tree
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Requirements |
//! |-----------|-----------------|--------------|
//! | Dijkstra | O((V + E) log V) | directed, weights ≥ 0 |
//! | Bellman-Ford | O(V · E) | directed, no negative cycle |
//! | Floyd-Warshall | O(V³) | directed, indexed, no negative cycle |
//! | Kruskal | O(E · V) | undirected, weights ≥ 0 |
//! | Prim | O((V + E) log V) | undirected, weights ≥ 0 |
//!
//! # Examples
//!
//! ## Single-Source Shortest Paths
//!
//! ```rust
//! use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
//! use graphalgos::graph::algorithms::{
//!     print_path, BellmanFordShortestPathComputer, SingleSourceShortestPathComputer,
//! };
//!
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! for label in ["s", "t", "u"] {
//!     graph.add_node(GraphNode::new(label));
//! }
//! graph.add_edge(GraphEdge::new("s", "t", true, 5.0))?;
//! graph.add_edge(GraphEdge::new("s", "u", true, 2.0))?;
//! graph.add_edge(GraphEdge::new("u", "t", true, -1.0))?;
//!
//! let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph)?;
//! bellman_ford.compute_shortest_paths_from(&"s")?;
//!
//! let path = bellman_ford.shortest_path_to(&"t")?.expect("t is reachable");
//! assert_eq!(print_path(&path), "[ s -- 2.0 --> u -- -1.0 --> t ]");
//! # Ok::<(), graphalgos::Error>(())
//! ```
//!
//! ## Minimum Spanning Tree
//!
//! ```rust
//! use graphalgos::graph::{AdjacencyListUndirectedGraph, Graph, GraphEdge, GraphNode};
//! use graphalgos::graph::algorithms::{total_weight, KruskalMSP, PrimMSP};
//!
//! let mut graph = AdjacencyListUndirectedGraph::new();
//! for label in 0..4 {
//!     graph.add_node(GraphNode::new(label));
//! }
//! graph.add_edge(GraphEdge::new(0, 1, false, 1.0))?;
//! graph.add_edge(GraphEdge::new(1, 2, false, 4.0))?;
//! graph.add_edge(GraphEdge::new(2, 3, false, 1.0))?;
//! graph.add_edge(GraphEdge::new(3, 0, false, 2.0))?;
//!
//! let kruskal = KruskalMSP::new().compute_msp(&graph)?;
//!
//! let mut prim = PrimMSP::new();
//! prim.compute_msp(&graph, &0)?;
//! let prim_tree = prim.tree_edges(&graph)?;
//!
//! assert_eq!(total_weight(kruskal), total_weight(prim_tree));
//! # Ok::<(), graphalgos::Error>(())
//! ```

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod kruskal;
mod prim;
mod shortest_path;

// Re-export all public items
pub use bellman_ford::BellmanFordShortestPathComputer;
pub use dijkstra::DijkstraShortestPathComputer;
pub use floyd_warshall::FloydWarshallAllPairsShortestPathComputer;
pub use kruskal::KruskalMSP;
pub use prim::PrimMSP;
pub use shortest_path::{print_path, total_weight, SingleSourceShortestPathComputer};
