// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # graphalgos
//!
//! Generic graph representations together with the classic shortest-path and spanning-tree
//! algorithms. Node labels are any hashable, comparable value; edge weights are `f64`.
//!
//! ## Features
//!
//! - **📐 Two graph representations** - An indexed, directed adjacency matrix and a
//!   non-indexed, undirected adjacency-set graph behind one [`graph::Graph`] trait
//! - **⛰️ Handle-based min-heap** - [`utils::heap::BinaryHeapMinPriorityQueue`] with
//!   O(log n) priority decrease through per-element handles
//! - **🛣️ Shortest paths** - Dijkstra, Bellman-Ford with negative-cycle detection and
//!   Floyd-Warshall for all pairs
//! - **🌲 Spanning trees** - Kruskal (minimum spanning forest) and Prim (rooted tree)
//! - **🔎 Structured logging** - Algorithm progress is reported through `tracing`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! graphalgos = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphalgos::prelude::*;
//!
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! for label in ["home", "bakery", "office"] {
//!     graph.add_node(GraphNode::new(label));
//! }
//! graph.add_edge(GraphEdge::new("home", "bakery", true, 2.5))?;
//! graph.add_edge(GraphEdge::new("bakery", "office", true, 4.0))?;
//! graph.add_edge(GraphEdge::new("home", "office", true, 9.0))?;
//!
//! let mut dijkstra = DijkstraShortestPathComputer::new(&graph)?;
//! dijkstra.compute_shortest_paths_from(&"home")?;
//!
//! assert_eq!(dijkstra.shortest_distance_to(&"office")?, 6.5);
//! # Ok::<(), graphalgos::Error>(())
//! ```
//!
//! ### Configuring Shortest-Path Computers
//!
//! ```rust
//! use graphalgos::prelude::*;
//!
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! graph.add_node(GraphNode::new(0));
//! graph.add_node(GraphNode::new(1));
//! graph.add_edge(GraphEdge::new(0, 1, true, -3.0))?;
//!
//! let mut bellman_ford =
//!     BellmanFordShortestPathComputer::with_config(&graph, ShortestPathConfig::fast())?;
//! bellman_ford.compute_shortest_paths_from(&0)?;
//! assert_eq!(bellman_ford.shortest_distance_to(&1)?, -3.0);
//! # Ok::<(), graphalgos::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ### Core Components
//!
//! - [`graph`] - Nodes, edges, the [`graph::Graph`] trait and both representations
//! - [`graph::algorithms`] - Shortest-path computers and spanning-tree builders
//! - [`utils::heap`] - The indexed binary min-heap used by Dijkstra and Prim
//! - [`config`] - Options for the shortest-path computers
//!
//! ### Algorithm State
//!
//! Algorithms record distances, priorities, predecessors and colors in the graph's nodes.
//! These fields use interior mutability, so an algorithm only needs a shared borrow of the
//! graph, and that borrow keeps the graph from being restructured while a computer holds it.
//! Running a second algorithm over the same graph overwrites the first one's node state.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`](Result) with a variant describing the
//! violated precondition:
//!
//! ```rust
//! use graphalgos::{Error, prelude::*};
//!
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! graph.add_node(GraphNode::new("a"));
//! graph.add_node(GraphNode::new("b"));
//! graph.add_edge(GraphEdge::new("a", "b", true, -1.0))?;
//!
//! match DijkstraShortestPathComputer::new(&graph) {
//!     Err(Error::InvalidArgument(message)) => println!("rejected: {message}"),
//!     Err(e) => println!("other error: {e}"),
//!     Ok(_) => unreachable!("negative weights are rejected"),
//! }
//! # Ok::<(), graphalgos::Error>(())
//! ```
//!
//! ## Logging
//!
//! The algorithms emit `debug` events when a computation starts and finishes, and `trace`
//! events for accepted tree edges and, when
//! [`ShortestPathConfig::trace_relaxations`] is set, for every relaxation. Install any
//! `tracing` subscriber to see them.
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Cross-check Dijkstra against Bellman-Ford on random graphs
//! cargo +nightly fuzz run shortest_paths --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use graphalgos::prelude::*;
///
/// let mut graph = AdjacencyListUndirectedGraph::new();
/// graph.add_node(GraphNode::new(1));
/// graph.add_node(GraphNode::new(2));
/// graph.add_edge(GraphEdge::new(1, 2, false, 0.5))?;
/// assert_eq!(graph.size(), 3);
/// # Ok::<(), graphalgos::Error>(())
/// ```
pub mod prelude;

/// Options for the shortest-path computers.
pub mod config;

/// Graph representations and the algorithms that run on them.
///
/// # Key Types
///
/// - [`graph::GraphNode`] - A labelled node carrying per-algorithm scratch state
/// - [`graph::GraphEdge`] - A weighted, directed or undirected connection between two labels
/// - [`graph::Graph`] - The contract shared by every representation
/// - [`graph::AdjacencyMatrixDirectedGraph`] - Directed graph with stable node indexes
/// - [`graph::AdjacencyListUndirectedGraph`] - Undirected graph keyed by label
pub mod graph;

/// Supporting data structures.
pub mod utils;

/// `graphalgos` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub use error::Result;

/// `graphalgos` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the individual
/// failure categories.
pub use error::Error;

/// Shortest-path computer options.
///
/// See [`config::ShortestPathConfig`] for the available switches.
pub use config::ShortestPathConfig;
