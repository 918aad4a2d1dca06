//! # graphalgos Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphalgos library. Import this module to get quick access to the graph
//! representations, the algorithms and the traits their methods live on.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphalgos operations
pub use crate::Error;

/// The result type used throughout graphalgos
pub use crate::Result;

/// Options for the shortest-path computers
pub use crate::ShortestPathConfig;

// ================================================================================================
// Graph Building Blocks
// ================================================================================================

/// Labelled nodes, their algorithm colors and positional indexes
pub use crate::graph::{GraphNode, NodeColor, NodeId};

/// Weighted connections between two labels
pub use crate::graph::GraphEdge;

/// The capability contract every representation implements, and its label bound
pub use crate::graph::{Graph, GraphLabel};

// ================================================================================================
// Graph Representations
// ================================================================================================

/// Indexed directed graph backed by an adjacency matrix
pub use crate::graph::AdjacencyMatrixDirectedGraph;

/// Non-indexed undirected graph backed by adjacency sets
pub use crate::graph::AdjacencyListUndirectedGraph;

// ================================================================================================
// Shortest Paths
// ================================================================================================

/// Single-source shortest-path contract and its implementations
pub use crate::graph::algorithms::{
    BellmanFordShortestPathComputer, DijkstraShortestPathComputer,
    SingleSourceShortestPathComputer,
};

/// All-pairs shortest paths
pub use crate::graph::algorithms::FloydWarshallAllPairsShortestPathComputer;

/// Path rendering and weight summation
pub use crate::graph::algorithms::{print_path, total_weight};

// ================================================================================================
// Spanning Trees
// ================================================================================================

/// Minimum spanning forest and rooted minimum spanning tree builders
pub use crate::graph::algorithms::{KruskalMSP, PrimMSP};

// ================================================================================================
// Supporting Data Structures
// ================================================================================================

/// Indexed binary min-heap and the element contract it relies on
pub use crate::utils::heap::{BinaryHeapMinPriorityQueue, PriorityQueueElement};
