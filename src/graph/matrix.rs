//! Index-addressable directed graph backed by an adjacency matrix.
//!
//! This module provides [`AdjacencyMatrixDirectedGraph`], which assigns every node a
//! [`NodeId`] in insertion order and stores the directed edge from node `i` to node `j` in
//! cell `(i, j)` of a square matrix that grows by one row and one column per inserted node.
//!
//! # Index Stability
//!
//! The label-to-index mapping is a bijection onto `[0, node_count - 1]` and is never
//! renumbered. Node removal would break it, so [`Graph::remove_node`] always fails with
//! [`Error::Unsupported`]. Edges can be removed freely.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | node lookup by label or index | O(1) |
//! | edge lookup | O(1) |
//! | out-edges / successors of a node | O(n) (row scan) |
//! | in-edges / predecessors of a node | O(n) (column scan) |
//! | edge enumeration, `edge_count` | O(n²) |
//!
//! # Examples
//!
//! ```rust
//! use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode, NodeId};
//!
//! let mut graph = AdjacencyMatrixDirectedGraph::new();
//! for label in ["a", "b", "c"] {
//!     graph.add_node(GraphNode::new(label));
//! }
//! graph.add_edge(GraphEdge::new("a", "b", true, 1.0))?;
//! graph.add_edge(GraphEdge::new("c", "b", true, 2.0))?;
//!
//! assert_eq!(graph.node_index_of(&"c")?, NodeId::new(2));
//! assert_eq!(graph.predecessor_nodes_of(&"b")?.len(), 2);
//! assert_eq!(graph.degree_of(&"b")?, 2);
//! assert!(graph.remove_node(&"a").is_err());
//! # Ok::<(), graphalgos::Error>(())
//! ```

use std::collections::HashMap;

use crate::{
    graph::{Graph, GraphEdge, GraphLabel, GraphNode, NodeId},
    Error, Result,
};

/// A directed graph with stable node indexes, stored as an adjacency matrix.
///
/// Nodes are returned in index order by [`Graph::nodes`], and edges in row-major order by
/// [`Graph::edges`]. Self-loops are stored on the diagonal.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixDirectedGraph<L> {
    /// Nodes in insertion order; a node's position is its index
    nodes: Vec<GraphNode<L>>,
    /// Map from label to index
    index: HashMap<L, NodeId>,
    /// `matrix[i][j]` holds the edge from node `i` to node `j`
    matrix: Vec<Vec<Option<GraphEdge<L>>>>,
}

impl<L: GraphLabel> Default for AdjacencyMatrixDirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: GraphLabel> AdjacencyMatrixDirectedGraph<L> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            matrix: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes before reallocating.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            matrix: Vec::with_capacity(nodes),
        }
    }

    /// Resolves a label to its matrix position.
    fn position_of(&self, label: &L) -> Result<usize> {
        self.index
            .get(label)
            .map(|id| id.index())
            .ok_or_else(|| invalid_argument!("node {:?} is not part of this graph", label))
    }

    /// Validates an index against the current node count.
    fn check_index(&self, index: NodeId) -> Result<usize> {
        if index.index() < self.nodes.len() {
            Ok(index.index())
        } else {
            Err(Error::IndexOutOfRange {
                index: index.index(),
                len: self.nodes.len(),
            })
        }
    }

    /// Resolves both endpoints of a directed edge.
    fn cell_of(&self, edge: &GraphEdge<L>) -> Result<(usize, usize)> {
        if !edge.is_directed() {
            return Err(invalid_argument!(
                "undirected edge {:?} cannot be used with a directed graph",
                edge
            ));
        }
        Ok((self.position_of(edge.node1())?, self.position_of(edge.node2())?))
    }

    fn column(&self, column: usize) -> impl Iterator<Item = &GraphEdge<L>> + '_ {
        self.matrix.iter().filter_map(move |row| row[column].as_ref())
    }
}

impl<L: GraphLabel> Graph<L> for AdjacencyMatrixDirectedGraph<L> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.matrix.clear();
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.iter().collect()
    }

    fn add_node(&mut self, node: GraphNode<L>) -> bool {
        if self.index.contains_key(node.label()) {
            return false;
        }

        let id = NodeId::new(self.nodes.len());
        self.index.insert(node.label().clone(), id);
        self.nodes.push(node);

        let len = self.nodes.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; len]);
        true
    }

    fn remove_node(&mut self, _label: &L) -> Result<bool> {
        Err(Error::Unsupported(
            "node removal would renumber the indexes of an adjacency-matrix graph",
        ))
    }

    fn contains_node(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    fn node_of(&self, label: &L) -> Option<&GraphNode<L>> {
        self.index.get(label).map(|id| &self.nodes[id.index()])
    }

    fn node_index_of(&self, label: &L) -> Result<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| invalid_argument!("node {:?} is not part of this graph", label))
    }

    fn node_at_index(&self, index: NodeId) -> Result<&GraphNode<L>> {
        let position = self.check_index(index)?;
        Ok(&self.nodes[position])
    }

    fn edge(&self, node1: &L, node2: &L) -> Result<Option<&GraphEdge<L>>> {
        let i = self.position_of(node1)?;
        let j = self.position_of(node2)?;
        Ok(self.matrix[i][j].as_ref())
    }

    fn edge_at_node_indexes(&self, i: NodeId, j: NodeId) -> Result<Option<&GraphEdge<L>>> {
        let i = self.check_index(i)?;
        let j = self.check_index(j)?;
        Ok(self.matrix[i][j].as_ref())
    }

    fn adjacent_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>> {
        let row = self.position_of(label)?;
        Ok(self.matrix[row]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(column, _)| &self.nodes[column])
            .collect())
    }

    fn predecessor_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>> {
        let column = self.position_of(label)?;
        Ok(self
            .matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row[column].is_some())
            .map(|(row, _)| &self.nodes[row])
            .collect())
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        self.matrix.iter().flatten().flatten().collect()
    }

    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool> {
        let (i, j) = self.cell_of(&edge)?;
        let cell = &mut self.matrix[i][j];
        if cell.is_some() {
            return Ok(false);
        }
        *cell = Some(edge);
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool> {
        let (i, j) = self.cell_of(edge)?;
        Ok(self.matrix[i][j].take().is_some())
    }

    fn set_edge_weight(&mut self, node1: &L, node2: &L, weight: f64) -> Result<bool> {
        let i = self.position_of(node1)?;
        let j = self.position_of(node2)?;
        match self.matrix[i][j].as_mut() {
            Some(edge) => {
                edge.set_weight(weight);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool> {
        let i = self.position_of(edge.node1())?;
        let j = self.position_of(edge.node2())?;
        Ok(self.matrix[i][j].as_ref() == Some(edge))
    }

    fn edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>> {
        let row = self.position_of(label)?;
        Ok(self.matrix[row].iter().flatten().collect())
    }

    fn ingoing_edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>> {
        let column = self.position_of(label)?;
        Ok(self.column(column).collect())
    }
}
