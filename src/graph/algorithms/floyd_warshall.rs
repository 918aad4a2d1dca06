//! Floyd-Warshall all-pairs shortest paths.
//!
//! Maintains two `V × V` matrices addressed through the graph's node indexes:
//!
//! - `cost[i][j]`: the shortest known distance from node `i` to node `j`
//! - `predecessor[i][j]`: the node preceding `j` on a shortest `i → j` path, or `None` when
//!   `j` is unreachable from `i`
//!
//! The classic triple loop considers every node `h` as an intermediate hop and keeps
//! `cost[i][h] + cost[h][j]` whenever it beats `cost[i][j]`. A negative entry on the diagonal
//! afterwards means that a node can reach itself at negative cost, i.e. a negative-weight
//! cycle exists.
//!
//! # Complexity
//!
//! - Time: O(V³)
//! - Space: O(V²)
//!
//! # Requirements
//!
//! The graph must be directed, non-empty, fully weighted and index-addressable. Negative
//! weights are allowed; negative cycles are rejected by the compute step.

use tracing::{debug, trace};

use crate::{
    graph::{Graph, GraphEdge, GraphLabel, NodeId},
    Error, Result, ShortestPathConfig,
};

use super::shortest_path::validate_weighted_directed;

/// All-pairs shortest paths over an index-addressable directed graph.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
/// use graphalgos::graph::algorithms::FloydWarshallAllPairsShortestPathComputer;
///
/// let mut graph = AdjacencyMatrixDirectedGraph::new();
/// for label in [1, 2, 3, 4] {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new(1, 2, true, 10.0))?;
/// graph.add_edge(GraphEdge::new(1, 3, true, 5.0))?;
/// graph.add_edge(GraphEdge::new(2, 4, true, 5.0))?;
/// graph.add_edge(GraphEdge::new(3, 4, true, 5.0))?;
///
/// let mut floyd_warshall = FloydWarshallAllPairsShortestPathComputer::new(&graph)?;
/// floyd_warshall.compute_shortest_paths()?;
///
/// let path = floyd_warshall.shortest_path(&1, &4)?.expect("4 is reachable from 1");
/// assert_eq!(path.len(), 2);
/// assert_eq!(floyd_warshall.shortest_path_cost(&1, &4)?, 10.0);
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Debug)]
pub struct FloydWarshallAllPairsShortestPathComputer<'g, L, G: ?Sized> {
    graph: &'g G,
    config: ShortestPathConfig,
    /// `cost[i][j]` is the shortest distance from node `i` to node `j`
    cost: Vec<Vec<f64>>,
    /// `predecessor[i][j]` precedes `j` on a shortest path from `i`
    predecessor: Vec<Vec<Option<NodeId>>>,
    computed: bool,
    _label: std::marker::PhantomData<L>,
}

impl<'g, L, G> FloydWarshallAllPairsShortestPathComputer<'g, L, G>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    /// Creates a computer over `graph` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the graph is empty, undirected, or has an
    /// unweighted edge.
    pub fn new(graph: &'g G) -> Result<Self> {
        Self::with_config(graph, ShortestPathConfig::default())
    }

    /// Creates a computer over `graph` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_config(graph: &'g G, config: ShortestPathConfig) -> Result<Self> {
        validate_weighted_directed(graph, true)?;
        Ok(Self {
            graph,
            config,
            cost: Vec::new(),
            predecessor: Vec::new(),
            computed: false,
            _label: std::marker::PhantomData,
        })
    }

    /// Computes the shortest paths between every pair of nodes.
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeCycle`] if the graph contains a negative-weight cycle; the computer
    ///   is left uncomputed
    /// - [`Error::Unsupported`] if the graph does not offer index addressing
    pub fn compute_shortest_paths(&mut self) -> Result<()> {
        self.computed = false;

        let n = self.graph.node_count();
        debug!(
            algorithm = "floyd-warshall",
            nodes = n,
            edges = self.graph.edge_count(),
            "computing all-pairs shortest paths"
        );

        let mut cost = vec![vec![f64::INFINITY; n]; n];
        let mut predecessor = vec![vec![None; n]; n];
        for (i, row) in cost.iter_mut().enumerate() {
            row[i] = 0.0;
        }

        for edge in self.graph.edges() {
            let i = self.graph.node_index_of(edge.node1())?.index();
            let j = self.graph.node_index_of(edge.node2())?.index();
            if edge.weight() < cost[i][j] {
                cost[i][j] = edge.weight();
                predecessor[i][j] = Some(NodeId::new(i));
            }
        }

        for h in 0..n {
            for i in 0..n {
                let to_hop = cost[i][h];
                if to_hop == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let through = to_hop + cost[h][j];
                    if through < cost[i][j] {
                        cost[i][j] = through;
                        predecessor[i][j] = predecessor[h][j];
                        if self.config.trace_relaxations {
                            trace!(from = i, to = j, via = h, cost = through, "improved pair");
                        }
                    }
                }
            }
        }

        if let Some(i) = (0..n).find(|&i| cost[i][i] < 0.0) {
            let node = self.graph.node_at_index(NodeId::new(i))?;
            debug!(node = ?node.label(), cost = cost[i][i], "negative-weight cycle detected");
            return Err(Error::NegativeCycle);
        }

        self.cost = cost;
        self.predecessor = predecessor;
        self.computed = true;
        debug!(algorithm = "floyd-warshall", "all-pairs shortest paths computed");
        Ok(())
    }

    /// Returns `true` once a compute step has succeeded.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Returns the graph this computer runs on.
    pub fn graph(&self) -> &G {
        self.graph
    }

    /// Returns the edges of a shortest path from `source` to `target`.
    ///
    /// The result is `Some(vec![])` when `source == target` and `None` when `target` is
    /// unreachable from `source`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if nothing has been computed yet
    /// - [`Error::InvalidArgument`] if either node is not part of the graph
    pub fn shortest_path(&self, source: &L, target: &L) -> Result<Option<Vec<&'g GraphEdge<L>>>> {
        self.ensure_computed()?;
        let s = self.graph.node_index_of(source)?.index();
        let t = self.graph.node_index_of(target)?.index();
        if s == t {
            return Ok(Some(Vec::new()));
        }
        if self.predecessor[s][t].is_none() {
            return Ok(None);
        }

        // walk back from t until s is reached
        let mut hops = vec![t];
        let mut current = t;
        while current != s {
            if hops.len() > self.cost.len() {
                return Err(Error::InvalidState(format!(
                    "the predecessor chain from {source:?} to {target:?} does not terminate"
                )));
            }
            current = self.predecessor[s][current]
                .ok_or_else(|| {
                    Error::InvalidState(format!("the path from {source:?} to {target:?} is broken"))
                })?
                .index();
            hops.push(current);
        }
        hops.reverse();

        let mut path = Vec::with_capacity(hops.len() - 1);
        for pair in hops.windows(2) {
            let edge = self
                .graph
                .edge_at_node_indexes(NodeId::new(pair[0]), NodeId::new(pair[1]))?
                .ok_or_else(|| {
                    Error::InvalidState(format!(
                        "no edge between nodes {} and {} backs the predecessor matrix",
                        pair[0], pair[1]
                    ))
                })?;
            path.push(edge);
        }
        Ok(Some(path))
    }

    /// Returns the cost of the shortest path from `source` to `target`.
    ///
    /// The cost is summed over the reconstructed path: `0` when `source == target`, `+∞` when
    /// `target` is unreachable.
    ///
    /// # Errors
    ///
    /// Same as [`shortest_path`](Self::shortest_path).
    pub fn shortest_path_cost(&self, source: &L, target: &L) -> Result<f64> {
        Ok(match self.shortest_path(source, target)? {
            Some(path) => path.iter().map(|edge| edge.weight()).sum(),
            None => f64::INFINITY,
        })
    }

    /// Returns the cost matrix indexed by [`NodeId`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if nothing has been computed yet.
    pub fn cost_matrix(&self) -> Result<&[Vec<f64>]> {
        self.ensure_computed()?;
        Ok(&self.cost)
    }

    /// Returns the predecessor matrix indexed by [`NodeId`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if nothing has been computed yet.
    pub fn predecessor_matrix(&self) -> Result<&[Vec<Option<NodeId>>]> {
        self.ensure_computed()?;
        Ok(&self.predecessor)
    }

    fn ensure_computed(&self) -> Result<()> {
        if self.computed {
            Ok(())
        } else {
            Err(Error::InvalidState(
                "no shortest paths have been computed yet".to_string(),
            ))
        }
    }
}
