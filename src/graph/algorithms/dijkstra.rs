//! Dijkstra's single-source shortest-path algorithm.
//!
//! The algorithm keeps every node in a [`BinaryHeapMinPriorityQueue`] keyed by its current
//! distance. It repeatedly extracts the closest node and relaxes its outgoing edges, lowering
//! the queued priority of every improved neighbour through its heap handle.
//!
//! # Complexity
//!
//! - Time: O((V + E) log V)
//! - Space: O(V) for the queue
//!
//! # Preconditions
//!
//! The graph must be non-empty, directed, fully weighted and free of negative weights. These
//! are checked once by [`DijkstraShortestPathComputer::new`]; the borrow held by the computer
//! keeps the graph from changing afterwards.

use tracing::debug;

use crate::{
    graph::{
        algorithms::shortest_path::{
            initialize_single_source, reconstruct_path, relax_edge, validate_weighted_directed,
            ComputeState, SingleSourceShortestPathComputer,
        },
        Graph, GraphEdge, GraphLabel, GraphNode,
    },
    utils::heap::{BinaryHeapMinPriorityQueue, PriorityQueueElement},
    Error, Result, ShortestPathConfig,
};

/// Single-source shortest paths over non-negative weights.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
/// use graphalgos::graph::algorithms::{DijkstraShortestPathComputer, SingleSourceShortestPathComputer};
///
/// let mut graph = AdjacencyMatrixDirectedGraph::new();
/// for label in ["s", "a", "b"] {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new("s", "a", true, 4.0))?;
/// graph.add_edge(GraphEdge::new("s", "b", true, 1.0))?;
/// graph.add_edge(GraphEdge::new("b", "a", true, 2.0))?;
///
/// let mut dijkstra = DijkstraShortestPathComputer::new(&graph)?;
/// dijkstra.compute_shortest_paths_from(&"s")?;
///
/// let path = dijkstra.shortest_path_to(&"a")?.expect("a is reachable");
/// assert_eq!(path.len(), 2);
/// assert_eq!(dijkstra.shortest_distance_to(&"a")?, 3.0);
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Debug)]
pub struct DijkstraShortestPathComputer<'g, L, G: ?Sized> {
    graph: &'g G,
    config: ShortestPathConfig,
    state: ComputeState<L>,
}

impl<'g, L, G> DijkstraShortestPathComputer<'g, L, G>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    /// Creates a computer over `graph` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the graph is empty, undirected, or has an
    /// unweighted or negatively weighted edge.
    pub fn new(graph: &'g G) -> Result<Self> {
        Self::with_config(graph, ShortestPathConfig::default())
    }

    /// Creates a computer over `graph` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_config(graph: &'g G, config: ShortestPathConfig) -> Result<Self> {
        validate_weighted_directed(graph, false)?;
        Ok(Self {
            graph,
            config,
            state: ComputeState::Uninitialized,
        })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ShortestPathConfig {
        &self.config
    }
}

impl<'g, L, G> SingleSourceShortestPathComputer<L> for DijkstraShortestPathComputer<'g, L, G>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    type Graph = G;

    fn compute_shortest_paths_from(&mut self, source: &L) -> Result<()> {
        self.state = ComputeState::Uninitialized;
        initialize_single_source(self.graph, source)?;

        debug!(
            algorithm = "dijkstra",
            source = ?source,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "computing shortest paths"
        );

        let graph: &'g G = self.graph;
        let mut queue = BinaryHeapMinPriorityQueue::with_capacity(graph.node_count());
        for node in graph.nodes() {
            node.set_handle(None);
            node.set_priority(node.floating_point_distance());
            queue.insert(node)?;
        }

        while !queue.is_empty() {
            let u = queue.extract_minimum()?;
            for edge in graph.edges_of(u.label())? {
                let Some(v) = relax_edge(graph, edge, &self.config) else {
                    continue;
                };
                if v.handle().is_some() {
                    queue.decrease_priority(&v, v.floating_point_distance())?;
                }
            }
        }

        debug!(algorithm = "dijkstra", source = ?source, "shortest paths computed");
        self.state = ComputeState::Computed {
            source: source.clone(),
        };
        Ok(())
    }

    fn is_computed(&self) -> bool {
        matches!(self.state, ComputeState::Computed { .. })
    }

    fn last_source(&self) -> Result<&GraphNode<L>> {
        let source = self.state.source()?;
        self.graph
            .node_of(source)
            .ok_or_else(|| Error::InvalidState(format!("source {source:?} is gone")))
    }

    fn graph(&self) -> &G {
        self.graph
    }

    fn shortest_path_to(&self, target: &L) -> Result<Option<Vec<&GraphEdge<L>>>> {
        let source = self.state.source()?;
        reconstruct_path(self.graph, source, target)
    }

    fn shortest_distance_to(&self, target: &L) -> Result<f64> {
        self.state.source()?;
        self.graph
            .node_of(target)
            .map(GraphNode::floating_point_distance)
            .ok_or_else(|| invalid_argument!("target {:?} is not part of the graph", target))
    }
}
