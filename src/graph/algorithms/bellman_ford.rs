//! Bellman-Ford single-source shortest-path algorithm.
//!
//! Relaxes every edge of the graph `V - 1` times, after which all shortest distances are final
//! unless a negative-weight cycle is reachable from the source. One further scan over the edges
//! detects such a cycle: any edge that still relaxes proves its existence.
//!
//! # Complexity
//!
//! - Time: O(V · E)
//! - Space: O(E) for the edge snapshot
//!
//! # Early Termination
//!
//! With [`ShortestPathConfig::early_termination`] set, the relaxation passes stop as soon as
//! a full pass leaves every distance unchanged. The negative-cycle scan runs regardless.

use tracing::debug;

use crate::{
    graph::{
        algorithms::shortest_path::{
            can_relax, initialize_single_source, reconstruct_path, relax_edge,
            validate_weighted_directed, ComputeState, SingleSourceShortestPathComputer,
        },
        Graph, GraphEdge, GraphLabel, GraphNode,
    },
    Error, Result, ShortestPathConfig,
};

/// Single-source shortest paths over arbitrary weights without negative cycles.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
/// use graphalgos::graph::algorithms::{BellmanFordShortestPathComputer, SingleSourceShortestPathComputer};
/// use graphalgos::Error;
///
/// let mut graph = AdjacencyMatrixDirectedGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new("a", "b", true, 4.0))?;
/// graph.add_edge(GraphEdge::new("b", "c", true, -3.0))?;
///
/// let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph)?;
/// bellman_ford.compute_shortest_paths_from(&"a")?;
/// assert_eq!(bellman_ford.shortest_distance_to(&"c")?, 1.0);
///
/// graph.add_edge(GraphEdge::new("c", "b", true, 1.0))?;
/// let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph)?;
/// assert_eq!(
///     bellman_ford.compute_shortest_paths_from(&"a"),
///     Err(Error::NegativeCycle)
/// );
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Debug)]
pub struct BellmanFordShortestPathComputer<'g, L, G: ?Sized> {
    graph: &'g G,
    config: ShortestPathConfig,
    state: ComputeState<L>,
}

impl<'g, L, G> BellmanFordShortestPathComputer<'g, L, G>
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
            state: ComputeState::Uninitialized,
        })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ShortestPathConfig {
        &self.config
    }
}

impl<'g, L, G> SingleSourceShortestPathComputer<L> for BellmanFordShortestPathComputer<'g, L, G>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    type Graph = G;

    fn compute_shortest_paths_from(&mut self, source: &L) -> Result<()> {
        self.state = ComputeState::Uninitialized;
        initialize_single_source(self.graph, source)?;

        let edges = self.graph.edges();
        let passes = self.graph.node_count().saturating_sub(1);
        debug!(
            algorithm = "bellman-ford",
            source = ?source,
            nodes = self.graph.node_count(),
            edges = edges.len(),
            "computing shortest paths"
        );

        for pass in 0..passes {
            let mut relaxed = false;
            for edge in &edges {
                relaxed |= relax_edge(self.graph, edge, &self.config).is_some();
            }

            if !relaxed && self.config.early_termination {
                debug!(pass, "distances stable, stopping early");
                break;
            }
        }

        if let Some(edge) = edges.iter().find(|edge| can_relax(self.graph, edge)) {
            debug!(edge = ?edge, "negative-weight cycle detected");
            return Err(Error::NegativeCycle);
        }

        debug!(algorithm = "bellman-ford", source = ?source, "shortest paths computed");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{
            algorithms::{total_weight, DijkstraShortestPathComputer},
            AdjacencyMatrixDirectedGraph,
        },
        test::{labels_of, negative_cycle_graph, scenario_graph},
    };

    #[test]
    fn test_scenario_with_negative_edge() {
        let graph = scenario_graph(-2.05);
        let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph).unwrap();
        bellman_ford.compute_shortest_paths_from(&"s").unwrap();
        assert!(bellman_ford.is_computed());

        let to_v = bellman_ford.shortest_path_to(&"v").unwrap().unwrap();
        assert_eq!(labels_of(&to_v), vec!["s", "x", "u", "v"]);
        assert!((total_weight(to_v) - 9.16).abs() < 1e-9);

        let to_y = bellman_ford.shortest_path_to(&"y").unwrap().unwrap();
        assert_eq!(labels_of(&to_y), vec!["s", "x", "y"]);
        assert!((total_weight(to_y) - 7.12).abs() < 1e-9);
    }

    #[test]
    fn test_early_termination_gives_same_result() {
        let graph = scenario_graph(-2.05);
        let mut strict = BellmanFordShortestPathComputer::new(&graph).unwrap();
        strict.compute_shortest_paths_from(&"s").unwrap();
        let strict_distances: Vec<f64> = ["s", "u", "x", "y", "v"]
            .iter()
            .map(|label| strict.shortest_distance_to(label).unwrap())
            .collect();

        let mut fast =
            BellmanFordShortestPathComputer::with_config(&graph, ShortestPathConfig::fast())
                .unwrap();
        assert!(fast.config().early_termination);
        fast.compute_shortest_paths_from(&"s").unwrap();
        let fast_distances: Vec<f64> = ["s", "u", "x", "y", "v"]
            .iter()
            .map(|label| fast.shortest_distance_to(label).unwrap())
            .collect();

        assert_eq!(strict_distances, fast_distances);
    }

    #[test]
    fn test_negative_cycle() {
        let graph = negative_cycle_graph();
        for config in [ShortestPathConfig::strict(), ShortestPathConfig::fast()] {
            let mut bellman_ford =
                BellmanFordShortestPathComputer::with_config(&graph, config).unwrap();
            assert_eq!(
                bellman_ford.compute_shortest_paths_from(&1),
                Err(Error::NegativeCycle)
            );
            assert!(!bellman_ford.is_computed());
            assert!(bellman_ford.shortest_path_to(&3).is_err());
        }
    }

    #[test]
    fn test_failed_compute_clears_previous_result() {
        let mut graph = AdjacencyMatrixDirectedGraph::new();
        for label in ["a", "b", "c", "d"] {
            graph.add_node(GraphNode::new(label));
        }
        graph.add_edge(GraphEdge::new("a", "b", true, 1.0)).unwrap();
        graph.add_edge(GraphEdge::new("c", "d", true, -1.0)).unwrap();
        graph.add_edge(GraphEdge::new("d", "c", true, -1.0)).unwrap();

        let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph).unwrap();
        bellman_ford.compute_shortest_paths_from(&"a").unwrap();
        assert!(bellman_ford.is_computed());
        assert_eq!(bellman_ford.shortest_path_to(&"c").unwrap(), None);

        assert_eq!(
            bellman_ford.compute_shortest_paths_from(&"c"),
            Err(Error::NegativeCycle)
        );
        assert!(!bellman_ford.is_computed());
        assert!(bellman_ford.last_source().is_err());
    }

    #[test]
    fn test_agrees_with_dijkstra() {
        let graph = scenario_graph(2.05);
        let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph).unwrap();
        let mut dijkstra = DijkstraShortestPathComputer::new(&graph).unwrap();

        for source in ["s", "u", "x", "y", "v"] {
            bellman_ford.compute_shortest_paths_from(&source).unwrap();
            let expected: Vec<f64> = graph
                .nodes()
                .iter()
                .map(|node| bellman_ford.shortest_distance_to(node.label()).unwrap())
                .collect();

            dijkstra.compute_shortest_paths_from(&source).unwrap();
            let actual: Vec<f64> = graph
                .nodes()
                .iter()
                .map(|node| dijkstra.shortest_distance_to(node.label()).unwrap())
                .collect();

            for (e, a) in expected.iter().zip(&actual) {
                assert!((e - a).abs() < 1e-9, "{source}: {e} != {a}");
            }
        }
    }

    #[test]
    fn test_single_node() {
        let mut graph = AdjacencyMatrixDirectedGraph::new();
        graph.add_node(GraphNode::new("only"));

        let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph).unwrap();
        bellman_ford.compute_shortest_paths_from(&"only").unwrap();
        assert_eq!(bellman_ford.shortest_path_to(&"only").unwrap(), Some(vec![]));
        assert_eq!(bellman_ford.graph().node_count(), 1);
    }
}
