//! Shared contract and helpers for single-source shortest-path computers.
//!
//! Every single-source computer follows the same two-phase lifecycle: it is constructed over a
//! borrowed graph (validating the graph's preconditions once), then
//! [`compute_shortest_paths_from`](SingleSourceShortestPathComputer::compute_shortest_paths_from)
//! writes distances and predecessor links into the nodes. Result accessors fail with
//! [`Error::InvalidState`] until a compute step has succeeded.

use std::fmt;

use tracing::trace;

use crate::{
    graph::{Graph, GraphEdge, GraphLabel, GraphNode},
    Error, Result, ShortestPathConfig,
};

/// Common interface of Dijkstra and Bellman-Ford.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphEdge, GraphNode};
/// use graphalgos::graph::algorithms::{
///     BellmanFordShortestPathComputer, DijkstraShortestPathComputer,
///     SingleSourceShortestPathComputer,
/// };
///
/// fn distance<C: SingleSourceShortestPathComputer<&'static str>>(
///     computer: &mut C,
/// ) -> graphalgos::Result<f64> {
///     computer.compute_shortest_paths_from(&"a")?;
///     computer.shortest_distance_to(&"c")
/// }
///
/// let mut graph = AdjacencyMatrixDirectedGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new("a", "b", true, 1.0))?;
/// graph.add_edge(GraphEdge::new("b", "c", true, 2.0))?;
///
/// let dijkstra = distance(&mut DijkstraShortestPathComputer::new(&graph)?)?;
/// let bellman_ford = distance(&mut BellmanFordShortestPathComputer::new(&graph)?)?;
/// assert_eq!(dijkstra, bellman_ford);
/// # Ok::<(), graphalgos::Error>(())
/// ```
pub trait SingleSourceShortestPathComputer<L: GraphLabel> {
    /// The graph type the computer runs on.
    type Graph: Graph<L> + ?Sized;

    /// Computes the shortest paths from `source` to every node of the graph.
    ///
    /// Every node's distance is reset to `+∞` (the source's to `0`) and its predecessor to
    /// `None` before the algorithm runs.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `source` is not a node of the graph
    /// - [`Error::NegativeCycle`] if the algorithm detects a negative-weight cycle; the computer
    ///   is left uncomputed
    fn compute_shortest_paths_from(&mut self, source: &L) -> Result<()>;

    /// Returns `true` once a compute step has succeeded.
    fn is_computed(&self) -> bool;

    /// Returns the source node of the last successful compute step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if nothing has been computed yet.
    fn last_source(&self) -> Result<&GraphNode<L>>;

    /// Returns the graph this computer runs on.
    fn graph(&self) -> &Self::Graph;

    /// Returns the edges of a shortest path from the last source to `target`.
    ///
    /// The result is `Some(vec![])` when `target` is the source and `None` when `target` is
    /// unreachable.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if nothing has been computed yet
    /// - [`Error::InvalidArgument`] if `target` is not a node of the graph
    fn shortest_path_to(&self, target: &L) -> Result<Option<Vec<&GraphEdge<L>>>>;

    /// Returns the shortest distance from the last source to `target`, `+∞` if unreachable.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if nothing has been computed yet
    /// - [`Error::InvalidArgument`] if `target` is not a node of the graph
    fn shortest_distance_to(&self, target: &L) -> Result<f64>;
}

/// Lifecycle of a single-source computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ComputeState<L> {
    Uninitialized,
    Computed { source: L },
}

impl<L> ComputeState<L> {
    /// Returns the last source, or a state error if nothing has been computed.
    pub(crate) fn source(&self) -> Result<&L> {
        match self {
            ComputeState::Computed { source } => Ok(source),
            ComputeState::Uninitialized => Err(Error::InvalidState(
                "no shortest paths have been computed yet".to_string(),
            )),
        }
    }
}

/// Checks the preconditions shared by the shortest-path algorithms.
///
/// The graph must be non-empty, directed and fully weighted; negative weights are rejected
/// unless `allow_negative` is set.
pub(crate) fn validate_weighted_directed<L, G>(graph: &G, allow_negative: bool) -> Result<()>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    if graph.is_empty() {
        return Err(invalid_argument!("the graph is empty"));
    }
    if !graph.is_directed() {
        return Err(invalid_argument!("the graph must be directed"));
    }

    for edge in graph.edges() {
        if !edge.has_weight() {
            return Err(invalid_argument!("edge {:?} has no weight", edge));
        }
        if !allow_negative && edge.weight() < 0.0 {
            return Err(invalid_argument!("edge {:?} has a negative weight", edge));
        }
    }
    Ok(())
}

/// Resets every node's distance and predecessor, and sets the source's distance to zero.
pub(crate) fn initialize_single_source<L, G>(graph: &G, source: &L) -> Result<()>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    let start = graph
        .node_of(source)
        .ok_or_else(|| invalid_argument!("source {:?} is not part of the graph", source))?;

    for node in graph.nodes() {
        node.set_floating_point_distance(f64::INFINITY);
        node.set_previous(None);
    }
    start.set_floating_point_distance(0.0);
    Ok(())
}

/// Relaxes a directed edge, returning its target node if the target's distance improved.
pub(crate) fn relax_edge<'g, L, G>(
    graph: &'g G,
    edge: &GraphEdge<L>,
    config: &ShortestPathConfig,
) -> Option<&'g GraphNode<L>>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    let u = graph.node_of(edge.node1())?;
    let v = graph.node_of(edge.node2())?;

    let candidate = u.floating_point_distance() + edge.weight();
    if candidate < v.floating_point_distance() {
        v.set_floating_point_distance(candidate);
        v.set_previous(Some(u.label().clone()));
        if config.trace_relaxations {
            trace!(from = ?u.label(), to = ?v.label(), distance = candidate, "relaxed edge");
        }
        Some(v)
    } else {
        None
    }
}

/// Returns `true` if relaxing `edge` would still lower its target's distance.
pub(crate) fn can_relax<L, G>(graph: &G, edge: &GraphEdge<L>) -> bool
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    match (graph.node_of(edge.node1()), graph.node_of(edge.node2())) {
        (Some(u), Some(v)) => {
            u.floating_point_distance() + edge.weight() < v.floating_point_distance()
        }
        _ => false,
    }
}

/// Walks predecessor links back from `target` to `source` and returns the edges in path order.
pub(crate) fn reconstruct_path<'g, L, G>(
    graph: &'g G,
    source: &L,
    target: &L,
) -> Result<Option<Vec<&'g GraphEdge<L>>>>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    let mut current = graph
        .node_of(target)
        .ok_or_else(|| invalid_argument!("target {:?} is not part of the graph", target))?;

    let mut path = Vec::new();
    while current.label() != source {
        if path.len() >= graph.node_count() {
            return Err(Error::InvalidState(format!(
                "the predecessor chain of {:?} does not lead back to {:?}",
                target, source
            )));
        }

        let Some(previous) = current.previous() else {
            return Ok(None);
        };
        let edge = graph.edge(&previous, current.label())?.ok_or_else(|| {
            Error::InvalidState(format!(
                "no edge from {:?} to {:?} backs the predecessor link",
                previous,
                current.label()
            ))
        })?;
        path.push(edge);
        current = graph
            .node_of(&previous)
            .ok_or_else(|| Error::InvalidState(format!("predecessor {previous:?} is gone")))?;
    }

    path.reverse();
    Ok(Some(path))
}

/// Renders a path as `[ a -- w --> b -- w --> c ]`, or `[ ]` for an empty path.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::GraphEdge;
/// use graphalgos::graph::algorithms::print_path;
///
/// let ab = GraphEdge::new("a", "b", true, 1.5);
/// let bc = GraphEdge::new("b", "c", true, 2.0);
///
/// assert_eq!(print_path(&[&ab, &bc]), "[ a -- 1.5 --> b -- 2.0 --> c ]");
/// assert_eq!(print_path::<&str>(&[]), "[ ]");
/// ```
#[must_use]
pub fn print_path<L: fmt::Display>(path: &[&GraphEdge<L>]) -> String {
    let Some(first) = path.first() else {
        return "[ ]".to_string();
    };

    let mut rendered = format!("[ {}", first.node1());
    for edge in path {
        rendered.push_str(&format!(" -- {:?} --> {}", edge.weight(), edge.node2()));
    }
    rendered.push_str(" ]");
    rendered
}

/// Sums the weights of a collection of edges.
///
/// Unweighted edges contribute `NaN`, which makes the total `NaN` as well.
pub fn total_weight<'a, L: 'a>(edges: impl IntoIterator<Item = &'a GraphEdge<L>>) -> f64 {
    edges.into_iter().map(GraphEdge::weight).sum()
}
