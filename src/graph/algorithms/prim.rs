//! Prim's minimum spanning tree algorithm.
//!
//! Grows a single tree from a source node. Every node waits in a
//! [`BinaryHeapMinPriorityQueue`] keyed by the weight of the cheapest edge connecting it to
//! the tree so far; extracting a node adds it to the tree and may lower the keys of its
//! unvisited neighbours.
//!
//! The result is left in the nodes: after [`PrimMSP::compute_msp`] every node reachable from
//! the source has its `previous` link pointing at its parent in the tree. Nodes outside the
//! source's component keep an infinite priority and no predecessor.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    graph::{
        algorithms::kruskal::validate_weighted_undirected, Graph, GraphEdge, GraphLabel,
        NodeColor,
    },
    utils::heap::{BinaryHeapMinPriorityQueue, PriorityQueueElement},
    Error, Result,
};

/// Computes minimum spanning trees rooted at a source node.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyListUndirectedGraph, Graph, GraphEdge, GraphNode};
/// use graphalgos::graph::algorithms::PrimMSP;
///
/// let mut graph = AdjacencyListUndirectedGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new("a", "b", false, 1.0))?;
/// graph.add_edge(GraphEdge::new("b", "c", false, 2.0))?;
/// graph.add_edge(GraphEdge::new("a", "c", false, 3.0))?;
///
/// let mut prim = PrimMSP::new();
/// prim.compute_msp(&graph, &"a")?;
///
/// assert_eq!(graph.node_of(&"c").and_then(|n| n.previous()), Some("b"));
/// assert_eq!(prim.tree_edges(&graph)?.len(), 2);
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimMSP {
    _private: (),
}

impl PrimMSP {
    /// Creates a new instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a minimum spanning tree of the component containing `source`.
    ///
    /// Every node's priority is reset to `+∞`, its predecessor to `None` and its color to
    /// [`NodeColor::White`]; the source starts at priority `0`. Extracted nodes turn
    /// [`NodeColor::Black`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `source` is not part of the graph, or the graph
    /// is directed or has an unweighted or negatively weighted edge.
    pub fn compute_msp<L, G>(&mut self, graph: &G, source: &L) -> Result<()>
    where
        L: GraphLabel,
        G: Graph<L> + ?Sized,
    {
        let start = graph
            .node_of(source)
            .ok_or_else(|| invalid_argument!("source {:?} is not part of the graph", source))?;
        validate_weighted_undirected(graph)?;

        debug!(
            algorithm = "prim",
            source = ?source,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "computing minimum spanning tree"
        );

        let nodes = graph.nodes();
        for node in &nodes {
            node.set_priority(f64::INFINITY);
            node.set_previous(None);
            node.set_color(NodeColor::White);
            node.set_handle(None);
        }
        start.set_priority(0.0);

        let mut queue = BinaryHeapMinPriorityQueue::with_capacity(nodes.len());
        for node in nodes {
            queue.insert(node)?;
        }

        let mut tree_edges = 0usize;
        while !queue.is_empty() {
            let u = queue.extract_minimum()?;
            u.set_color(NodeColor::Black);
            if u.priority() == f64::INFINITY {
                // outside the source's component
                continue;
            }

            for v in graph.adjacent_nodes_of(u.label())? {
                if v.color() != NodeColor::White {
                    continue;
                }
                let Some(edge) = graph.edge(u.label(), v.label())? else {
                    continue;
                };
                if edge.weight() < v.priority() {
                    v.set_previous(Some(u.label().clone()));
                    queue.decrease_priority(&v, edge.weight())?;
                }
            }

            if let Some(parent) = u.previous() {
                trace!(
                    from = ?parent,
                    to = ?u.label(),
                    weight = u.priority(),
                    "edge joins the spanning tree"
                );
                tree_edges += 1;
            }
        }

        debug!(algorithm = "prim", tree_edges, "minimum spanning tree computed");
        Ok(())
    }

    /// Collects the edge between every node and its predecessor.
    ///
    /// After [`compute_msp`](Self::compute_msp) these are exactly the edges of the spanning
    /// tree of the source's component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if a predecessor link is not backed by an edge, which
    /// happens when another algorithm overwrote the links in between.
    pub fn tree_edges<'g, L, G>(&self, graph: &'g G) -> Result<HashSet<&'g GraphEdge<L>>>
    where
        L: GraphLabel,
        G: Graph<L> + ?Sized,
    {
        let mut edges = HashSet::new();
        for node in graph.nodes() {
            let Some(parent) = node.previous() else {
                continue;
            };
            let edge = graph.edge(&parent, node.label())?.ok_or_else(|| {
                Error::InvalidState(format!(
                    "no edge between {:?} and {:?} backs the predecessor link",
                    parent,
                    node.label()
                ))
            })?;
            edges.insert(edge);
        }
        Ok(edges)
    }
}
