//! Kruskal's minimum spanning forest algorithm.
//!
//! Edges are processed in ascending weight order. An edge joins the forest when its endpoints
//! belong to different disjoint sets, after which the two sets are merged.
//!
//! The disjoint sets are a plain list of node-label sets searched linearly, without union by
//! rank or path compression: locating a node costs O(V), for O(E · V) overall. On a
//! disconnected graph the result is a spanning forest, one tree per component.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    graph::{Graph, GraphEdge, GraphLabel},
    Result,
};

/// Computes minimum spanning forests of undirected weighted graphs.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyListUndirectedGraph, Graph, GraphEdge, GraphNode};
/// use graphalgos::graph::algorithms::{total_weight, KruskalMSP};
///
/// let mut graph = AdjacencyListUndirectedGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new("a", "b", false, 1.0))?;
/// graph.add_edge(GraphEdge::new("b", "c", false, 2.0))?;
/// graph.add_edge(GraphEdge::new("a", "c", false, 3.0))?;
///
/// let tree = KruskalMSP::new().compute_msp(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(total_weight(tree), 3.0);
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct KruskalMSP<L> {
    disjoint_sets: Vec<HashSet<L>>,
}

impl<L: GraphLabel> Default for KruskalMSP<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: GraphLabel> KruskalMSP<L> {
    /// Creates a new instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            disjoint_sets: Vec::new(),
        }
    }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Equal-weight edges are taken in the order [`Graph::edges`] yields them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error) if the graph is directed or has an
    /// unweighted or negatively weighted edge.
    pub fn compute_msp<'g, G>(&mut self, graph: &'g G) -> Result<HashSet<&'g GraphEdge<L>>>
    where
        G: Graph<L> + ?Sized,
    {
        validate_weighted_undirected(graph)?;

        debug!(
            algorithm = "kruskal",
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "computing minimum spanning forest"
        );

        self.disjoint_sets = graph
            .nodes()
            .into_iter()
            .map(|node| HashSet::from([node.label().clone()]))
            .collect();

        let mut edges = graph.edges();
        edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        let mut tree = HashSet::new();
        for edge in edges {
            let (Some(i), Some(j)) = (self.set_of(edge.node1()), self.set_of(edge.node2())) else {
                continue;
            };
            if i == j {
                continue;
            }

            trace!(edge = ?edge, weight = edge.weight(), "edge joins the spanning forest");
            tree.insert(edge);
            self.union(i, j);
        }

        debug!(
            algorithm = "kruskal",
            tree_edges = tree.len(),
            components = self.disjoint_sets.len(),
            "minimum spanning forest computed"
        );
        Ok(tree)
    }

    fn set_of(&self, label: &L) -> Option<usize> {
        self.disjoint_sets.iter().position(|set| set.contains(label))
    }

    fn union(&mut self, i: usize, j: usize) {
        let absorbed = self.disjoint_sets.swap_remove(j);
        // swap_remove moved the last set into slot j
        let i = if i == self.disjoint_sets.len() { j } else { i };
        self.disjoint_sets[i].extend(absorbed);
    }
}

/// Checks the preconditions shared by the spanning-tree algorithms: undirected, fully weighted
/// and free of negative weights.
pub(crate) fn validate_weighted_undirected<L, G>(graph: &G) -> Result<()>
where
    L: GraphLabel,
    G: Graph<L> + ?Sized,
{
    if graph.is_directed() {
        return Err(invalid_argument!("the graph must be undirected"));
    }

    for edge in graph.edges() {
        if !edge.has_weight() {
            return Err(invalid_argument!("edge {:?} has no weight", edge));
        }
        if edge.weight() < 0.0 {
            return Err(invalid_argument!("edge {:?} has a negative weight", edge));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{
            algorithms::total_weight, AdjacencyListUndirectedGraph, AdjacencyMatrixDirectedGraph,
            GraphNode,
        },
        test::kruskal_graph,
        Error,
    };

    #[test]
    fn test_reference_graph() {
        let graph = kruskal_graph();
        let tree = KruskalMSP::new().compute_msp(&graph).unwrap();

        let expected: HashSet<GraphEdge<&str>> = [
            ("a", "b"),
            ("b", "c"),
            ("c", "i"),
            ("c", "d"),
            ("c", "f"),
            ("d", "e"),
            ("f", "g"),
            ("g", "h"),
        ]
        .into_iter()
        .map(|(x, y)| GraphEdge::unweighted(x, y, false))
        .collect();

        let actual: HashSet<GraphEdge<&str>> = tree.iter().map(|edge| (*edge).clone()).collect();
        assert_eq!(actual, expected);
        assert_eq!(tree.len(), graph.node_count() - 1);
        assert_eq!(total_weight(tree), 37.0);
    }

    #[test]
    fn test_forest_on_disconnected_graph() {
        let mut graph = AdjacencyListUndirectedGraph::new();
        for label in 1..=5 {
            graph.add_node(GraphNode::new(label));
        }
        graph.add_edge(GraphEdge::new(1, 2, false, 3.0)).unwrap();
        graph.add_edge(GraphEdge::new(2, 3, false, 1.0)).unwrap();
        graph.add_edge(GraphEdge::new(1, 3, false, 2.0)).unwrap();
        graph.add_edge(GraphEdge::new(4, 5, false, 7.0)).unwrap();

        let mut kruskal = KruskalMSP::new();
        let forest = kruskal.compute_msp(&graph).unwrap();
        assert_eq!(forest.len(), 3);
        assert_eq!(total_weight(forest), 10.0);
        assert_eq!(kruskal.disjoint_sets.len(), 2);
    }

    #[test]
    fn test_self_loop_is_skipped() {
        let mut graph = AdjacencyListUndirectedGraph::new();
        graph.add_node(GraphNode::new("a"));
        graph.add_node(GraphNode::new("b"));
        graph.add_edge(GraphEdge::new("a", "a", false, 0.0)).unwrap();
        graph.add_edge(GraphEdge::new("a", "b", false, 1.0)).unwrap();

        let tree = KruskalMSP::new().compute_msp(&graph).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&GraphEdge::unweighted("b", "a", false)));
    }

    #[test]
    fn test_empty_graph() {
        let graph: AdjacencyListUndirectedGraph<u8> = AdjacencyListUndirectedGraph::new();
        assert!(KruskalMSP::new().compute_msp(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_reuse_resets_sets() {
        let graph = kruskal_graph();
        let mut kruskal = KruskalMSP::new();
        let first = kruskal.compute_msp(&graph).unwrap();
        let second = kruskal.compute_msp(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_invalid_graphs() {
        let mut directed = AdjacencyMatrixDirectedGraph::new();
        directed.add_node(GraphNode::new("a"));
        assert!(matches!(
            KruskalMSP::new().compute_msp(&directed),
            Err(Error::InvalidArgument(_))
        ));

        let mut negative = AdjacencyListUndirectedGraph::new();
        negative.add_node(GraphNode::new("a"));
        negative.add_node(GraphNode::new("b"));
        negative
            .add_edge(GraphEdge::new("a", "b", false, -1.0))
            .unwrap();
        assert!(KruskalMSP::new().compute_msp(&negative).is_err());

        let mut unweighted = AdjacencyListUndirectedGraph::new();
        unweighted.add_node(GraphNode::new("a"));
        unweighted.add_node(GraphNode::new("b"));
        unweighted
            .add_edge(GraphEdge::unweighted("a", "b", false))
            .unwrap();
        assert!(KruskalMSP::new().compute_msp(&unweighted).is_err());
    }

    #[test]
    fn test_union_keeps_other_sets() {
        let mut kruskal = KruskalMSP {
            disjoint_sets: vec![
                HashSet::from([1]),
                HashSet::from([2]),
                HashSet::from([3]),
            ],
        };
        kruskal.union(2, 0);
        assert_eq!(kruskal.disjoint_sets.len(), 2);
        assert_eq!(kruskal.set_of(&1), kruskal.set_of(&3));
        assert_ne!(kruskal.set_of(&1), kruskal.set_of(&2));
    }
}
