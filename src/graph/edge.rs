//! Edge type for graphs.
//!
//! This module provides [`GraphEdge`], a connection between two nodes identified by their
//! labels. An edge is either directed or undirected and carries an optional floating-point
//! weight, where `NaN` means "unweighted".
//!
//! # Equality
//!
//! Directed edges compare direction-sensitively: `a -> b` differs from `b -> a`. Undirected
//! edges compare symmetrically: `a -- b` equals `b -- a`. A directed edge never equals an
//! undirected one. The weight takes no part in equality or hashing.

use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

/// A connection between two nodes.
///
/// The endpoints and direction are fixed at construction; the weight is the only mutable
/// field. Endpoints are stored as labels, which act as non-owning references into the graph.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::GraphEdge;
///
/// let forward = GraphEdge::new("a", "b", true, 2.0);
/// let backward = GraphEdge::new("b", "a", true, 2.0);
/// assert_ne!(forward, backward);
///
/// let one_way = GraphEdge::new("a", "b", false, 2.0);
/// let other_way = GraphEdge::unweighted("b", "a", false);
/// assert_eq!(one_way, other_way);
/// assert!(!other_way.has_weight());
/// ```
#[derive(Clone)]
pub struct GraphEdge<L> {
    node1: L,
    node2: L,
    directed: bool,
    weight: f64,
}

impl<L> GraphEdge<L> {
    /// Creates a weighted edge from `node1` to `node2`.
    pub fn new(node1: L, node2: L, directed: bool, weight: f64) -> Self {
        GraphEdge {
            node1,
            node2,
            directed,
            weight,
        }
    }

    /// Creates an edge without a weight.
    pub fn unweighted(node1: L, node2: L, directed: bool) -> Self {
        Self::new(node1, node2, directed, f64::NAN)
    }

    /// Returns the first endpoint (the source of a directed edge).
    pub fn node1(&self) -> &L {
        &self.node1
    }

    /// Returns the second endpoint (the target of a directed edge).
    pub fn node2(&self) -> &L {
        &self.node2
    }

    /// Returns `true` if the edge is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the weight, `NaN` when the edge is unweighted.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replaces the weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Returns `true` unless the weight is the `NaN` sentinel.
    pub fn has_weight(&self) -> bool {
        !self.weight.is_nan()
    }
}

impl<L: PartialEq> GraphEdge<L> {
    /// Returns `true` if `label` is one of the endpoints.
    pub fn connects(&self, label: &L) -> bool {
        self.node1 == *label || self.node2 == *label
    }

    /// Returns the endpoint opposite to `label`, or `None` if `label` is not an endpoint.
    ///
    /// For a self-loop the opposite endpoint is the node itself.
    pub fn opposite(&self, label: &L) -> Option<&L> {
        if self.node1 == *label {
            Some(&self.node2)
        } else if self.node2 == *label {
            Some(&self.node1)
        } else {
            None
        }
    }
}

impl<L: PartialEq> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }

        let straight = self.node1 == other.node1 && self.node2 == other.node2;
        if self.directed {
            straight
        } else {
            straight || (self.node1 == other.node2 && self.node2 == other.node1)
        }
    }
}

impl<L: Eq> Eq for GraphEdge<L> {}

impl<L: Hash> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.node1.hash(state);
            self.node2.hash(state);
        } else {
            // order-insensitive so that a -- b and b -- a land in the same bucket
            let first = label_hash(&self.node1);
            let second = label_hash(&self.node2);
            first.min(second).hash(state);
            first.max(second).hash(state);
        }
    }
}

fn label_hash<L: Hash>(label: &L) -> u64 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    hasher.finish()
}

impl<L: fmt::Debug> fmt::Debug for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "-->" } else { "--" };
        write!(
            f,
            "GraphEdge({:?} {} {:?}, weight: {:?})",
            self.node1, arrow, self.node2, self.weight
        )
    }
}

impl<L: fmt::Display> fmt::Display for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "-->" } else { "--" };
        write!(f, "Edge [ {} {} {} ]", self.node1, arrow, self.node2)
    }
}
