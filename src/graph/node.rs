//! Node types for graphs.
//!
//! This module provides [`GraphNode`], the label-identified vertex type shared by every graph
//! representation, together with [`NodeId`], the strongly-typed index used by representations
//! that offer index addressing, and [`NodeColor`], the visit state used by traversal-style
//! algorithms.
//!
//! # Identity and Scratch State
//!
//! A node's identity is its label and nothing else. Next to the label every node carries a set
//! of scratch fields (color, distances, timestamps, predecessor, priority and heap handle) that
//! algorithms overwrite in place while they run. The scratch fields live in [`Cell`]s, so an
//! algorithm holding a shared reference to the graph can update them; they never take part in
//! equality or hashing.

use std::{
    cell::{Cell, RefCell},
    fmt,
    hash::{Hash, Hasher},
};

use strum::{Display, EnumCount, EnumIter};

use crate::utils::heap::PriorityQueueElement;

/// A strongly-typed identifier for nodes within an index-addressable graph.
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent
/// accidental mixing of node indices with other integer values. Node IDs are assigned
/// sequentially starting from 0 when nodes are added to a graph, and are never renumbered.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{AdjacencyMatrixDirectedGraph, Graph, GraphNode, NodeId};
///
/// let mut graph = AdjacencyMatrixDirectedGraph::new();
/// graph.add_node(GraphNode::new("A"));
/// graph.add_node(GraphNode::new("B"));
///
/// assert_eq!(graph.node_index_of(&"B")?, NodeId::new(1));
/// # Ok::<(), graphalgos::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage should obtain `NodeId` values from
    /// [`Graph::node_index_of`](crate::graph::Graph::node_index_of).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index is a 0-based position that can be used to index into vectors
    /// or matrices that store per-node data.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// Visit state of a node during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum NodeColor {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered, still on the frontier.
    Grey,
    /// Fully processed.
    Black,
}

/// A graph vertex identified by an immutable label.
///
/// Two nodes are equal if and only if their labels are equal. The scratch fields are ignored by
/// [`PartialEq`] and [`Hash`].
///
/// # Scratch Fields
///
/// | Field | Written by |
/// |-------|------------|
/// | color | Prim |
/// | floating-point distance | Dijkstra, Bellman-Ford |
/// | integer distance | free for client traversals |
/// | entering / exiting time | free for client traversals |
/// | previous | Dijkstra, Bellman-Ford, Prim |
/// | priority / handle | the priority queue |
///
/// Running a second algorithm over the same graph overwrites the scratch state of the first.
///
/// # Examples
///
/// ```rust
/// use graphalgos::graph::{GraphNode, NodeColor};
///
/// let node = GraphNode::new("a");
/// node.set_color(NodeColor::Grey);
/// node.set_floating_point_distance(4.5);
///
/// assert_eq!(node, GraphNode::new("a"));
/// assert_eq!(node.to_string(), "Node[ a ]");
/// ```
#[derive(Clone)]
pub struct GraphNode<L> {
    label: L,
    color: Cell<NodeColor>,
    floating_point_distance: Cell<f64>,
    integer_distance: Cell<i64>,
    entering_time: Cell<i64>,
    exiting_time: Cell<i64>,
    previous: RefCell<Option<L>>,
    priority: Cell<f64>,
    handle: Cell<Option<usize>>,
}

impl<L> GraphNode<L> {
    /// Creates a node with the given label and default scratch state.
    pub fn new(label: L) -> Self {
        GraphNode {
            label,
            color: Cell::new(NodeColor::White),
            floating_point_distance: Cell::new(0.0),
            integer_distance: Cell::new(0),
            entering_time: Cell::new(0),
            exiting_time: Cell::new(0),
            previous: RefCell::new(None),
            priority: Cell::new(0.0),
            handle: Cell::new(None),
        }
    }

    /// Returns the label identifying this node.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Consumes the node and returns its label.
    pub fn into_label(self) -> L {
        self.label
    }

    /// Returns the visit color.
    pub fn color(&self) -> NodeColor {
        self.color.get()
    }

    /// Sets the visit color.
    pub fn set_color(&self, color: NodeColor) {
        self.color.set(color);
    }

    /// Returns the floating-point distance.
    pub fn floating_point_distance(&self) -> f64 {
        self.floating_point_distance.get()
    }

    /// Sets the floating-point distance.
    pub fn set_floating_point_distance(&self, distance: f64) {
        self.floating_point_distance.set(distance);
    }

    /// Returns the integer distance.
    pub fn integer_distance(&self) -> i64 {
        self.integer_distance.get()
    }

    /// Sets the integer distance.
    pub fn set_integer_distance(&self, distance: i64) {
        self.integer_distance.set(distance);
    }

    /// Returns the discovery timestamp.
    pub fn entering_time(&self) -> i64 {
        self.entering_time.get()
    }

    /// Sets the discovery timestamp.
    pub fn set_entering_time(&self, time: i64) {
        self.entering_time.set(time);
    }

    /// Returns the finishing timestamp.
    pub fn exiting_time(&self) -> i64 {
        self.exiting_time.get()
    }

    /// Sets the finishing timestamp.
    pub fn set_exiting_time(&self, time: i64) {
        self.exiting_time.set(time);
    }

    /// Sets the predecessor link.
    ///
    /// The link stores the predecessor's label only; it is resolved through the owning graph
    /// and never keeps the predecessor alive.
    pub fn set_previous(&self, previous: Option<L>) {
        *self.previous.borrow_mut() = previous;
    }

    /// Resets every scratch field to its initial value.
    pub fn reset_scratch(&self) {
        self.color.set(NodeColor::White);
        self.floating_point_distance.set(0.0);
        self.integer_distance.set(0);
        self.entering_time.set(0);
        self.exiting_time.set(0);
        self.previous.borrow_mut().take();
        self.priority.set(0.0);
        self.handle.set(None);
    }
}

impl<L: Clone> GraphNode<L> {
    /// Returns the label of the predecessor, if one is set.
    pub fn previous(&self) -> Option<L> {
        self.previous.borrow().clone()
    }
}

impl<L: PartialEq> PartialEq for GraphNode<L> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<L: Eq> Eq for GraphNode<L> {}

impl<L: Hash> Hash for GraphNode<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<L: fmt::Debug> fmt::Debug for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphNode")
            .field("label", &self.label)
            .field("color", &self.color.get())
            .field("distance", &self.floating_point_distance.get())
            .field("previous", &*self.previous.borrow())
            .field("priority", &self.priority.get())
            .field("handle", &self.handle.get())
            .finish()
    }
}

impl<L: fmt::Display> fmt::Display for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node[ {} ]", self.label)
    }
}

impl<L> PriorityQueueElement for GraphNode<L> {
    fn priority(&self) -> f64 {
        self.priority.get()
    }

    fn set_priority(&self, priority: f64) {
        self.priority.set(priority);
    }

    fn handle(&self) -> Option<usize> {
        self.handle.get()
    }

    fn set_handle(&self, handle: Option<usize>) {
        self.handle.set(handle);
    }
}
