use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every error is raised synchronously at the point where a precondition is violated and is
/// propagated unchanged to the caller. The library never retries or repairs a failed operation.
///
/// # Error Categories
///
/// ## Invalid Arguments
/// - [`Error::InvalidArgument`] - Graph or algorithm preconditions violated (wrong directedness,
///   empty graph, unweighted or negative edge, node not present, ...)
///
/// ## Lookup Failures
/// - [`Error::IndexOutOfRange`] - Node index outside `[0, node_count - 1]`
/// - [`Error::NotFound`] - Element absent from a priority queue
/// - [`Error::EmptyQueue`] - Minimum requested from an empty priority queue
///
/// ## Capability Errors
/// - [`Error::Unsupported`] - Operation not offered by the graph representation
///
/// ## State Errors
/// - [`Error::InvalidState`] - Result requested before the required computation
/// - [`Error::NegativeCycle`] - A negative-weight cycle was discovered during computation
///
/// # Examples
///
/// ```rust
/// use graphalgos::{Error, graph::{AdjacencyListUndirectedGraph, Graph, GraphNode}};
///
/// let mut graph = AdjacencyListUndirectedGraph::new();
/// graph.add_node(GraphNode::new("a"));
///
/// match graph.node_index_of(&"a") {
///     Err(Error::Unsupported(what)) => println!("not offered: {what}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(index) => println!("index {index}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A graph or algorithm precondition was violated.
    ///
    /// Covers wrong directedness, empty graphs, unweighted or negatively weighted edges where
    /// they are forbidden, and references to nodes that are not part of the graph.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// A node index outside the valid range was used.
    ///
    /// # Fields
    ///
    /// * `index` - The offending index
    /// * `len` - The number of nodes in the graph
    #[error("Index {index} is out of range for a graph with {len} nodes")]
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
        /// The number of indexable nodes
        len: usize,
    },

    /// The requested element is not present.
    #[error("Element not found - {0}")]
    NotFound(String),

    /// The priority queue holds no elements.
    #[error("The priority queue is empty")]
    EmptyQueue,

    /// The graph representation does not offer this capability.
    ///
    /// Callers are expected to treat this as a first-class outcome: the adjacency-list graph
    /// does not offer index addressing, and undirected graphs have no notion of ingoing edges.
    #[error("Operation not supported - {0}")]
    Unsupported(&'static str),

    /// An operation was requested in a state that does not allow it.
    ///
    /// Typically a result accessor called before the compute step ran.
    #[error("Invalid state - {0}")]
    InvalidState(String),

    /// A negative-weight cycle was found while relaxing edges.
    ///
    /// The computation is abandoned and its results are not committed.
    #[error("The graph contains a negative-weight cycle")]
    NegativeCycle,
}

impl Error {
    /// Returns `true` if this error signals a state violation.
    ///
    /// Both [`Error::InvalidState`] and [`Error::NegativeCycle`] are state errors: the former
    /// because a prerequisite computation is missing, the latter because the computation could
    /// not reach a valid final state.
    #[must_use]
    pub fn is_state_error(&self) -> bool {
        matches!(self, Error::InvalidState(_) | Error::NegativeCycle)
    }
}

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
