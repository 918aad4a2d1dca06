//! Supporting data structures used by the graph algorithms.
//!
//! - [`heap`] - Handle-based binary min-heap with decrease-priority

pub mod heap;
