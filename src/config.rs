//! Configuration for the shortest-path computers.
//!
//! This module provides [`ShortestPathConfig`], which controls optional behaviour of
//! [`DijkstraShortestPathComputer`](crate::graph::algorithms::DijkstraShortestPathComputer),
//! [`BellmanFordShortestPathComputer`](crate::graph::algorithms::BellmanFordShortestPathComputer)
//! and [`FloydWarshallAllPairsShortestPathComputer`](crate::graph::algorithms::FloydWarshallAllPairsShortestPathComputer).

/// Configuration for the shortest-path computers.
///
/// The defaults reproduce the textbook algorithms exactly; the presets are shortcuts for
/// the common combinations.
///
/// # Examples
///
/// ```rust
/// use graphalgos::ShortestPathConfig;
///
/// let strict = ShortestPathConfig::default();
/// assert!(!strict.early_termination);
///
/// let fast = ShortestPathConfig::fast();
/// assert!(fast.early_termination);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    /// Stop Bellman-Ford relaxation as soon as a full pass over the edges relaxes nothing
    /// (default: false).
    ///
    /// The final negative-cycle scan always runs, so detection is unaffected.
    pub early_termination: bool,

    /// Emit a `trace` event for every successful relaxation (default: false).
    pub trace_relaxations: bool,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ShortestPathConfig {
    /// Exactly `n - 1` Bellman-Ford passes, no relaxation tracing.
    #[must_use]
    pub const fn strict() -> Self {
        ShortestPathConfig {
            early_termination: false,
            trace_relaxations: false,
        }
    }

    /// Bellman-Ford stops once the distances are stable.
    #[must_use]
    pub const fn fast() -> Self {
        ShortestPathConfig {
            early_termination: true,
            trace_relaxations: false,
        }
    }

    /// Returns a copy of this configuration with relaxation tracing switched on or off.
    #[must_use]
    pub const fn with_trace_relaxations(mut self, enabled: bool) -> Self {
        self.trace_relaxations = enabled;
        self
    }
}
