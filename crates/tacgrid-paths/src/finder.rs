//! [`PathFinder`] — solver-owned search state.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Internal per-node search state
// ---------------------------------------------------------------------------

/// A* scratch for one node. `local` is the best known cost from the start,
/// `global` adds the heuristic estimate to the destination.
#[derive(Clone, Copy)]
pub(crate) struct SearchNode<N> {
    pub(crate) local: f32,
    pub(crate) global: f32,
    pub(crate) parent: Option<N>,
    pub(crate) visited: bool,
}

impl<N> Default for SearchNode<N> {
    fn default() -> Self {
        Self {
            local: f32::INFINITY,
            global: f32::INFINITY,
            parent: None,
            visited: false,
        }
    }
}

/// Open-set entry, ordered by `global` for use in `BinaryHeap`.
///
/// Ordering ignores the node id entirely; which of two equal-`global`
/// entries pops first is unspecified.
pub(crate) struct OpenRef<N> {
    pub(crate) node: N,
    pub(crate) global: f32,
}

impl<N> PartialEq for OpenRef<N> {
    fn eq(&self, other: &Self) -> bool {
        self.global.total_cmp(&other.global).is_eq()
    }
}

impl<N> Eq for OpenRef<N> {}

impl<N> Ord for OpenRef<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest global first.
        other.global.total_cmp(&self.global)
    }
}

impl<N> PartialOrd for OpenRef<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for path and range queries over a node graph.
///
/// `PathFinder` owns all search scratch (cost maps, parent links, work
/// queues, neighbor buffers) keyed by node id, so repeated queries reuse
/// their allocations and the graph itself is never written to. Taking
/// `&mut self` per query makes overlapping solves on one finder a compile
/// error; give each concurrent caller its own `PathFinder`.
pub struct PathFinder<N> {
    pub(crate) shortcut_direct_connections: bool,
    // A* scratch
    pub(crate) nodes: HashMap<N, SearchNode<N>>,
    // Range-solve scratch and cached results
    pub(crate) range_cost: HashMap<N, f32>,
    pub(crate) range_queue: VecDeque<N>,
    pub(crate) range_pending: HashSet<N>,
    pub(crate) range_results: Vec<N>,
    // Flood-fill scratch
    pub(crate) flood_stack: Vec<N>,
    pub(crate) flood_seen: HashSet<N>,
    // Shared neighbor buffer
    pub(crate) nbuf: Vec<N>,
}

impl<N: Copy + Eq + Hash> PathFinder<N> {
    /// Create a finder with default policy (direct-connection shortcut on).
    pub fn new() -> Self {
        Self {
            shortcut_direct_connections: true,
            nodes: HashMap::new(),
            range_cost: HashMap::new(),
            range_queue: VecDeque::new(),
            range_pending: HashSet::new(),
            range_results: Vec::new(),
            flood_stack: Vec::new(),
            flood_seen: HashSet::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Whether [`find_path`](Self::find_path) may return `[begin, dest]`
    /// immediately when the destination is a direct connection of the start.
    #[inline]
    pub fn shortcut_direct_connections(&self) -> bool {
        self.shortcut_direct_connections
    }

    /// Enable or disable the direct-connection shortcut (default: enabled).
    ///
    /// With the shortcut on, a directly connected destination is returned
    /// without any cost evaluation, so a very expensive direct edge is still
    /// reported even when a cheaper detour exists. Turn it off to always run
    /// the full search.
    pub fn set_shortcut_direct_connections(&mut self, enabled: bool) {
        self.shortcut_direct_connections = enabled;
    }

    /// Cost recorded for `n` by the last [`reachable_set`](Self::reachable_set)
    /// call, or `None` if the node was never reached.
    ///
    /// Only costs strictly below that call's budget are guaranteed minimal;
    /// larger recorded costs are upper bounds from paths that were cut off.
    pub fn range_cost_at(&self, n: N) -> Option<f32> {
        self.range_cost.get(&n).copied()
    }
}

impl<N: Copy + Eq + Hash> Default for PathFinder<N> {
    fn default() -> Self {
        Self::new()
    }
}
