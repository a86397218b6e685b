//! The [`NodeGraph`] capability trait.

use std::hash::Hash;

use crate::geom::Vec3;

/// Read-only view of a weighted, connected node graph.
///
/// Any map representation (rectangular grid, hand-wired tile set, ...) can be
/// searched by the solvers in `tacgrid-paths` by implementing this trait. The
/// graph only reports topology; traversal costs come from caller-supplied
/// closures, and all search scratch state lives inside the solver, keyed by
/// [`NodeId`](NodeGraph::NodeId). A solve therefore never mutates the graph.
pub trait NodeGraph {
    /// Node identity. Cheap to copy, hashable, stable for the graph's
    /// lifetime.
    type NodeId: Copy + Eq + Hash;

    /// Whether `n` is a node of this graph. Solvers treat an absent endpoint
    /// as "no result".
    fn contains(&self, n: Self::NodeId) -> bool;

    /// Append the connections of `n` into `buf`. The caller clears `buf`
    /// before calling. Order is the graph's own and is preserved.
    fn connections(&self, n: Self::NodeId, buf: &mut Vec<Self::NodeId>);

    /// Whether `n` may be entered or used as a waypoint. Inaccessible nodes
    /// are never expanded, but the start of a solve is exempt from this
    /// check.
    fn is_accessible(&self, n: Self::NodeId) -> bool;

    /// World position of `n`, for heuristic and distance functions only.
    fn position(&self, n: Self::NodeId) -> Vec3;
}
