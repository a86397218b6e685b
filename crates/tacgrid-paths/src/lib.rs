//! Pathfinding and reachability solvers for tactics grids.
//!
//! This crate provides the movement queries a turn-based tactics game needs,
//! over any graph implementing [`NodeGraph`]:
//!
//! - **A\*** shortest-path search ([`PathFinder::find_path`])
//! - **Budgeted reachability** — every node within a movement-cost budget
//!   ([`PathFinder::reachable_set`])
//! - **Region flood fill** — every accessible node connected to a start
//!   ([`PathFinder::reachable_from`])
//!
//! All queries go through [`PathFinder`], which owns and reuses the search
//! scratch state (costs, parent links, visited flags, work queues) keyed by
//! node id. Graphs are only ever read, so one graph can serve any number of
//! `PathFinder`s.
//!
//! Traversal costs are not part of the graph: each query takes closures that
//! turn a pair of connected nodes into a cost, so the same map can be
//! searched under different movement rules (per-unit terrain penalties and
//! the like) without rebuilding anything.
//!
//! ```
//! use tacgrid_core::{Connectivity, NodeGraph, NodeMap, Point};
//! use tacgrid_paths::{PathFinder, euclidean};
//!
//! let map = NodeMap::new(8, 8, 1.0, Connectivity::Cardinal);
//! let mut finder = PathFinder::new();
//! let path = finder.find_path(
//!     &map,
//!     Point::new(0, 0),
//!     Point::new(7, 7),
//!     |_, _| 1.0,
//!     |a, b| euclidean(map.position(a), map.position(b)),
//! );
//! assert_eq!(path.unwrap().len(), 15);
//! ```

mod astar;
mod distance;
mod finder;
mod flood;
mod range;

pub use distance::{chebyshev, euclidean, manhattan, uniform_step};
pub use finder::PathFinder;
pub use tacgrid_core::NodeGraph;
