//! **tacgrid-core** — Node graph and map types for tactics-grid pathfinding.
//!
//! This crate provides the foundational types used across the *tacgrid*
//! workspace: geometry primitives, terrain classification, the [`NodeGraph`]
//! capability trait that the solvers in `tacgrid-paths` are generic over, and
//! [`NodeMap`], a concrete rectangular implementation of that trait.
//!
//! The graph side of the contract is deliberately small: a graph exposes node
//! identity, adjacency, accessibility, and a world position. All search state
//! is owned by the solver, never by the graph, so a graph can be shared
//! read-only between independent queries.

pub mod geom;
pub mod graph;
pub mod nodemap;
pub mod terrain;

pub use geom::{Point, Vec3};
pub use graph::NodeGraph;
pub use nodemap::{Connectivity, MapNode, NodeMap};
pub use terrain::Terrain;
