//! Distance metrics and cost-function helpers.

use tacgrid_core::{Point, Vec3};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line distance between two world positions.
///
/// The usual heuristic for [`find_path`](crate::PathFinder::find_path) over
/// a map whose edge costs are at least the spatial distance they span.
#[inline]
pub fn euclidean(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// A step-cost function charging the same `cost` for every edge.
#[inline]
pub fn uniform_step<N>(cost: f32) -> impl Fn(N, N) -> f32 {
    move |_, _| cost
}
