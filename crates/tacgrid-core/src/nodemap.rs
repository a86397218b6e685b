//! [`NodeMap`] — a rectangular grid of map nodes implementing [`NodeGraph`].

use std::collections::HashSet;

use crate::geom::{Point, Vec3};
use crate::graph::NodeGraph;
use crate::terrain::Terrain;

/// Adjacency rule used when wiring node connections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Four cardinal neighbours.
    #[default]
    Cardinal,
    /// Cardinal plus diagonal neighbours.
    Eight,
}

/// A single map cell: world position, accessibility, terrain features.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapNode {
    pub position: Vec3,
    pub accessible: bool,
    pub terrain: HashSet<Terrain>,
}

/// A width × height grid of [`MapNode`]s in row-major storage.
///
/// Node ids are [`Point`] cell indices; connections are derived from grid
/// adjacency and fixed after construction. Out-of-bounds points are simply
/// not contained.
#[derive(Clone, Debug)]
pub struct NodeMap {
    nodes: Vec<MapNode>,
    width: usize,
    height: usize,
    connectivity: Connectivity,
}

impl NodeMap {
    /// Create a map of the given dimensions with every node accessible and
    /// terrain-free, cells `cell_size` apart on the X/Z ground plane.
    pub fn new(width: i32, height: i32, cell_size: f32, connectivity: Connectivity) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        let mut nodes = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                nodes.push(MapNode {
                    position: Vec3::new(x as f32 * cell_size, 0.0, y as f32 * cell_size),
                    accessible: true,
                    terrain: HashSet::new(),
                });
            }
        }
        Self {
            nodes,
            width: w,
            height: h,
            connectivity,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// The adjacency rule this map was built with.
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    /// The node at `p`, or `None` if out of bounds.
    pub fn node(&self, p: Point) -> Option<&MapNode> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`.
    pub fn node_mut(&mut self, p: Point) -> Option<&mut MapNode> {
        self.index(p).map(|i| &mut self.nodes[i])
    }

    /// Mark the node at `p` accessible or not. No-op if out of bounds.
    pub fn set_accessible(&mut self, p: Point, accessible: bool) {
        if let Some(n) = self.node_mut(p) {
            n.accessible = accessible;
        }
    }

    /// Add a terrain feature to the node at `p`. No-op if out of bounds.
    pub fn add_terrain(&mut self, p: Point, terrain: Terrain) {
        if let Some(n) = self.node_mut(p) {
            n.terrain.insert(terrain);
        }
    }

    /// Set the height (world Y) of the node at `p`. No-op if out of bounds.
    pub fn set_height(&mut self, p: Point, height: f32) {
        if let Some(n) = self.node_mut(p) {
            n.position.y = height;
        }
    }

    /// Row-major iterator over all cell indices.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.width as i32;
        (0..self.nodes.len() as i32).map(move |i| Point::new(i % w, i / w))
    }
}

impl NodeGraph for NodeMap {
    type NodeId = Point;

    #[inline]
    fn contains(&self, n: Point) -> bool {
        self.index(n).is_some()
    }

    fn connections(&self, n: Point, buf: &mut Vec<Point>) {
        if !self.contains(n) {
            return;
        }
        match self.connectivity {
            Connectivity::Cardinal => {
                for c in n.neighbors_4() {
                    if self.contains(c) {
                        buf.push(c);
                    }
                }
            }
            Connectivity::Eight => {
                for c in n.neighbors_8() {
                    if self.contains(c) {
                        buf.push(c);
                    }
                }
            }
        }
    }

    #[inline]
    fn is_accessible(&self, n: Point) -> bool {
        self.node(n).is_some_and(|node| node.accessible)
    }

    #[inline]
    fn position(&self, n: Point) -> Vec3 {
        self.node(n).map(|node| node.position).unwrap_or(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_containment() {
        let map = NodeMap::new(4, 3, 1.0, Connectivity::Cardinal);
        assert!(map.contains(Point::new(0, 0)));
        assert!(map.contains(Point::new(3, 2)));
        assert!(!map.contains(Point::new(4, 0)));
        assert!(!map.contains(Point::new(0, -1)));
        assert!(map.node(Point::new(10, 10)).is_none());
    }

    #[test]
    fn cardinal_connection_counts() {
        let map = NodeMap::new(3, 3, 1.0, Connectivity::Cardinal);
        let mut buf = Vec::new();
        map.connections(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);
        buf.clear();
        map.connections(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 2);
        buf.clear();
        map.connections(Point::new(1, 0), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn eight_way_connection_counts() {
        let map = NodeMap::new(3, 3, 1.0, Connectivity::Eight);
        let mut buf = Vec::new();
        map.connections(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 8);
        buf.clear();
        map.connections(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn accessibility_and_terrain() {
        let mut map = NodeMap::new(3, 3, 1.0, Connectivity::Cardinal);
        let p = Point::new(1, 1);
        assert!(map.is_accessible(p));
        map.set_accessible(p, false);
        map.add_terrain(p, Terrain::Boulder);
        assert!(!map.is_accessible(p));
        assert!(map.node(p).unwrap().terrain.contains(&Terrain::Boulder));
        // Out of bounds is never accessible and mutations are no-ops.
        assert!(!map.is_accessible(Point::new(-1, 0)));
        map.set_accessible(Point::new(99, 99), false);
    }

    #[test]
    fn positions_follow_cell_size() {
        let mut map = NodeMap::new(2, 2, 2.0, Connectivity::Cardinal);
        assert_eq!(map.position(Point::new(1, 1)), Vec3::new(2.0, 0.0, 2.0));
        map.set_height(Point::new(1, 1), 5.0);
        assert_eq!(map.position(Point::new(1, 1)).y, 5.0);
    }

    #[test]
    fn points_iterates_row_major() {
        let map = NodeMap::new(2, 2, 1.0, Connectivity::Cardinal);
        let pts: Vec<Point> = map.points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
            ]
        );
    }
}
