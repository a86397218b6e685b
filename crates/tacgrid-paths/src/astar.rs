//! A* shortest-path search.

use std::collections::BinaryHeap;

use log::{debug, trace};
use tacgrid_core::NodeGraph;

use crate::finder::{OpenRef, PathFinder, SearchNode};

impl<N: Copy + Eq + std::hash::Hash> PathFinder<N> {
    /// Compute an optimal path from `begin` to `destination`.
    ///
    /// `distance` gives the exact traversal cost between two *connected*
    /// nodes; it is never invoked on any other pair. `heuristic` estimates
    /// the remaining cost to the destination and only steers exploration
    /// order — an inadmissible heuristic can cost optimality but never a
    /// missing result.
    ///
    /// Returns the full node sequence including both endpoints, and `None`
    /// when an endpoint is not in the graph or no accessible route exists.
    /// An unreachable destination is an expected outcome, not a fault.
    ///
    /// `begin == destination` always yields `[begin, destination]`, and with
    /// [`shortcut_direct_connections`](Self::shortcut_direct_connections) a
    /// directly connected destination does too, with no cost evaluation.
    pub fn find_path<G>(
        &mut self,
        graph: &G,
        begin: N,
        destination: N,
        distance: impl Fn(N, N) -> f32,
        heuristic: impl Fn(N, N) -> f32,
    ) -> Option<Vec<N>>
    where
        G: NodeGraph<NodeId = N>,
    {
        if !graph.contains(begin) || !graph.contains(destination) {
            debug!("cannot find a path between nodes outside the graph");
            return None;
        }

        if begin == destination {
            return Some(vec![begin, destination]);
        }
        if self.shortcut_direct_connections {
            self.nbuf.clear();
            graph.connections(begin, &mut self.nbuf);
            if self.nbuf.contains(&destination) {
                trace!("direct connection, skipping search");
                return Some(vec![begin, destination]);
            }
        }

        self.nodes.clear();
        let start = SearchNode {
            local: 0.0,
            global: heuristic(begin, destination),
            parent: None,
            visited: false,
        };
        self.nodes.insert(begin, start);

        let mut open: BinaryHeap<OpenRef<N>> = BinaryHeap::new();
        open.push(OpenRef {
            node: begin,
            global: start.global,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(OpenRef { node: current, .. }) = open.pop() {
            let current_local = {
                let Some(state) = self.nodes.get_mut(&current) else {
                    continue;
                };
                // Lazy deletion: stale heap entries for finalized nodes.
                if state.visited {
                    continue;
                }
                state.visited = true;
                state.local
            };

            if current == destination {
                found = true;
                break;
            }

            nbuf.clear();
            graph.connections(current, &mut nbuf);

            for &next in nbuf.iter() {
                // Inaccessible nodes never become waypoints.
                if !graph.is_accessible(next) {
                    continue;
                }
                let candidate = current_local + distance(current, next);
                let state = self.nodes.entry(next).or_default();
                if candidate < state.local {
                    state.local = candidate;
                    state.global = candidate + heuristic(next, destination);
                    state.parent = Some(current);
                    if !state.visited {
                        open.push(OpenRef {
                            node: next,
                            global: state.global,
                        });
                    }
                }
            }
        }
        self.nbuf = nbuf;

        if !found {
            debug!("path not found");
            return None;
        }

        // Trace parent links back to the start, then reverse.
        let mut path = Vec::new();
        let mut cursor = destination;
        loop {
            path.push(cursor);
            match self.nodes.get(&cursor).and_then(|s| s.parent) {
                Some(prev) => cursor = prev,
                None => break,
            }
        }
        path.reverse();
        trace!(
            "path found: {} steps, cost {}",
            path.len(),
            self.nodes
                .get(&destination)
                .map(|s| s.local)
                .unwrap_or(f32::INFINITY)
        );
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tacgrid_core::{Connectivity, NodeGraph, NodeMap, Point, Terrain, Vec3};

    use crate::distance::euclidean;
    use crate::finder::PathFinder;

    fn grid(w: i32, h: i32) -> NodeMap {
        NodeMap::new(w, h, 1.0, Connectivity::Cardinal)
    }

    fn assert_valid_path(map: &NodeMap, path: &[Point], begin: Point, dest: Point) {
        assert_eq!(*path.first().unwrap(), begin);
        assert_eq!(*path.last().unwrap(), dest);
        let mut buf = Vec::new();
        for pair in path.windows(2) {
            buf.clear();
            map.connections(pair[0], &mut buf);
            assert!(buf.contains(&pair[1]), "{} -> {} not connected", pair[0], pair[1]);
        }
    }

    #[test]
    fn cross_grid_shortest_path() {
        let map = grid(3, 3);
        let mut finder = PathFinder::new();
        let begin = Point::new(0, 0);
        let dest = Point::new(2, 2);
        let path = finder
            .find_path(&map, begin, dest, |_, _| 1.0, |a, b| {
                euclidean(map.position(a), map.position(b))
            })
            .unwrap();
        // Four unit steps, five nodes.
        assert_eq!(path.len(), 5);
        assert_valid_path(&map, &path, begin, dest);
    }

    #[test]
    fn identity_returns_two_node_path() {
        let map = grid(3, 3);
        let mut finder = PathFinder::new();
        let b = Point::new(1, 1);
        let path = finder.find_path(&map, b, b, |_, _| 1.0, |_, _| 0.0).unwrap();
        assert_eq!(path, vec![b, b]);

        // Identity holds with the shortcut disabled too.
        finder.set_shortcut_direct_connections(false);
        let path = finder.find_path(&map, b, b, |_, _| 1.0, |_, _| 0.0).unwrap();
        assert_eq!(path, vec![b, b]);
    }

    #[test]
    fn direct_connection_shortcut_policy() {
        let map = grid(3, 3);
        let begin = Point::new(0, 0);
        let dest = Point::new(1, 0);
        // The direct edge is far more expensive than the detour.
        let cost = |a: Point, b: Point| {
            if (a, b) == (begin, dest) || (a, b) == (dest, begin) {
                100.0
            } else {
                1.0
            }
        };

        let mut finder = PathFinder::new();
        let path = finder.find_path(&map, begin, dest, cost, |_, _| 0.0).unwrap();
        assert_eq!(path, vec![begin, dest]);

        finder.set_shortcut_direct_connections(false);
        let path = finder.find_path(&map, begin, dest, cost, |_, _| 0.0).unwrap();
        // (0,0) -> (0,1) -> (1,1) -> (1,0), cost 3 instead of 100.
        assert_eq!(path.len(), 4);
        assert_valid_path(&map, &path, begin, dest);
    }

    #[test]
    fn repeated_solves_are_idempotent() {
        let mut map = grid(4, 4);
        map.set_accessible(Point::new(1, 1), false);
        map.set_accessible(Point::new(2, 2), false);
        let mut finder = PathFinder::new();
        let begin = Point::new(0, 0);
        let dest = Point::new(3, 3);
        let heuristic =
            |a: Point, b: Point| euclidean(map.position(a), map.position(b));
        let first = finder.find_path(&map, begin, dest, |_, _| 1.0, heuristic);
        let second = finder.find_path(&map, begin, dest, |_, _| 1.0, heuristic);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn blocked_wall_is_not_found() {
        let mut map = grid(3, 3);
        for y in 0..3 {
            map.set_accessible(Point::new(1, y), false);
        }
        let mut finder = PathFinder::new();
        let path = finder.find_path(
            &map,
            Point::new(0, 0),
            Point::new(2, 0),
            |_, _| 1.0,
            |_, _| 0.0,
        );
        assert!(path.is_none());
    }

    #[test]
    fn endpoints_outside_graph_fail() {
        let map = grid(3, 3);
        let mut finder = PathFinder::new();
        let inside = Point::new(1, 1);
        let outside = Point::new(9, 9);
        assert!(finder
            .find_path(&map, outside, inside, |_, _| 1.0, |_, _| 0.0)
            .is_none());
        assert!(finder
            .find_path(&map, inside, outside, |_, _| 1.0, |_, _| 0.0)
            .is_none());
    }

    #[test]
    fn inaccessible_destination_is_not_found() {
        let mut map = grid(4, 1);
        map.set_accessible(Point::new(3, 0), false);
        let mut finder = PathFinder::new();
        let path = finder.find_path(
            &map,
            Point::new(0, 0),
            Point::new(3, 0),
            |_, _| 1.0,
            |_, _| 0.0,
        );
        assert!(path.is_none());
    }

    #[test]
    fn inaccessible_begin_may_still_leave() {
        // A unit standing on a blocked tile can still path off it.
        let mut map = grid(3, 1);
        map.set_accessible(Point::new(0, 0), false);
        let mut finder = PathFinder::new();
        let path = finder
            .find_path(
                &map,
                Point::new(0, 0),
                Point::new(2, 0),
                |_, _| 1.0,
                |_, _| 0.0,
            )
            .unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn terrain_penalties_reroute() {
        let mut map = grid(3, 3);
        map.add_terrain(Point::new(1, 0), Terrain::Hill);
        map.add_terrain(Point::new(1, 1), Terrain::Hill);
        // Stepping onto a hill costs 7; the six-step route around the hills
        // beats the two-step route over them.
        let cost = |_: Point, b: Point| {
            if map.node(b).is_some_and(|n| n.terrain.contains(&Terrain::Hill)) {
                7.0
            } else {
                1.0
            }
        };
        let mut finder = PathFinder::new();
        let path = finder
            .find_path(&map, Point::new(0, 0), Point::new(2, 0), cost, |_, _| 0.0)
            .unwrap();
        assert_eq!(path.len(), 7);
        assert!(!path.contains(&Point::new(1, 0)));
        assert!(!path.contains(&Point::new(1, 1)));
    }

    // Hand-wired graph with u32 node ids, to check the solver is not tied to
    // NodeMap in any way.
    struct ListGraph {
        edges: HashMap<u32, Vec<u32>>,
        weights: HashMap<(u32, u32), f32>,
    }

    impl ListGraph {
        fn new(edges: &[(u32, u32, f32)]) -> Self {
            let mut g = ListGraph {
                edges: HashMap::new(),
                weights: HashMap::new(),
            };
            for &(a, b, w) in edges {
                g.edges.entry(a).or_default().push(b);
                g.edges.entry(b).or_default().push(a);
                g.weights.insert((a, b), w);
                g.weights.insert((b, a), w);
            }
            g
        }
    }

    impl NodeGraph for ListGraph {
        type NodeId = u32;

        fn contains(&self, n: u32) -> bool {
            self.edges.contains_key(&n)
        }

        fn connections(&self, n: u32, buf: &mut Vec<u32>) {
            if let Some(adj) = self.edges.get(&n) {
                buf.extend_from_slice(adj);
            }
        }

        fn is_accessible(&self, _n: u32) -> bool {
            true
        }

        fn position(&self, _n: u32) -> Vec3 {
            Vec3::ZERO
        }
    }

    #[test]
    fn weighted_list_graph_takes_cheap_detour() {
        //    0 --5-- 1
        //    |       |
        //    1       1
        //    |       |
        //    2 --1-- 3
        let g = ListGraph::new(&[(0, 1, 5.0), (0, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)]);
        let mut finder = PathFinder::new();
        // 0 and 1 are directly connected; disable the shortcut to exercise
        // the weighted search.
        finder.set_shortcut_direct_connections(false);
        let w = |a: u32, b: u32| g.weights[&(a, b)];
        let path = finder.find_path(&g, 0, 1, w, |_, _| 0.0).unwrap();
        assert_eq!(path, vec![0, 2, 3, 1]);
    }

    #[test]
    fn disconnected_components_fail() {
        // Two separate components: {0,1} and {2,3}.
        let g = ListGraph::new(&[(0, 1, 1.0), (2, 3, 1.0)]);
        let mut finder = PathFinder::new();
        assert!(finder
            .find_path(&g, 0, 3, |a, b| g.weights[&(a, b)], |_, _| 0.0)
            .is_none());
    }
}
