//! Unbounded region flood fill.

use tacgrid_core::NodeGraph;

use crate::finder::PathFinder;

impl<N: Copy + Eq + std::hash::Hash> PathFinder<N> {
    /// Collect every accessible node connected to `begin`, including `begin`
    /// itself, with no cost limit.
    ///
    /// Map builders use this to check that two regions connect at all (for
    /// example that every spawn tile can reach every other) before spending
    /// a weighted solve on them. Returns an empty vec if `begin` is not in
    /// the graph.
    pub fn reachable_from<G>(&mut self, graph: &G, begin: N) -> Vec<N>
    where
        G: NodeGraph<NodeId = N>,
    {
        let mut result = Vec::new();
        if !graph.contains(begin) {
            return result;
        }

        self.flood_seen.clear();
        self.flood_stack.clear();
        self.flood_stack.push(begin);
        self.flood_seen.insert(begin);
        result.push(begin);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // Iterative DFS; recursion depth would be the region size.
        while let Some(current) = self.flood_stack.pop() {
            nbuf.clear();
            graph.connections(current, &mut nbuf);
            for &next in nbuf.iter() {
                if !graph.is_accessible(next) {
                    continue;
                }
                if self.flood_seen.insert(next) {
                    self.flood_stack.push(next);
                    result.push(next);
                }
            }
        }
        self.nbuf = nbuf;
        result
    }
}
