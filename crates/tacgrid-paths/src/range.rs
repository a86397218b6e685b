//! Budgeted reachability (movement range) queries.

use log::trace;
use tacgrid_core::NodeGraph;

use crate::finder::PathFinder;

impl<N: Copy + Eq + std::hash::Hash> PathFinder<N> {
    /// Collect every node whose minimum travel cost from `begin`, through
    /// accessible nodes only, is **strictly less** than `budget`.
    ///
    /// `begin` itself is excluded from the result; its own accessibility is
    /// not checked, so a unit standing on a blocked tile still gets a range.
    /// A `budget <= 0` (or a `begin` outside the graph) yields an empty set
    /// without touching the graph. Result order is unspecified; membership
    /// is monotonic in `budget` and exact for the supplied cost metric.
    ///
    /// This is a relaxation sweep over a FIFO queue rather than a priority
    /// search: a node re-enters the queue whenever its best known cost
    /// improves while still under budget, so over-budget first contacts do
    /// not hide a cheaper route found later.
    ///
    /// The returned slice is owned by the finder and valid until the next
    /// range query; per-node costs stay queryable through
    /// [`range_cost_at`](Self::range_cost_at).
    pub fn reachable_set<G>(
        &mut self,
        graph: &G,
        begin: N,
        budget: f32,
        step_cost: impl Fn(N, N) -> f32,
    ) -> &[N]
    where
        G: NodeGraph<NodeId = N>,
    {
        self.range_results.clear();
        self.range_cost.clear();
        if budget <= 0.0 || !graph.contains(begin) {
            return &self.range_results;
        }

        self.range_queue.clear();
        self.range_pending.clear();
        self.range_cost.insert(begin, 0.0);
        self.range_queue.push_back(begin);
        self.range_pending.insert(begin);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.range_queue.pop_front() {
            self.range_pending.remove(&current);
            let Some(&current_cost) = self.range_cost.get(&current) else {
                continue;
            };

            nbuf.clear();
            graph.connections(current, &mut nbuf);

            for &next in nbuf.iter() {
                if !graph.is_accessible(next) {
                    continue;
                }
                let candidate = step_cost(current, next) + current_cost;
                let known = self.range_cost.get(&next).copied().unwrap_or(f32::INFINITY);
                if candidate < known {
                    // Record improvements past the budget too: a later,
                    // cheaper route may still bring the node under it.
                    self.range_cost.insert(next, candidate);
                    if candidate < budget && self.range_pending.insert(next) {
                        self.range_queue.push_back(next);
                    }
                }
            }
        }
        self.nbuf = nbuf;

        for (&n, &cost) in self.range_cost.iter() {
            if n != begin && cost < budget {
                self.range_results.push(n);
            }
        }
        trace!(
            "range solve: {} nodes within budget {}",
            self.range_results.len(),
            budget
        );
        &self.range_results
    }
}
