use crate::{branch::Branch, types::Point};
use std::collections::VecDeque;

/// Mutable growth structure: committed branches, pending growth points
/// and the node counter.
///
/// Branches are append-only between resets and their order is the draw
/// order. Pending points are consumed front to back, which makes growth
/// breadth-first.
#[derive(Debug, Clone)]
pub struct GrowthState {
    branches: Vec<Branch>,
    pending: VecDeque<Point>,
    node_count: usize,
    node_budget: usize,
}

/// Returns `true` while `node_count` has not gone past `node_budget`.
#[inline]
pub fn within_budget(node_count: usize, node_budget: usize) -> bool {
    node_count <= node_budget
}

impl GrowthState {
    /// Creates a state with `root` registered as the first growth point.
    pub fn new(root: Point, node_budget: usize) -> Self {
        let mut state = Self {
            branches: Vec::new(),
            pending: VecDeque::new(),
            node_count: 0,
            node_budget,
        };
        state.register_node(root);
        state
    }

    /// Discards all growth and starts over from `root`.
    ///
    /// The result is identical to `GrowthState::new(root, budget)`.
    pub fn reset(&mut self, root: Point) {
        self.branches.clear();
        self.pending.clear();
        self.node_count = 0;
        self.register_node(root);
    }

    /// Counts a new growth point and queues it if the budget allows.
    ///
    /// The count is spent either way. Returns whether the point was queued.
    pub fn register_node(&mut self, point: Point) -> bool {
        self.node_count += 1;
        if !within_budget(self.node_count, self.node_budget) {
            return false;
        }
        self.pending.push_back(point);
        true
    }

    pub(crate) fn pop_pending(&mut self) -> Option<Point> {
        self.pending.pop_front()
    }

    /// Appends a branch and returns its index in draw order.
    pub(crate) fn commit(&mut self, branch: Branch) -> usize {
        self.branches.push(branch);
        self.branches.len() - 1
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn pending(&self) -> &VecDeque<Point> {
        &self.pending
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn node_budget(&self) -> usize {
        self.node_budget
    }

    /// `true` once no further growth point can be created.
    pub fn is_budget_spent(&self) -> bool {
        !within_budget(self.node_count + 1, self.node_budget)
    }

    /// `true` when there is nothing left to expand.
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}
