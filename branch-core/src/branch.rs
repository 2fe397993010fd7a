use crate::types::{BranchColor, Direction, Point};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A committed line segment from `begin` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub begin: Point,
    pub end: Point,
    pub color: BranchColor,
}

impl Branch {
    /// The straight template for a growth point: one step along +x.
    ///
    /// Coordinates saturate at the edge of the `i32` range.
    pub fn base(origin: Point, step_len: i32) -> Self {
        Self {
            begin: origin,
            end: origin.saturating_add(IVec2::new(step_len, 0)),
            color: Direction::Straight.color(),
        }
    }

    /// Derives the candidate for `direction` from a base branch.
    pub fn toward(&self, direction: Direction, step_len: i32) -> Self {
        Self {
            begin: self.begin,
            end: self.end.saturating_add(direction.offset(step_len)),
            color: direction.color(),
        }
    }

    /// Returns `true` if this branch's endpoint lands on either end of `other`.
    ///
    /// Only endpoints are compared; crossing segments do not collide.
    #[inline]
    pub fn collides_with(&self, other: &Branch) -> bool {
        self.end == other.end || self.end == other.begin
    }

    pub fn collides_with_any(&self, branches: &[Branch]) -> bool {
        branches.iter().any(|b| self.collides_with(b))
    }
}
