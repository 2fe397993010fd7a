use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A 2D coordinate on the growth plane.
///
/// Growth happens on an integer lattice so that points reached along
/// different paths compare equal. Renderers convert with `as_vec2`.
pub type Point = IVec2;

/// One of the three fixed directions a growth point may branch in.
///
/// Directions are evaluated in declaration order within a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Straight,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Down, Direction::Straight, Direction::Up];

    /// Vertical offset applied to the straight endpoint, in units of the step length.
    pub fn offset(self, step_len: i32) -> IVec2 {
        match self {
            Direction::Down => IVec2::new(0, -step_len),
            Direction::Straight => IVec2::ZERO,
            Direction::Up => IVec2::new(0, step_len),
        }
    }

    /// Display tag attached to branches grown in this direction.
    ///
    /// `Up` shares the straight color.
    pub fn color(self) -> BranchColor {
        match self {
            Direction::Down => BranchColor::Green,
            Direction::Straight | Direction::Up => BranchColor::Red,
        }
    }
}

/// Color tag carried by a committed branch. Purely for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchColor {
    Green,
    Red,
}
