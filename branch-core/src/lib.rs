//! Probabilistic 2-D branching growth.
//!
//! Main components:
//! - [`state`] — committed branches, pending growth points, node budget.
//! - [`engine`] — the breadth-first step that places new branches.
//! - [`driver`] — step / reset / auto-grow controls for an interactive shell.
//! - [`config`] — probabilities, step length, budget and root.
//! - [`dice`] — weighted coin flips over an injectable random source.
//! - [`branch`] — branch segments and the endpoint collision rule.
//! - [`types`] — points, directions and color tags.
//! - [`error`] — configuration errors.

pub mod branch;
pub mod config;
pub mod dice;
pub mod driver;
pub mod engine;
pub mod error;
pub mod state;
pub mod types;

pub use branch::Branch;
pub use config::{GrowthConfig, Probabilities};
pub use driver::GrowthDriver;
pub use engine::StepReport;
pub use error::{GrowthError, GrowthResult};
pub use state::GrowthState;
pub use types::{BranchColor, Direction, Point};
