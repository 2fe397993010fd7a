//! Breadth-first branch growth.
//!
//! One call to [`step`] expands one pending growth point:
//! 1. Dequeue the front point and build the straight template branch
//!    one step along +x.
//! 2. For `Down`, `Straight` and `Up`, in that order, flip a weighted
//!    coin. A fired coin proposes the template shifted by the direction
//!    offset.
//! 3. A proposal whose endpoint lands on the begin or end of any branch
//!    committed so far (including earlier proposals of the same step) is
//!    rejected.
//! 4. An accepted proposal spends one node. Within budget it is
//!    committed and its endpoint becomes a new pending growth point.

use crate::{
    branch::Branch,
    config::Probabilities,
    dice::{self, DRAW_RANGE, DrawSource},
    state::GrowthState,
    types::{Direction, Point},
};

/// What a single [`step`] did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// The growth point that was expanded, or `None` if the queue was empty.
    pub origin: Option<Point>,
    /// Indices into [`GrowthState::branches`] committed by this step.
    pub committed: Vec<usize>,
    /// Fired candidates rejected because their endpoint was taken.
    pub collisions: usize,
    /// Accepted candidates dropped because the node budget was spent.
    pub over_budget: usize,
}

impl StepReport {
    pub fn is_noop(&self) -> bool {
        self.origin.is_none()
    }
}

/// Expands the front growth point of `state`.
///
/// An empty queue is a no-op. `probabilities` are percents and are
/// clamped into `[0, 100]` before use.
pub fn step<S: DrawSource + ?Sized>(
    state: &mut GrowthState,
    probabilities: &Probabilities,
    step_len: i32,
    src: &mut S,
) -> StepReport {
    let Some(origin) = state.pop_pending() else {
        log::trace!("step on empty queue");
        return StepReport::default();
    };

    let mut report = StepReport {
        origin: Some(origin),
        ..StepReport::default()
    };
    let base = Branch::base(origin, step_len);

    for direction in Direction::ALL {
        let border = dice::threshold(probabilities.get(direction));
        if !dice::roll(src, DRAW_RANGE, border) {
            continue;
        }

        let candidate = base.toward(direction, step_len);
        if candidate.collides_with_any(state.branches()) {
            log::trace!("{direction:?} from {origin} collides at {}", candidate.end);
            report.collisions += 1;
            continue;
        }

        if state.register_node(candidate.end) {
            report.committed.push(state.commit(candidate));
        } else {
            report.over_budget += 1;
        }
    }

    log::debug!(
        "grew {} from {origin} ({} collisions, {} pending, {} nodes)",
        report.committed.len(),
        report.collisions,
        state.pending().len(),
        state.node_count()
    );
    if report.over_budget > 0 {
        log::warn!(
            "node budget {} spent; dropped {} branch(es) at {origin}",
            state.node_budget(),
            report.over_budget
        );
    }

    report
}

/// Runs up to `steps` steps, stopping early once the queue is empty.
///
/// Returns the number of steps that expanded a growth point.
pub fn grow<S: DrawSource + ?Sized>(
    state: &mut GrowthState,
    probabilities: &Probabilities,
    step_len: i32,
    src: &mut S,
    steps: usize,
) -> usize {
    let mut expanded = 0;
    for _ in 0..steps {
        if step(state, probabilities, step_len, &mut *src).is_noop() {
            break;
        }
        expanded += 1;
    }
    expanded
}
