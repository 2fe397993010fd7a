use branch_core::{
    BranchColor, GrowthConfig, GrowthDriver, GrowthState, Probabilities, dice::DrawSource, engine,
};
use glam::IVec2;

/// Draws the same value every time.
struct Always(u32);

impl DrawSource for Always {
    fn draw(&mut self, _size: u32) -> u32 {
        self.0
    }
}

const ROOT: IVec2 = IVec2::new(0, 400);

#[test]
fn first_step_from_default_root_commits_three_branches() {
    let mut state = GrowthState::new(ROOT, 10_000);
    let probs = Probabilities::uniform(100.0);

    let report = engine::step(&mut state, &probs, 10, &mut Always(1));

    assert_eq!(report.committed.len(), 3);
    assert_eq!(state.node_count(), 4);
    let branches = state.branches();
    assert!(branches.iter().all(|b| b.begin == ROOT));
    assert_eq!(branches[0].end, IVec2::new(10, 390));
    assert_eq!(branches[1].end, IVec2::new(10, 400));
    assert_eq!(branches[2].end, IVec2::new(10, 410));
    assert_eq!(
        state.pending().iter().copied().collect::<Vec<_>>(),
        vec![
            IVec2::new(10, 390),
            IVec2::new(10, 400),
            IVec2::new(10, 410)
        ]
    );
}

#[test]
fn full_border_misses_on_the_top_draw() {
    let mut state = GrowthState::new(ROOT, 10_000);
    let probs = Probabilities::uniform(100.0);

    let report = engine::step(&mut state, &probs, 10, &mut Always(100));

    assert_eq!(report.origin, Some(ROOT));
    assert!(report.committed.is_empty());
    assert!(state.is_exhausted());
    assert_eq!(state.node_count(), 1);
}

#[test]
fn forced_direction_on_fresh_state_always_commits() {
    for (probs, end, color) in [
        (
            Probabilities { down: 100.0, straight: 0.0, up: 0.0 },
            IVec2::new(10, 390),
            BranchColor::Green,
        ),
        (
            Probabilities { down: 0.0, straight: 100.0, up: 0.0 },
            IVec2::new(10, 400),
            BranchColor::Red,
        ),
        (
            Probabilities { down: 0.0, straight: 0.0, up: 100.0 },
            IVec2::new(10, 410),
            BranchColor::Red,
        ),
    ] {
        let mut state = GrowthState::new(ROOT, 10_000);
        engine::step(&mut state, &probs, 10, &mut Always(1));

        assert_eq!(state.branches().len(), 1);
        assert_eq!(state.branches()[0].end, end);
        assert_eq!(state.branches()[0].color, color);
    }
}

#[test]
fn budget_stops_growth_but_steps_keep_working() {
    let budget = 25;
    let mut state = GrowthState::new(ROOT, budget);
    let probs = Probabilities::uniform(100.0);
    let mut src = Always(1);

    for _ in 0..200 {
        engine::step(&mut state, &probs, 10, &mut src);
    }

    assert_eq!(state.branches().len(), budget - 1);
    assert!(state.is_exhausted());
    assert!(state.node_count() > budget);

    let before = state.branches().len();
    let report = engine::step(&mut state, &probs, 10, &mut src);
    assert!(report.is_noop());
    assert_eq!(state.branches().len(), before);
}

#[test]
fn full_growth_fills_a_lattice_without_duplicate_endpoints() {
    let mut state = GrowthState::new(ROOT, 10_000);
    let probs = Probabilities::uniform(100.0);
    let mut src = Always(1);

    // Column k (x = 10k) can hold 2k + 1 points around the root's row.
    let expanded = engine::grow(&mut state, &probs, 10, &mut src, 1 + 3 + 5);
    assert_eq!(expanded, 9);

    let mut ends: Vec<(i32, i32)> = state
        .branches()
        .iter()
        .map(|b| (b.end.x, b.end.y))
        .collect();
    let total = ends.len();
    ends.sort();
    ends.dedup();
    assert_eq!(ends.len(), total);
    assert!(ends.iter().all(|&(x, _)| x <= 40));
}

#[test]
fn each_auto_grow_tick_expands_the_front_point() {
    let mut cfg = GrowthConfig::default();
    cfg.probabilities = Probabilities::uniform(100.0);
    let mut driver = GrowthDriver::new(cfg, Always(1));
    driver.set_auto_grow(true);

    // The root and columns of 3, 5 and 7 points take 16 ticks.
    for _ in 0..16 {
        let front = driver.state().pending().front().copied();
        let pending_before = driver.state().pending().len();
        let branches_before = driver.branches().len();

        let report = driver.tick().unwrap();

        assert_eq!(report.origin, front);
        assert_eq!(
            driver.state().pending().len(),
            pending_before - 1 + report.committed.len()
        );
        assert_eq!(
            driver.branches().len(),
            branches_before + report.committed.len()
        );
        assert!(report.committed.iter().all(|&i| driver.branches()[i].begin == front.unwrap()));
    }

    // Expanding column 3 filled column 4 with 9 points.
    assert_eq!(driver.node_count(), 1 + 3 + 5 + 7 + 9);

    driver.set_auto_grow(false);
    assert!(driver.tick().is_none());
    assert_eq!(driver.node_count(), 1 + 3 + 5 + 7 + 9);

    driver.do_reset();
    assert_eq!(driver.node_count(), 1);
    assert!(driver.branches().is_empty());
}

#[test]
fn driver_runs_with_thread_rng() {
    let mut driver = GrowthDriver::new(GrowthConfig::default(), rand::rng());
    driver.set_auto_grow(true);
    let mut expanded = 0;
    for _ in 0..100 {
        if driver.tick().is_some_and(|r| !r.is_noop()) {
            expanded += 1;
        }
    }
    // Each non-empty tick pops one point; the rest are pending or unused.
    assert_eq!(
        expanded + driver.state().pending().len(),
        driver.node_count()
    );
}
