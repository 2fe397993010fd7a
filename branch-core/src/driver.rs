use crate::{
    branch::Branch,
    config::{GrowthConfig, Probabilities},
    dice::DrawSource,
    engine::{self, StepReport},
    state::GrowthState,
    types::Point,
};

/// Owns a growth run and the controls an interactive shell needs.
///
/// Auto-grow is a flag consulted by [`GrowthDriver::tick`]: the caller
/// ticks once per frame and the driver steps once per tick while the flag
/// is set. All mutation happens on the caller's thread; wrap the driver
/// in a mutex if more than one thread must reach it.
#[derive(Debug)]
pub struct GrowthDriver<R> {
    state: GrowthState,
    cfg: GrowthConfig,
    src: R,
    auto_grow: bool,
}

impl<R: DrawSource> GrowthDriver<R> {
    pub fn new(cfg: GrowthConfig, src: R) -> Self {
        Self {
            state: GrowthState::new(cfg.root, cfg.node_budget),
            cfg,
            src,
            auto_grow: false,
        }
    }

    /// Expands one growth point with the current probabilities.
    pub fn do_step(&mut self) -> StepReport {
        engine::step(
            &mut self.state,
            &self.cfg.probabilities,
            self.cfg.step_len,
            &mut self.src,
        )
    }

    /// Steps once if auto-grow is on.
    pub fn tick(&mut self) -> Option<StepReport> {
        if !self.auto_grow {
            return None;
        }
        Some(self.do_step())
    }

    /// Restarts growth from the configured root.
    pub fn do_reset(&mut self) {
        self.do_reset_at(self.cfg.root);
    }

    /// Restarts growth from `root`. Auto-grow keeps its current setting.
    pub fn do_reset_at(&mut self, root: Point) {
        log::info!("reset growth at {root}");
        self.state.reset(root);
    }

    /// Flips auto-grow and returns the new setting.
    pub fn toggle_auto_grow(&mut self) -> bool {
        self.set_auto_grow(!self.auto_grow);
        self.auto_grow
    }

    pub fn set_auto_grow(&mut self, on: bool) {
        if self.auto_grow != on {
            log::info!("auto-grow {}", if on { "on" } else { "off" });
        }
        self.auto_grow = on;
    }

    pub fn is_auto_growing(&self) -> bool {
        self.auto_grow
    }

    pub fn probabilities(&self) -> &Probabilities {
        &self.cfg.probabilities
    }

    /// Live access for sliders; the next step reads the new values.
    pub fn probabilities_mut(&mut self) -> &mut Probabilities {
        &mut self.cfg.probabilities
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.cfg
    }

    pub fn state(&self) -> &GrowthState {
        &self.state
    }

    pub fn branches(&self) -> &[Branch] {
        self.state.branches()
    }

    pub fn node_count(&self) -> usize {
        self.state.node_count()
    }
}
