use crate::{
    error::{GrowthError, GrowthResult},
    types::{Direction, Point},
};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Branching probabilities in percent, one per direction.
///
/// Values are read fresh on every step, so a UI may edit them live.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probabilities {
    pub down: f32,
    pub straight: f32,
    pub up: f32,
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            down: 20.0,
            straight: 100.0,
            up: 20.0,
        }
    }
}

impl Probabilities {
    pub fn uniform(percent: f32) -> Self {
        Self {
            down: percent,
            straight: percent,
            up: percent,
        }
    }

    pub fn get(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Down => self.down,
            Direction::Straight => self.straight,
            Direction::Up => self.up,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut f32 {
        match direction {
            Direction::Down => &mut self.down,
            Direction::Straight => &mut self.straight,
            Direction::Up => &mut self.up,
        }
    }

    pub fn validate(&self) -> GrowthResult<()> {
        for direction in Direction::ALL {
            let p = self.get(direction);
            if !p.is_finite() || !(0.0..=100.0).contains(&p) {
                return Err(GrowthError::InvalidConfig(format!(
                    "{direction:?} probability must be in [0, 100], got {p}"
                )));
            }
        }
        Ok(())
    }
}

/// Parameters of a growth run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Where the first growth point is placed, on start and on reset.
    pub root: Point,
    /// Length of one branch along x, and of the vertical offset.
    pub step_len: i32,
    /// Growth points beyond this count are not created.
    pub node_budget: usize,
    pub probabilities: Probabilities,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            root: IVec2::new(0, 400),
            step_len: 10,
            node_budget: 10_000,
            probabilities: Probabilities::default(),
        }
    }
}

impl GrowthConfig {
    pub fn validate(&self) -> GrowthResult<()> {
        if self.step_len <= 0 {
            return Err(GrowthError::InvalidConfig(format!(
                "step_len must be > 0, got {}",
                self.step_len
            )));
        }
        self.probabilities.validate()
    }

    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> GrowthResult<Self> {
        let cfg: GrowthConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
