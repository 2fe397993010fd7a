//! Weighted coin flips for branch placement.
//!
//! A coin draws a uniform integer in `1..=DRAW_RANGE` and fires when the
//! draw is strictly less than the border. A border of 100 therefore
//! misses on a draw of exactly 100, and a border of 0 or 1 never fires.

use rand::Rng;

/// Upper bound of the uniform draw.
pub const DRAW_RANGE: u32 = 100;

/// Source of uniform integer draws.
///
/// Every [`rand::Rng`] is a `DrawSource`; tests can supply a scripted
/// source to force individual coins.
pub trait DrawSource {
    /// Returns a uniform integer in `1..=size`.
    fn draw(&mut self, size: u32) -> u32;
}

impl<R: Rng> DrawSource for R {
    #[inline]
    fn draw(&mut self, size: u32) -> u32 {
        self.random_range(1..=size)
    }
}

/// Converts a percent into an integer border.
///
/// The fraction is truncated and the value is clamped to `0..=DRAW_RANGE`;
/// NaN counts as zero.
pub fn threshold(percent: f32) -> u32 {
    if percent.is_nan() {
        return 0;
    }
    percent.clamp(0.0, DRAW_RANGE as f32) as u32
}

/// Draws once from `src` and fires if the draw is below `border`.
#[inline]
pub fn roll<S: DrawSource + ?Sized>(src: &mut S, size: u32, border: u32) -> bool {
    src.draw(size) < border
}
