//! Uniformly random automated player.

use core::time::Duration;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Coord;
use crate::player::Player;

/// Automated player that fires at a uniformly random cell.
///
/// Already-used cells are not avoided; the controller's retry loop absorbs
/// the resulting rejections.
pub struct RandomPlayer {
    pause: bool,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer { pause: true }
    }

    /// Player without the cosmetic thinking pause, for tests and headless
    /// simulation.
    pub fn headless() -> Self {
        RandomPlayer { pause: false }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Computer"
    }

    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize) -> Coord {
        Coord::new(
            rng.random_range(0..board_size),
            rng.random_range(0..board_size),
        )
    }

    fn premove_delay(&mut self, rng: &mut SmallRng) -> Option<Duration> {
        if self.pause {
            Some(Duration::from_secs(rng.random_range(1..=3)))
        } else {
            None
        }
    }
}
