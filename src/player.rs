//! Player trait: the strategies the match controller drives.

use core::time::Duration;

use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord};

/// Interface implemented by different player types.
///
/// Players are pure strategies: the match controller owns both boards,
/// resolves the chosen shots and feeds rejections back through the hooks.
pub trait Player {
    /// Name used in announcements.
    fn name(&self) -> &str;

    /// Choose the next target on an opponent board of the given size.
    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize) -> Coord;

    /// Cosmetic pause taken before this player's move is announced.
    fn premove_delay(&mut self, _rng: &mut SmallRng) -> Option<Duration> {
        None
    }

    /// Inform the player that its chosen shot was rejected.
    fn handle_invalid_shot(&mut self, _coord: Coord, _err: &BoardError) {}
}
