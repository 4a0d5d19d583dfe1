//! Randomized fleet layout generation.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{FLEET, MAX_LAYOUT_ATTEMPTS, PLACEMENT_BUDGET};
use crate::ship::{Orientation, Ship};

/// Attempt a full fleet layout on a fresh board.
///
/// Anchors are sampled from the inclusive range `[0, size]`; the one-past
/// anchor is rejected by `add_ship` like any other invalid cell. The whole
/// fleet shares one attempt budget. `None` means the budget ran out and the
/// caller should retry with a fresh board.
pub fn try_fleet_layout<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Option<Board> {
    let mut board = Board::new(size);
    let mut attempts = 0usize;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_BUDGET {
                log::debug!("fleet layout abandoned after {} attempts", attempts - 1);
                return None;
            }
            let anchor = Coord::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.add_ship(Ship::new(anchor, length, orientation)).is_ok() {
                break;
            }
        }
    }
    log::debug!("fleet layout found after {} attempts", attempts);
    board.begin();
    Some(board)
}

/// Generate a playable board, retrying fresh layouts a bounded number of
/// times before reporting `PlacementExhausted`.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Board, BoardError> {
    for _ in 0..MAX_LAYOUT_ATTEMPTS {
        if let Some(board) = try_fleet_layout(rng, size) {
            return Ok(board);
        }
    }
    Err(BoardError::PlacementExhausted)
}
