//! Straight-line ships and their hit accounting.

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight run of cells with a health counter.
///
/// The anchor is the topmost/leftmost cell; the remaining cells extend along
/// the orientation axis. Health starts at the ship's length and is only ever
/// decremented, by the owning board, on confirmed hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Coord,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    pub fn new(anchor: Coord, length: usize, orientation: Orientation) -> Self {
        Ship {
            anchor,
            length,
            orientation,
            health: length,
        }
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells occupied by the ship, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = self.anchor;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(row, col + i),
            Orientation::Vertical => Coord::new(row + i, col),
        })
    }

    /// Whether the ship occupies the given cell.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record a confirmed hit. Health never goes below zero.
    pub fn register_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.health
    }

    /// All segments hit. One-directional: health never recovers.
    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }
}
