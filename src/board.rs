//! Board state: placement rules, shot resolution, phase bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::mask::Mask;
use crate::ship::Ship;

/// Offsets covering a cell and its 8 neighbors.
const NEAR: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One player's square board.
///
/// The mark masks (`ship_map`, `hits`, `misses`, `ring`) mirror the
/// authoritative ship list for rendering. `busy` is the set of coordinates
/// unavailable for placement or, once play begins, for re-targeting; it is
/// phase-overloaded and reset wholesale by [`Board::begin`].
pub struct Board {
    size: usize,
    concealed: bool,
    ships: Vec<Ship>,
    sunk: usize,
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
    ring: Mask,
    busy: Mask,
}

impl Board {
    /// Create an empty board with the given edge length.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            concealed: false,
            ships: Vec::new(),
            sunk: 0,
            ship_map: Mask::new(size),
            hits: Mask::new(size),
            misses: Mask::new(size),
            ring: Mask::new(size),
            busy: Mask::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether ship cells are suppressed when the board is rendered.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Ships owned by this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// `true` once every ship on the board is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk == self.ships.len()
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> &Mask {
        &self.ship_map
    }

    pub fn hits(&self) -> &Mask {
        &self.hits
    }

    pub fn misses(&self) -> &Mask {
        &self.misses
    }

    /// Contour marks painted around sunk ships.
    pub fn ring(&self) -> &Mask {
        &self.ring
    }

    /// `true` iff the coordinate lies outside the board.
    pub fn out_of_bounds(&self, coord: Coord) -> bool {
        coord.row >= self.size || coord.col >= self.size
    }

    /// Reserve the cells of `ship` and their 8-neighborhood in the busy set.
    /// With `mark` set, newly reserved cells are also painted as the visible
    /// ring around a sunk ship.
    fn contour(&mut self, ship: &Ship, mark: bool) -> Result<(), BoardError> {
        for cell in ship.cells() {
            for (dr, dc) in NEAR {
                let row = cell.row as isize + dr;
                let col = cell.col as isize + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let cur = Coord::new(row as usize, col as usize);
                if self.out_of_bounds(cur) || self.busy.get(cur.row, cur.col)? {
                    continue;
                }
                if mark {
                    self.ring.set(cur.row, cur.col)?;
                }
                self.busy.set(cur.row, cur.col)?;
            }
        }
        Ok(())
    }

    /// Place a ship.
    ///
    /// Fails with `InvalidPlacement` when any cell lies out of bounds or
    /// inside already reserved space (another ship or its buffer). On success
    /// the ship's own 8-neighborhood is reserved as well, so placement order
    /// locks in each ship's buffer before the next attempt.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if self.out_of_bounds(cell) || self.busy.get(cell.row, cell.col)? {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for cell in ship.cells() {
            self.ship_map.set(cell.row, cell.col)?;
            self.busy.set(cell.row, cell.col)?;
        }
        self.ships.push(ship);
        self.contour(&ship, false)
    }

    /// Resolve a shot at `coord`.
    ///
    /// Rejected with `AlreadyShot` for a coordinate in the busy set and with
    /// `OutOfBounds` for one outside the board; both leave the board
    /// untouched. An accepted shot joins the busy set and damages the struck
    /// ship if any. Taking a ship's last segment rings the wreck, so its
    /// surroundings are no longer targetable.
    pub fn shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if self.busy.get(coord.row, coord.col).unwrap_or(false) {
            return Err(BoardError::AlreadyShot);
        }
        if self.out_of_bounds(coord) {
            return Err(BoardError::OutOfBounds);
        }
        self.busy.set(coord.row, coord.col)?;

        for i in 0..self.ships.len() {
            if self.ships[i].contains(coord) {
                self.ships[i].register_hit();
                self.hits.set(coord.row, coord.col)?;
                if self.ships[i].is_sunk() {
                    self.sunk += 1;
                    let wreck = self.ships[i];
                    self.contour(&wreck, true)?;
                    return Ok(ShotOutcome::Sunk);
                }
                return Ok(ShotOutcome::Hit);
            }
        }

        self.misses.set(coord.row, coord.col)?;
        Ok(ShotOutcome::Miss)
    }

    /// Open the fire phase: placement-time reservations are dropped so every
    /// cell is targetable exactly once.
    pub fn begin(&mut self) {
        self.busy.clear_all();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ size: {}, ships: {}, sunk: {}, concealed: {} }}",
            self.size,
            self.ships.len(),
            self.sunk,
            self.concealed
        )?;
        writeln!(f, "ship_map:\n{:?}", self.ship_map)?;
        writeln!(f, "hits:\n{:?}", self.hits)?;
        write!(f, "misses:\n{:?}", self.misses)
    }
}
