//! Fixed game configuration.

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 7;

/// Lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a single board layout, shared across the
/// whole fleet.
pub const PLACEMENT_BUDGET: usize = 2000;

/// Fresh-board layouts attempted before generation is declared failed.
pub const MAX_LAYOUT_ATTEMPTS: usize = 64;

/// Rejected shots tolerated within one turn before the match is aborted.
pub const MAX_SHOT_RETRIES: usize = 4096;
