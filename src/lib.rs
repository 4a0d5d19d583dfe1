#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod mask;
mod placement;
mod player;
mod player_ai;
mod ship;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;

pub use board::Board;
pub use common::{BoardError, Coord, ShotOutcome};
pub use config::*;
pub use mask::{CellMask, Mask, MaskError};
pub use placement::{random_board, try_fleet_layout};
pub use player::Player;
pub use player_ai::RandomPlayer;
pub use ship::{Orientation, Ship};
#[cfg(feature = "std")]
pub use game::{Match, TurnReport};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::{parse_target, CliPlayer};
