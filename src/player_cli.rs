#![cfg(feature = "std")]

//! Interactive stdin player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord};
use crate::player::Player;

/// Human player reading 1-indexed "row col" pairs from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1-indexed "row col" pair into a board coordinate.
///
/// Exactly two numeric tokens are required. Zero is rejected here because the
/// 1-indexed surface has no row or column 0; bounds on the other side are
/// left to the board.
pub fn parse_target(line: &str) -> Option<Coord> {
    let mut tokens = line.split_whitespace();
    let row: usize = tokens.next()?.parse().ok()?;
    let col: usize = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Coord::new(row.checked_sub(1)?, col.checked_sub(1)?))
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        "Player"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _board_size: usize) -> Coord {
        loop {
            print!("Enter target coordinates (row col): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) => {
                    // stdin closed; there is no move to make
                    println!();
                    std::process::exit(0);
                }
                Ok(_) => {}
                Err(_) => continue,
            }
            match parse_target(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter exactly two numbers, 1-indexed (e.g. 2 4)"),
            }
        }
    }

    fn handle_invalid_shot(&mut self, _coord: Coord, err: &BoardError) {
        println!("{}", err);
    }
}
