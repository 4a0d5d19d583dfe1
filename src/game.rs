#![cfg(feature = "std")]

//! Match controller: turn sequencing, the shot retry loop, win detection.

use std::thread;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::MAX_SHOT_RETRIES;
use crate::placement::random_board;
use crate::player::Player;
use crate::ui;

/// One resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the player who moved.
    pub player: usize,
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// A match between two players.
///
/// Player 0 attacks board 1 and vice versa; the turn counter's parity selects
/// the active player, so player 0 opens the match.
pub struct Match {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    turn: u64,
}

impl Match {
    /// Build a match with freshly generated boards. The second player's board
    /// is concealed, which by convention is the automated side.
    pub fn new(
        size: usize,
        players: [Box<dyn Player>; 2],
        rng: &mut SmallRng,
    ) -> Result<Self, BoardError> {
        let own = random_board(rng, size)?;
        let mut enemy = random_board(rng, size)?;
        enemy.set_concealed(true);
        Ok(Self::with_boards([own, enemy], players))
    }

    /// Wire up pre-built boards, e.g. for tests or headless simulation.
    pub fn with_boards(boards: [Board; 2], players: [Box<dyn Player>; 2]) -> Self {
        Match {
            boards,
            players,
            turn: 0,
        }
    }

    /// Turn counter; its parity selects the active player.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn board(&self, idx: usize) -> &Board {
        &self.boards[idx]
    }

    /// The winning player's index, once the opposing fleet is destroyed.
    pub fn winner(&self) -> Option<usize> {
        if self.boards[1].all_sunk() {
            Some(0)
        } else if self.boards[0].all_sunk() {
            Some(1)
        } else {
            None
        }
    }

    /// Resolve the active player's move.
    ///
    /// The strategy is asked for targets until the opposing board accepts the
    /// shot; rejections go back to the strategy through its feedback hook. A
    /// hit leaves the turn counter unchanged so the shooter moves again.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        let shooter = (self.turn % 2) as usize;
        let target = 1 - shooter;
        let size = self.boards[target].size();

        let mut resolved = None;
        for _ in 0..MAX_SHOT_RETRIES {
            let coord = self.players[shooter].select_target(rng, size);
            match self.boards[target].shot(coord) {
                Ok(outcome) => {
                    resolved = Some((coord, outcome));
                    break;
                }
                Err(err) => {
                    log::debug!("player {} shot at {} rejected: {}", shooter, coord, err);
                    self.players[shooter].handle_invalid_shot(coord, &err);
                }
            }
        }
        let (coord, outcome) = resolved.ok_or_else(|| {
            anyhow::anyhow!("no acceptable shot after {} attempts", MAX_SHOT_RETRIES)
        })?;

        if !outcome.is_hit() {
            self.turn += 1;
        }
        Ok(TurnReport {
            player: shooter,
            coord,
            outcome,
        })
    }

    /// Play the match interactively until a winner emerges. Renders both
    /// boards before every move and the final position at the end; returns
    /// the winner's index.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<usize> {
        loop {
            ui::print_match(&self.boards[0], &self.boards[1]);
            let shooter = (self.turn % 2) as usize;
            println!("{}", "-".repeat(20));
            println!("{} to move.", self.players[shooter].name());
            if let Some(delay) = self.players[shooter].premove_delay(rng) {
                thread::sleep(delay);
            }

            let report = self.step(rng)?;
            let verdict = match report.outcome {
                ShotOutcome::Sunk => "ship destroyed!",
                ShotOutcome::Hit => "ship damaged!",
                ShotOutcome::Miss => "miss.",
            };
            println!(
                "{} fires at {}: {}",
                self.players[report.player].name(),
                report.coord,
                verdict
            );

            if let Some(winner) = self.winner() {
                ui::print_match(&self.boards[0], &self.boards[1]);
                println!("{}", "-".repeat(20));
                println!("{} wins!", self.players[winner].name());
                return Ok(winner);
            }
        }
    }
}
