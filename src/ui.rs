#![cfg(feature = "std")]

//! Board rendering and banner text.

use crate::board::Board;

/// Print a board with 1-indexed row and column headers.
///
/// Symbols: `.` empty, `S` ship, `o` miss, `X` hit, `*` ring around a sunk
/// ship. Ship cells are hidden on concealed boards.
pub fn print_board(board: &Board) {
    let size = board.size();
    print!("   ");
    for c in 0..size {
        print!(" {:2}", c + 1);
    }
    println!();
    for r in 0..size {
        print!("{:2} ", r + 1);
        for c in 0..size {
            let ch = if board.hits().get(r, c).unwrap_or(false) {
                'X'
            } else if board.ring().get(r, c).unwrap_or(false) {
                '*'
            } else if board.misses().get(r, c).unwrap_or(false) {
                'o'
            } else if !board.is_concealed() && board.ship_map().get(r, c).unwrap_or(false) {
                'S'
            } else {
                '.'
            };
            print!(" {:>2}", ch);
        }
        println!();
    }
}

/// Print both sides of the match, the player's own board first.
pub fn print_match(own: &Board, enemy: &Board) {
    println!("{}", "-".repeat(20));
    println!("Your board:");
    print_board(own);
    println!("{}", "-".repeat(20));
    println!("Computer's board:");
    print_board(enemy);
}

/// Startup banner explaining the input format.
pub fn greet() {
    println!("-------------------");
    println!("     sea battle    ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}
