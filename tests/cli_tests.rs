#![cfg(feature = "std")]

use seabattle::{parse_target, CliPlayer, Coord, Player};

#[test]
fn test_parse_valid_pairs() {
    assert_eq!(parse_target("3 4"), Some(Coord::new(2, 3)));
    assert_eq!(parse_target("1 1"), Some(Coord::new(0, 0)));
    assert_eq!(parse_target(" 1   6 "), Some(Coord::new(0, 5)));
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("3"), None);
    assert_eq!(parse_target("3 4 5"), None);
    assert_eq!(parse_target("a b"), None);
    assert_eq!(parse_target("3,4"), None);
    assert_eq!(parse_target("3 x"), None);
    // zero is not a valid 1-indexed coordinate
    assert_eq!(parse_target("0 2"), None);
    assert_eq!(parse_target("2 0"), None);
}

#[test]
fn test_parse_leaves_bounds_to_board() {
    // over-large values parse fine; the board rejects them on the shot
    assert_eq!(parse_target("99 1"), Some(Coord::new(98, 0)));
}

#[test]
fn test_cli_player_name() {
    let player = CliPlayer::new();
    assert_eq!(player.name(), "Player");
}
