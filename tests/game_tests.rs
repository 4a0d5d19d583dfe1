use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_board, Board, Coord, Match, Orientation, Player, RandomPlayer, Ship, ShotOutcome,
    DEFAULT_BOARD_SIZE,
};

/// Test player that replays a fixed sequence of targets.
struct ScriptedPlayer {
    shots: Vec<Coord>,
    next: usize,
}

impl ScriptedPlayer {
    fn new(shots: Vec<Coord>) -> Self {
        ScriptedPlayer { shots, next: 0 }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _board_size: usize) -> Coord {
        let coord = self.shots[self.next];
        self.next += 1;
        coord
    }
}

fn fleet_board(ships: &[Ship]) -> Board {
    let mut board = Board::new(DEFAULT_BOARD_SIZE);
    for &ship in ships {
        board.add_ship(ship).unwrap();
    }
    board.begin();
    board
}

#[test]
fn test_always_hitting_player_keeps_turn() {
    let own = fleet_board(&[Ship::new(Coord::new(5, 0), 3, Orientation::Horizontal)]);
    let enemy = fleet_board(&[Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal)]);
    let players: [Box<dyn Player>; 2] = [
        Box::new(ScriptedPlayer::new(vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
        ])),
        Box::new(RandomPlayer::headless()),
    ];
    let mut game = Match::with_boards([own, enemy], players);
    let mut rng = SmallRng::seed_from_u64(1);

    assert_eq!(game.step(&mut rng).unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.turn(), 0);
    assert_eq!(game.step(&mut rng).unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.turn(), 0);
    assert_eq!(game.step(&mut rng).unwrap().outcome, ShotOutcome::Sunk);
    assert_eq!(game.turn(), 0);
    assert_eq!(game.winner(), Some(0));
}

#[test]
fn test_miss_passes_turn() {
    let own = fleet_board(&[Ship::new(Coord::new(5, 5), 1, Orientation::Horizontal)]);
    let enemy = fleet_board(&[Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal)]);
    let players: [Box<dyn Player>; 2] = [
        Box::new(ScriptedPlayer::new(vec![Coord::new(3, 3)])),
        Box::new(ScriptedPlayer::new(vec![Coord::new(2, 2)])),
    ];
    let mut game = Match::with_boards([own, enemy], players);
    let mut rng = SmallRng::seed_from_u64(1);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.player, 0);
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(game.turn(), 1);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.player, 1);
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(game.turn(), 2);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_rejected_shot_is_retried() {
    let own = fleet_board(&[Ship::new(Coord::new(5, 5), 1, Orientation::Horizontal)]);
    let enemy = fleet_board(&[Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal)]);
    // player 0: out of bounds first, then legal misses
    // player 1: a legal miss, then a repeat of it, then a fresh cell
    let players: [Box<dyn Player>; 2] = [
        Box::new(ScriptedPlayer::new(vec![
            Coord::new(9, 9),
            Coord::new(3, 3),
            Coord::new(1, 1),
        ])),
        Box::new(ScriptedPlayer::new(vec![
            Coord::new(3, 3),
            Coord::new(3, 3),
            Coord::new(2, 2),
        ])),
    ];
    let mut game = Match::with_boards([own, enemy], players);
    let mut rng = SmallRng::seed_from_u64(1);

    // the out-of-bounds target is rejected and retried within the same turn
    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.player, 0);
    assert_eq!(report.coord, Coord::new(3, 3));
    assert_eq!(report.outcome, ShotOutcome::Miss);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.player, 1);
    assert_eq!(report.coord, Coord::new(3, 3));

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.player, 0);
    assert_eq!(report.coord, Coord::new(1, 1));

    // the duplicate target is rejected and retried within the same turn
    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.player, 1);
    assert_eq!(report.coord, Coord::new(2, 2));
}

#[test]
fn test_bot_vs_bot_terminates() {
    let mut rng = SmallRng::seed_from_u64(123);
    let boards = [
        random_board(&mut rng, DEFAULT_BOARD_SIZE).unwrap(),
        random_board(&mut rng, DEFAULT_BOARD_SIZE).unwrap(),
    ];
    let players: [Box<dyn Player>; 2] = [
        Box::new(RandomPlayer::headless()),
        Box::new(RandomPlayer::headless()),
    ];
    let mut game = Match::with_boards(boards, players);
    let mut moves = 0;
    while game.winner().is_none() {
        game.step(&mut rng).unwrap();
        moves += 1;
        assert!(moves <= 200, "game took too many moves");
    }
    let winner = game.winner().unwrap();
    assert!(game.board(1 - winner).all_sunk());
    assert!(!game.board(winner).all_sunk());
}
