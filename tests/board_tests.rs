use skirmish::{
    check_winner, create_board, resolve_guess, Cell, Coordinate, GameError, GuessLog,
    GuessResult, Outcome, ShipSet,
};

fn ships(coords: &[(usize, usize)]) -> ShipSet {
    ShipSet::from_coords(5, coords.iter().map(|&c| Coordinate::from(c))).unwrap()
}

#[test]
fn test_exact_guess_sinks_last_ship() {
    let mut fleet = ships(&[(0, 0)]);
    let mut board = create_board(5);
    let mut log = GuessLog::new(5).unwrap();

    let outcome = resolve_guess(Coordinate::new(0, 0), &mut fleet, &mut board, &mut log).unwrap();

    assert_eq!(outcome.result, GuessResult::Sunk);
    assert!(outcome.defeated);
    assert!(fleet.is_empty());
    assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Hit));
    assert!(log.contains(Coordinate::new(0, 0)));
}

#[test]
fn test_diagonal_neighbour_is_near() {
    let mut fleet = ships(&[(2, 2)]);
    let mut board = create_board(5);
    let mut log = GuessLog::new(5).unwrap();

    let outcome = resolve_guess(Coordinate::new(1, 1), &mut fleet, &mut board, &mut log).unwrap();

    assert_eq!(outcome.result, GuessResult::Near);
    assert!(!outcome.defeated);
    assert_eq!(fleet.len(), 1);
    assert_eq!(board.get(Coordinate::new(1, 1)), Some(Cell::HurtMarker));
}

#[test]
fn test_distance_two_is_miss() {
    let mut fleet = ships(&[(2, 2)]);
    let mut board = create_board(5);
    let mut log = GuessLog::new(5).unwrap();

    let outcome = resolve_guess(Coordinate::new(0, 0), &mut fleet, &mut board, &mut log).unwrap();

    assert_eq!(outcome.result, GuessResult::Miss);
    assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Miss));
    assert_eq!(fleet.len(), 1);
}

#[test]
fn test_sunk_ship_no_longer_hurts_neighbours() {
    let mut fleet = ships(&[(2, 2), (4, 4)]);
    let mut board = create_board(5);
    let mut log = GuessLog::new(5).unwrap();

    resolve_guess(Coordinate::new(2, 2), &mut fleet, &mut board, &mut log).unwrap();
    let outcome = resolve_guess(Coordinate::new(1, 1), &mut fleet, &mut board, &mut log).unwrap();

    assert_eq!(outcome.result, GuessResult::Miss);
    let outcome = resolve_guess(Coordinate::new(3, 3), &mut fleet, &mut board, &mut log).unwrap();
    assert_eq!(outcome.result, GuessResult::Near);
}

#[test]
fn test_repeat_guess_is_rejected_without_change() {
    let mut fleet = ships(&[(2, 2)]);
    let mut board = create_board(5);
    let mut log = GuessLog::from_coords(5, [Coordinate::new(3, 3)]).unwrap();
    let (fleet_before, board_before, log_before) = (fleet, board.clone(), log);

    let err = resolve_guess(Coordinate::new(3, 3), &mut fleet, &mut board, &mut log).unwrap_err();

    assert_eq!(err, GameError::DuplicateGuess(Coordinate::new(3, 3)));
    assert!(err.is_recoverable());
    assert_eq!(fleet, fleet_before);
    assert_eq!(board, board_before);
    assert_eq!(log, log_before);
}

#[test]
fn test_out_of_bounds_guess_is_rejected_without_change() {
    let mut fleet = ships(&[(4, 4)]);
    let mut board = create_board(5);
    let mut log = GuessLog::new(5).unwrap();

    let err = resolve_guess(Coordinate::new(5, 0), &mut fleet, &mut board, &mut log).unwrap_err();

    assert_eq!(
        err,
        GameError::OutOfBounds {
            coord: Coordinate::new(5, 0),
            size: 5
        }
    );
    assert!(err.is_recoverable());
    assert!(log.is_empty());
    assert!(board.is_untouched());
    assert_eq!(fleet.len(), 1);
}

#[test]
fn test_check_winner_outcomes() {
    let empty = ShipSet::new(5).unwrap();
    let fleet = ships(&[(1, 1)]);

    assert_eq!(check_winner(&fleet, &fleet), Outcome::InProgress);
    assert_eq!(check_winner(&fleet, &empty), Outcome::PlayerWins);
    assert_eq!(check_winner(&empty, &fleet), Outcome::ComputerWins);
    // player is evaluated first
    assert_eq!(check_winner(&empty, &empty), Outcome::PlayerWins);
}

#[test]
fn test_check_winner_is_idempotent() {
    let player = ships(&[(0, 0)]);
    let computer = ShipSet::new(5).unwrap();
    let first = check_winner(&player, &computer);
    for _ in 0..5 {
        assert_eq!(check_winner(&player, &computer), first);
    }
}
