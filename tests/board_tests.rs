use gridhunt::{
    Board, BoardError, Coord, GameRules, Orientation, Placement, PlacementView, ProbeState,
    StrikeOutcome,
};

fn at(row: usize, col: usize, orientation: Orientation) -> Placement {
    Placement {
        row,
        col,
        orientation,
    }
}

#[test]
fn test_place_and_overlap() {
    let mut board = Board::new(GameRules::classic()).unwrap();
    // Carrier across the top edge
    board.place(0, at(0, 0, Orientation::Horizontal)).unwrap();
    // Battleship crossing its last cell
    let err = board.place(1, at(0, 4, Orientation::Vertical)).unwrap_err();
    assert_eq!(err, BoardError::PlacementOverlaps);
    // Same ship next to it is fine
    board.place(1, at(0, 6, Orientation::Horizontal)).unwrap();
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new(GameRules::classic()).unwrap();
    let err = board.place(0, at(0, 6, Orientation::Horizontal)).unwrap_err();
    assert_eq!(err, BoardError::PlacementOutOfBounds);
    let err = board.place(0, at(6, 0, Orientation::Vertical)).unwrap_err();
    assert_eq!(err, BoardError::PlacementOutOfBounds);
}

#[test]
fn test_place_misuse() {
    let mut board = Board::new(GameRules::classic()).unwrap();
    let err = board.place(9, at(0, 0, Orientation::Horizontal)).unwrap_err();
    assert_eq!(err, BoardError::InvalidIndex);

    board.place(4, at(5, 5, Orientation::Horizontal)).unwrap();
    let err = board.place(4, at(7, 7, Orientation::Horizontal)).unwrap_err();
    assert_eq!(err, BoardError::ShipAlreadyPlaced);
}

#[test]
fn test_strike_sequence_and_probe_states() {
    let rules = GameRules::new(5, vec![2]);
    let mut board = Board::new(rules).unwrap();
    board.place(0, at(2, 2, Orientation::Horizontal)).unwrap();

    assert_eq!(board.probe_state(Coord::new(2, 2)), ProbeState::Occupied);
    assert_eq!(board.probe_state(Coord::new(0, 0)), ProbeState::Unresolved);

    assert_eq!(board.strike(Coord::new(0, 0)).unwrap(), StrikeOutcome::Miss);
    assert_eq!(board.probe_state(Coord::new(0, 0)), ProbeState::Miss);

    assert_eq!(board.strike(Coord::new(2, 2)).unwrap(), StrikeOutcome::Hit);
    assert_eq!(board.probe_state(Coord::new(2, 2)), ProbeState::Hit);
    assert_eq!(
        board.strike(Coord::new(2, 2)).unwrap_err(),
        BoardError::AlreadyStruck
    );

    assert!(!board.all_sunk());
    assert_eq!(
        board.strike(Coord::new(2, 3)).unwrap(),
        StrikeOutcome::Destroyed
    );
    // The whole ship now reads as destroyed, not just the final cell
    assert_eq!(board.probe_state(Coord::new(2, 2)), ProbeState::Destroyed);
    assert_eq!(board.probe_state(Coord::new(2, 3)), ProbeState::Destroyed);
    assert!(board.all_sunk());
    assert_eq!(board.hit_count(), 2);

    let fleet = board.fleet_status();
    assert_eq!(fleet.len(), 1);
    assert!(fleet[0].destroyed);
}

#[test]
fn test_fleet_status_fresh() {
    let mut board = Board::new(GameRules::classic()).unwrap();
    board.place(0, at(0, 0, Orientation::Horizontal)).unwrap();
    let fleet = board.fleet_status();
    let sizes: Vec<_> = fleet.iter().map(|s| s.size).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
    assert!(fleet.iter().all(|s| !s.destroyed));
    assert!(!board.all_sunk());
}

#[test]
fn test_vacancy_view() {
    let mut board = Board::new(GameRules::classic()).unwrap();
    board.place(0, at(3, 3, Orientation::Vertical)).unwrap();
    assert!(!board.is_vacant(Coord::new(3, 3)));
    assert!(!board.is_vacant(Coord::new(7, 3)));
    assert!(board.is_vacant(Coord::new(8, 3)));
    assert!(board.is_vacant(Coord::new(3, 4)));
}
