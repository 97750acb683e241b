use eight_puzzle::board::{Board, BoardError, Direction, GOAL_TILES};

#[test]
fn accepts_exactly_the_permutations_of_zero_through_eight() {
    assert!(Board::from_tiles(GOAL_TILES).is_ok());
    assert!(Board::from_tiles([0, 1, 2, 3, 4, 5, 6, 7, 8]).is_ok());

    let dup = Board::from_tiles([1, 1, 3, 4, 5, 6, 7, 8, 0]);
    assert!(matches!(
        dup,
        Err(BoardError::InvalidPermutation { .. })
    ));

    let out_of_range = Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(matches!(
        out_of_range,
        Err(BoardError::InvalidPermutation { .. })
    ));

    // No blank at all.
    let no_blank = Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 8]);
    assert!(no_blank.is_err());
}

#[test]
fn legal_move_count_depends_on_blank_position() {
    let corner = Board::from_tiles([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let edge = Board::from_tiles([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let center = Board::from_tiles([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();

    let count = |b: &Board| {
        Direction::ALL
            .iter()
            .filter(|&&d| b.apply(d).is_some())
            .count()
    };

    assert_eq!(count(&corner), 2);
    assert_eq!(count(&edge), 3);
    assert_eq!(count(&center), 4);

    // Blank in the top-left corner: both upward and leftward are off-grid.
    assert!(corner.apply(Direction::Up).is_none());
    assert!(corner.apply(Direction::Left).is_none());
}

#[test]
fn moves_swap_blank_with_the_adjacent_tile() {
    let center = Board::from_tiles([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();

    let up = center.apply(Direction::Up).unwrap();
    assert_eq!(up.tiles(), &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
    assert_eq!(up.blank(), 1);

    let down = center.apply(Direction::Down).unwrap();
    assert_eq!(down.tiles(), &[1, 2, 3, 4, 7, 5, 6, 0, 8]);

    let left = center.apply(Direction::Left).unwrap();
    assert_eq!(left.tiles(), &[1, 2, 3, 0, 4, 5, 6, 7, 8]);

    let right = center.apply(Direction::Right).unwrap();
    assert_eq!(right.tiles(), &[1, 2, 3, 4, 5, 0, 6, 7, 8]);
}

#[test]
fn opposite_moves_cancel() {
    let center = Board::from_tiles([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    for dir in Direction::ALL {
        let there = center.apply(dir).unwrap();
        let back = there.apply(dir.opposite()).unwrap();
        assert_eq!(back, center);
    }
}

#[test]
fn goal_is_exactly_the_solved_sequence() {
    assert!(Board::goal().is_goal());
    assert_eq!(Board::goal().tiles(), &GOAL_TILES);

    let one_off = Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
    assert!(!one_off.is_goal());
}

#[test]
fn inversion_parity_decides_solvability() {
    assert!(Board::goal().is_solvable());

    // A single transposition flips parity.
    let swapped = Board::from_tiles([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    assert!(!swapped.is_solvable());
}

#[test]
fn solvability_is_invariant_under_moves() {
    let mut board = Board::from_tiles([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    assert!(board.is_solvable());

    // Walk a fixed move sequence, skipping illegal steps; parity never flips.
    let walk = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Up,
        Direction::Left,
    ];
    for dir in walk {
        if let Some(next) = board.apply(dir) {
            board = next;
        }
        assert!(board.is_solvable());
    }
}

#[test]
fn identity_is_the_tile_sequence() {
    let a = Board::from_tiles([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();

    // Reach the same configuration along two different routes.
    let via_up = a.apply(Direction::Up).unwrap().apply(Direction::Down).unwrap();
    let via_left = a
        .apply(Direction::Left)
        .unwrap()
        .apply(Direction::Right)
        .unwrap();

    assert_eq!(via_up, a);
    assert_eq!(via_left, a);
    assert_eq!(via_up, via_left);
}
