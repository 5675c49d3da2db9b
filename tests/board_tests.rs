use connect_four::{Board, BoardError, Cell, Mark, COLS, ROWS};

/// Stack chips into `col` bottom-up in the given order.
fn fill_column(board: &mut Board, col: usize, marks: &[Mark]) {
    for &mark in marks {
        board.drop_chip(col, mark).unwrap();
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(board.get(row, col), Cell::Empty);
        }
    }
    assert!(!board.is_full());
}

#[test]
fn test_chip_lands_at_bottom_then_stacks() {
    let mut board = Board::new();

    let row = board.drop_chip(3, Mark::Purple).unwrap();
    assert_eq!(row, 5);
    assert_eq!(board.get(5, 3), Cell::Filled(Mark::Purple));

    let row = board.drop_chip(3, Mark::Yellow).unwrap();
    assert_eq!(row, 4);
    assert_eq!(board.get(4, 3), Cell::Filled(Mark::Yellow));
}

#[test]
fn test_full_column_rejects_and_is_unchanged() {
    let mut board = Board::new();
    fill_column(
        &mut board,
        0,
        &[
            Mark::Purple,
            Mark::Yellow,
            Mark::Purple,
            Mark::Yellow,
            Mark::Purple,
            Mark::Yellow,
        ],
    );
    assert!(board.is_column_full(0));

    let snapshot = board;
    assert_eq!(
        board.drop_chip(0, Mark::Purple),
        Err(BoardError::ColumnFull)
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_out_of_bounds_column() {
    let mut board = Board::new();
    assert_eq!(
        board.drop_chip(COLS, Mark::Purple),
        Err(BoardError::OutOfBounds)
    );
}

#[test]
fn test_horizontal_line_detected() {
    let mut board = Board::new();
    for col in 0..4 {
        board.drop_chip(col, Mark::Purple).unwrap();
    }
    assert_eq!(board.four_in_a_row(), Some(Mark::Purple));
}

#[test]
fn test_vertical_line_detected() {
    let mut board = Board::new();
    for _ in 0..4 {
        board.drop_chip(3, Mark::Yellow).unwrap();
    }
    assert_eq!(board.four_in_a_row(), Some(Mark::Yellow));
}

#[test]
fn test_rising_diagonal_detected() {
    let mut board = Board::new();
    board.drop_chip(0, Mark::Purple).unwrap();

    board.drop_chip(1, Mark::Yellow).unwrap();
    board.drop_chip(1, Mark::Purple).unwrap();

    board.drop_chip(2, Mark::Yellow).unwrap();
    board.drop_chip(2, Mark::Yellow).unwrap();
    board.drop_chip(2, Mark::Purple).unwrap();

    board.drop_chip(3, Mark::Yellow).unwrap();
    board.drop_chip(3, Mark::Yellow).unwrap();
    board.drop_chip(3, Mark::Yellow).unwrap();
    assert_eq!(board.four_in_a_row(), None);

    board.drop_chip(3, Mark::Purple).unwrap();
    assert_eq!(board.four_in_a_row(), Some(Mark::Purple));
}

#[test]
fn test_falling_diagonal_detected() {
    let mut board = Board::new();
    board.drop_chip(6, Mark::Purple).unwrap();

    board.drop_chip(5, Mark::Yellow).unwrap();
    board.drop_chip(5, Mark::Purple).unwrap();

    board.drop_chip(4, Mark::Yellow).unwrap();
    board.drop_chip(4, Mark::Yellow).unwrap();
    board.drop_chip(4, Mark::Purple).unwrap();

    board.drop_chip(3, Mark::Yellow).unwrap();
    board.drop_chip(3, Mark::Yellow).unwrap();
    board.drop_chip(3, Mark::Yellow).unwrap();
    board.drop_chip(3, Mark::Purple).unwrap();

    assert_eq!(board.four_in_a_row(), Some(Mark::Purple));
}

#[test]
fn test_three_in_a_row_is_not_a_line() {
    let mut board = Board::new();
    for col in 0..3 {
        board.drop_chip(col, Mark::Purple).unwrap();
    }
    assert_eq!(board.four_in_a_row(), None);
}

#[test]
fn test_full_board_without_line() {
    // Column stacks (bottom to top) that tile the whole board with runs
    // of at most two in every direction.
    let p = Mark::Purple;
    let y = Mark::Yellow;
    let even = [p, p, y, y, p, p];
    let odd = [y, y, p, p, y, y];
    let last = [p, y, p, y, p, y];

    let mut board = Board::new();
    for col in 0..COLS - 1 {
        let stack = if col % 2 == 0 { even } else { odd };
        fill_column(&mut board, col, &stack);
    }
    fill_column(&mut board, COLS - 1, &last);

    assert!(board.is_full());
    assert_eq!(board.four_in_a_row(), None);
}

#[test]
fn test_debug_render() {
    let mut board = Board::new();
    board.drop_chip(0, Mark::Purple).unwrap();
    board.drop_chip(1, Mark::Yellow).unwrap();

    let rendered = board.to_string();
    let last_row = rendered.lines().last().unwrap();
    assert_eq!(last_row, "P Y _ _ _ _ _ ");
    assert_eq!(rendered.lines().count(), ROWS);
}
