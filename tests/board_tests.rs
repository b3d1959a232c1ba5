use broadside::{
    Board, BoardError, Cell, Grid, Orientation, ShipClass, ShotOutcome, BOARD_SIZE, FLEET,
    NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn fresh_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.grid().count(Cell::Empty), BOARD_SIZE * BOARD_SIZE);
    assert!(board.ships().is_empty());
    assert!(board.all_sunk());
}

#[test]
fn place_horizontal_ship_marks_run_and_blocks_reuse() {
    let mut board = Board::new();
    let class = ShipClass::new("Submarine", 3);
    assert!(board.can_place_ship(0, 0, 3, Orientation::Horizontal));
    board
        .place_ship(class, 0, 0, Orientation::Horizontal)
        .unwrap();

    for col in 0..3 {
        assert_eq!(board.grid().get(0, col).unwrap(), Cell::Ship);
    }
    assert_eq!(board.grid().get(0, 3).unwrap(), Cell::Empty);
    // the same anchor no longer qualifies
    assert!(!board.can_place_ship(0, 0, 3, Orientation::Horizontal));
}

#[test]
fn place_rejects_out_of_bounds_and_overlap() {
    let mut board = Board::new();
    let class = ShipClass::new("Cruiser", 3);
    assert_eq!(
        board.place_ship(class, 0, 6, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship(class, 6, 0, Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    board
        .place_ship(class, 2, 2, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place_ship(class, 0, 3, Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    // failed placements must not leave partial runs behind
    assert_eq!(board.grid().count(Cell::Ship), 3);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn shoot_ship_until_sunk() {
    let mut board = Board::new();
    let class = ShipClass::new("Submarine", 3);
    board
        .place_ship(class, 0, 0, Orientation::Horizontal)
        .unwrap();

    assert_eq!(board.apply_shot(0, 0).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.grid().get(0, 0).unwrap(), Cell::Hit);
    assert!(!board.ships()[0].is_sunk(board.grid()));

    assert_eq!(board.apply_shot(0, 1).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        board.apply_shot(0, 2).unwrap(),
        ShotOutcome::Sunk("Submarine")
    );
    assert!(board.ships()[0].is_sunk(board.grid()));
    assert!(board.all_sunk());
}

#[test]
fn shot_on_open_water_is_a_miss() {
    let mut board = Board::new();
    board
        .place_ship(ShipClass::new("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.apply_shot(5, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.grid().get(5, 5).unwrap(), Cell::Miss);
}

#[test]
fn resolved_cells_reject_further_shots() {
    let mut board = Board::new();
    board
        .place_ship(ShipClass::new("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    board.apply_shot(0, 0).unwrap();
    board.apply_shot(7, 7).unwrap();

    let snapshot = *board.grid();
    assert_eq!(
        board.apply_shot(0, 0),
        Err(BoardError::AlreadyShot { row: 0, col: 0 })
    );
    assert_eq!(
        board.apply_shot(7, 7),
        Err(BoardError::AlreadyShot { row: 7, col: 7 })
    );
    assert_eq!(*board.grid(), snapshot);
}

#[test]
fn out_of_range_shot_is_rejected_before_indexing() {
    let mut board = Board::new();
    assert_eq!(
        board.apply_shot(BOARD_SIZE, 0),
        Err(BoardError::InvalidCoordinate {
            row: BOARD_SIZE,
            col: 0
        })
    );
    assert_eq!(
        board.apply_shot(0, BOARD_SIZE),
        Err(BoardError::InvalidCoordinate {
            row: 0,
            col: BOARD_SIZE
        })
    );
}

#[test]
fn random_fleet_covers_sixteen_cells() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet_randomly(&mut rng).unwrap();

    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert_eq!(board.grid().count(Cell::Ship), TOTAL_SHIP_CELLS);
    for (ship, class) in board.ships().iter().zip(FLEET) {
        assert_eq!(ship.class().length(), class.length());
        assert_eq!(ship.cells().len(), class.length());
        for &(row, col) in ship.cells() {
            assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        }
    }
}

#[test]
fn tracking_view_masks_unhit_ships() {
    let mut board = Board::new();
    board
        .place_ship(ShipClass::new("Destroyer", 2), 3, 3, Orientation::Vertical)
        .unwrap();
    board.apply_shot(3, 3).unwrap();
    board.apply_shot(0, 0).unwrap();

    let view = board.tracking_view();
    assert_eq!(view.count(Cell::Ship), 0);
    assert_eq!(view.get(3, 3).unwrap(), Cell::Hit);
    assert_eq!(view.get(4, 3).unwrap(), Cell::Empty);
    assert_eq!(view.get(0, 0).unwrap(), Cell::Miss);
    // the owner still sees the unhit segment
    assert_eq!(board.own_view().get(4, 3).unwrap(), Cell::Ship);
}

#[test]
fn grid_serializes_as_symbol_rows() {
    let mut board = Board::new();
    board
        .place_ship(ShipClass::new("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    board.apply_shot(0, 0).unwrap();
    board.apply_shot(1, 0).unwrap();

    let value = serde_json::to_value(board.own_view()).unwrap();
    assert_eq!(value[0][0], "X");
    assert_eq!(value[0][1], "S");
    assert_eq!(value[1][0], "O");
    assert_eq!(value[7][7], "~");

    let round_tripped: Grid = serde_json::from_value(value).unwrap();
    assert_eq!(round_tripped, board.own_view());
}
