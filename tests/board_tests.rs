use battleship::{Board, BoardError, SharedShip, Ship, ShotResult};

fn cruiser() -> SharedShip {
    SharedShip::new(Ship::new("Cruiser", 3).unwrap())
}

fn submarine() -> SharedShip {
    SharedShip::new(Ship::new("Submarine", 2).unwrap())
}

#[test]
fn test_cells_in_row_major_order() {
    let board = Board::new();
    let expected = [
        "A1", "A2", "A3", "A4", "B1", "B2", "B3", "B4", "C1", "C2", "C3", "C4", "D1", "D2", "D3",
        "D4",
    ];
    assert_eq!(board.coordinates().collect::<Vec<_>>(), expected);
    assert!(board.cells().all(|c| c.empty() && !c.fired_upon()));
}

#[test]
fn test_valid_coordinate() {
    let board = Board::new();
    assert!(board.valid_coordinate("A1"));
    assert!(board.valid_coordinate("D4"));
    assert!(!board.valid_coordinate("A5"));
    assert!(!board.valid_coordinate("E1"));
    assert!(!board.valid_coordinate("A22"));
}

#[test]
fn test_placement_rejects_length_mismatch() {
    let board = Board::new();
    assert!(!board.valid_placement(&cruiser(), &["A1", "A2"]));
    assert!(!board.valid_placement(&submarine(), &["A2", "A3", "A4"]));
}

#[test]
fn test_placement_requires_consecutive_coordinates() {
    let board = Board::new();
    assert!(!board.valid_placement(&cruiser(), &["A1", "A2", "A4"]));
    assert!(!board.valid_placement(&submarine(), &["A1", "C1"]));
    assert!(!board.valid_placement(&cruiser(), &["A3", "A2", "A1"]));
    assert!(!board.valid_placement(&submarine(), &["C1", "B1"]));
}

#[test]
fn test_diagonal_coordinates() {
    let board = Board::new();
    assert!(!board.diagonal_coordinates(&["B3", "B4"]));
    assert!(board.diagonal_coordinates(&["C2", "D1"]));
    assert!(board.diagonal_coordinates(&["A1", "B2"]));
    assert!(!board.diagonal_coordinates(&["A1", "A2"]));
}

#[test]
fn test_consecutive_coordinates() {
    let board = Board::new();
    assert!(!board.consecutive_coordinates(&["A1", "A4"]));
    assert!(board.consecutive_coordinates(&["A1", "A2"]));
    assert!(!board.consecutive_coordinates(&["A2", "A1"]));
}

#[test]
fn test_overlap() {
    let mut board = Board::new();
    board.place(&cruiser(), &["A1", "B1", "C1"]);
    board.place(&submarine(), &["B3", "B4"]);

    assert!(board.overlap(&["A1", "A2", "A3"]));
    assert!(!board.overlap(&["D1", "D2"]));
    assert!(board.overlap(&["B3", "B4"]));
    assert!(!board.overlap(&["D3", "D4"]));
}

#[test]
fn test_placement_rejects_off_board_and_gapped_runs() {
    let board = Board::new();
    assert!(!board.valid_placement(&submarine(), &["A4", "A5"]));
    assert!(!board.valid_placement(&submarine(), &["D1", "E1"]));
    assert!(!board.valid_placement(&submarine(), &["B1", "D1"]));
    assert!(!board.valid_placement(&submarine(), &["A0", "A1"]));
    assert!(!board.valid_placement(&submarine(), &["A\u{e9}", "A1"]));
}

#[test]
fn test_single_cell_placement() {
    let board = Board::new();
    let dinghy = SharedShip::new(Ship::new("Dinghy", 1).unwrap());
    assert!(board.valid_placement(&dinghy, &["C3"]));
    assert!(!board.valid_placement(&dinghy, &["C5"]));
}

#[test]
fn test_placement_rejects_diagonals() {
    let board = Board::new();
    assert!(!board.valid_placement(&cruiser(), &["A1", "B2", "C3"]));
    assert!(!board.valid_placement(&submarine(), &["C2", "D3"]));
}

#[test]
fn test_valid_placements() {
    let board = Board::new();
    assert!(board.valid_placement(&submarine(), &["A1", "A2"]));
    assert!(board.valid_placement(&cruiser(), &["B1", "C1", "D1"]));
}

#[test]
fn test_place_shares_one_ship() {
    let mut board = Board::new();
    let cruiser = cruiser();
    board.place(&cruiser, &["A1", "A2", "A3"]);

    let a1 = board.cell("A1").unwrap().ship().unwrap();
    let a2 = board.cell("A2").unwrap().ship().unwrap();
    let a3 = board.cell("A3").unwrap().ship().unwrap();
    assert_eq!(a1, &cruiser);
    assert_eq!(a2, &cruiser);
    assert_eq!(a3, a2);
    // a different ship with the same name is not the same ship
    assert_ne!(a1, &self::cruiser());
}

#[test]
fn test_no_overlapping_ships() {
    let mut board = Board::new();
    board.place(&cruiser(), &["A1", "A2", "A3"]);
    assert!(!board.valid_placement(&submarine(), &["A1", "B1"]));
    assert_eq!(
        board.try_place(&submarine(), &["A1", "B1"]),
        Err(BoardError::InvalidPlacement)
    );
}

#[test]
fn test_render() {
    let mut board = Board::new();
    board.place(&cruiser(), &["A1", "A2", "A3"]);
    assert_eq!(
        board.render(false),
        "  1 2 3 4 \nA . . . . \nB . . . . \nC . . . . \nD . . . . \n"
    );
    assert_eq!(
        board.render(true),
        "  1 2 3 4 \nA S S S . \nB . . . . \nC . . . . \nD . . . . \n"
    );
}

#[test]
fn test_render_hits_misses_and_sunk_ships() {
    let mut board = Board::new();
    board.place(&cruiser(), &["A1", "A2", "A3"]);
    board.place(&submarine(), &["C1", "D1"]);
    for coord in ["A1", "B4", "C1", "D1"] {
        board.cell_mut(coord).unwrap().fire_upon();
    }

    assert_eq!(
        board.render(true),
        concat!(
            "  1 2 3 4 \n",
            "A H S S . \n",
            "B . . . M \n",
            "C X . . . \n",
            "D X . . . \n",
        )
    );
    assert_eq!(
        board.render(false),
        concat!(
            "  1 2 3 4 \n",
            "A H . . . \n",
            "B . . . M \n",
            "C X . . . \n",
            "D X . . . \n",
        )
    );
}

#[test]
fn test_fire_reports_results() {
    let mut board = Board::new();
    board.try_place(&submarine(), &["C1", "D1"]).unwrap();

    assert_eq!(board.fire("B4").unwrap(), ShotResult::Miss);
    assert_eq!(board.fire("C1").unwrap(), ShotResult::Hit);
    assert!(!board.all_sunk());
    assert_eq!(
        board.fire("D1").unwrap(),
        ShotResult::Sunk(String::from("Submarine"))
    );
    assert!(board.all_sunk());

    assert_eq!(board.fire("D1").unwrap_err(), BoardError::AlreadyFiredUpon);
    assert_eq!(board.fire("E9").unwrap_err(), BoardError::InvalidCoordinate);
}

#[test]
fn test_empty_board_is_not_all_sunk() {
    assert!(!Board::new().all_sunk());
}

#[test]
fn test_ships_lists_each_ship_once() {
    let mut board = Board::new();
    let c = cruiser();
    let s = submarine();
    board.place(&c, &["B1", "C1", "D1"]);
    board.place(&s, &["A1", "A2"]);
    assert_eq!(board.ships(), vec![s, c]);
}

#[test]
fn test_render_rows_are_cell_chars() {
    let mut board = Board::new();
    board.place(&submarine(), &["B2", "B3"]);
    board.cell_mut("B2").unwrap().fire_upon();
    board.cell_mut("B4").unwrap().fire_upon();

    let rendered = board.render(true);
    let row_b = rendered.lines().nth(2).unwrap();
    let cells: String = ["B1", "B2", "B3", "B4"]
        .iter()
        .map(|c| format!("{} ", board.cell(c).unwrap().render(true)))
        .collect();
    assert_eq!(row_b, format!("B {}", cells));
    assert_eq!(row_b, "B . H S M ");
}
