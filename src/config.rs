use crate::ship::ShipType;

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 4;
pub const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D'];
pub const NUM_SHIPS: usize = 2;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&SHIPS);

const fn fleet_cells(ships: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < ships.len() {
        total += ships[i].length();
        i += 1;
    }
    total
}
