use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 6;

/// Fleet placed at the start of every game, in placement order.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Patrol Boat", 2),
    ShipClass::new("Gunboat", 2),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Battleship", 4),
];

/// Segments across the whole fleet; hitting this many cells defeats a board.
pub const TOTAL_SHIP_CELLS: usize = 16;
