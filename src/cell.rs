//! A single square of the board.

use alloc::string::String;

use crate::ship::SharedShip;

#[derive(Debug)]
pub struct Cell {
    coordinate: String,
    ship: Option<SharedShip>,
    fired_upon: bool,
}

impl Cell {
    /// Create an empty, untouched cell.
    pub fn new(coordinate: impl Into<String>) -> Self {
        Cell {
            coordinate: coordinate.into(),
            ship: None,
            fired_upon: false,
        }
    }

    pub fn coordinate(&self) -> &str {
        &self.coordinate
    }

    /// Ship occupying the cell, if any.
    pub fn ship(&self) -> Option<&SharedShip> {
        self.ship.as_ref()
    }

    /// Put `ship` on this cell. Overlap checks belong to the board.
    pub fn place_ship(&mut self, ship: SharedShip) {
        self.ship = Some(ship);
    }

    pub fn empty(&self) -> bool {
        self.ship.is_none()
    }

    pub fn fired_upon(&self) -> bool {
        self.fired_upon
    }

    /// Fire on the cell, damaging the occupying ship once.
    /// A cell that was already fired upon is left untouched.
    pub fn fire_upon(&mut self) {
        if self.fired_upon {
            return;
        }
        self.fired_upon = true;
        if let Some(ship) = &self.ship {
            ship.hit();
        }
    }

    /// Single-character view of the cell.
    ///
    /// | state                     | char |
    /// |---------------------------|------|
    /// | fired, ship sunk          | `X`  |
    /// | fired, ship afloat        | `H`  |
    /// | fired, no ship            | `M`  |
    /// | not fired, ship, `reveal` | `S`  |
    /// | anything else             | `.`  |
    pub fn render(&self, reveal: bool) -> char {
        match (&self.ship, self.fired_upon) {
            (Some(ship), true) if ship.sunk() => 'X',
            (Some(_), true) => 'H',
            (None, true) => 'M',
            (Some(_), false) if reveal => 'S',
            _ => '.',
        }
    }
}
