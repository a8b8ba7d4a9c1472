//! Game board state: a fixed grid of cells, placement rules and rendering.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};

use log::debug;
use rand::Rng;

use crate::cell::Cell;
use crate::common::{BoardError, ShotResult};
use crate::config::{BOARD_SIZE, ROW_LABELS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, SharedShip};

/// Attempts made by [`Board::random_placement`] before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// Main board state: one cell per coordinate, stored in row-major order.
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing fired upon).
    pub fn new() -> Self {
        let cells = Coordinate::all().map(|c| Cell::new(c.to_string())).collect();
        Board { cells }
    }

    /// Cells in row-major order, `A1` through `D4`.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinate labels in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(Cell::coordinate)
    }

    pub fn cell(&self, coordinate: &str) -> Option<&Cell> {
        Coordinate::parse(coordinate).map(|c| &self.cells[c.index()])
    }

    pub fn cell_mut(&mut self, coordinate: &str) -> Option<&mut Cell> {
        Coordinate::parse(coordinate).map(move |c| &mut self.cells[c.index()])
    }

    pub fn valid_coordinate(&self, coordinate: &str) -> bool {
        Coordinate::parse(coordinate).is_some()
    }

    /// Same row, with columns increasing by exactly one in the given order.
    pub fn consecutive_coordinates(&self, coordinates: &[&str]) -> bool {
        match parse_all(coordinates) {
            Some(points) if !points.is_empty() => is_run(&points, Orientation::Horizontal),
            _ => false,
        }
    }

    /// Two coordinates that differ in both row and column.
    pub fn diagonal_coordinates(&self, coordinates: &[&str]) -> bool {
        match parse_all(coordinates).as_deref() {
            Some([a, b]) => a.row() != b.row() && a.col() != b.col(),
            _ => false,
        }
    }

    /// `true` if any of the coordinates already holds a ship.
    /// Coordinates that are not on the board are ignored.
    pub fn overlap(&self, coordinates: &[&str]) -> bool {
        coordinates
            .iter()
            .filter_map(|c| self.cell(c))
            .any(|cell| !cell.empty())
    }

    /// Check every placement rule: length, bounds, a straight run along a
    /// row or column in ascending order, and no overlap with placed ships.
    pub fn valid_placement(&self, ship: &SharedShip, coordinates: &[&str]) -> bool {
        if coordinates.len() != ship.length() {
            return false;
        }
        let Some(points) = parse_all(coordinates) else {
            return false;
        };
        if self.diagonal_coordinates(coordinates) {
            return false;
        }
        if !is_run(&points, Orientation::Horizontal) && !is_run(&points, Orientation::Vertical) {
            return false;
        }
        !self.overlap(coordinates)
    }

    /// Put `ship` on each coordinate. No validation is done here; callers
    /// check [`Board::valid_placement`] first.
    pub fn place(&mut self, ship: &SharedShip, coordinates: &[&str]) {
        for coordinate in coordinates {
            if let Some(cell) = self.cell_mut(coordinate) {
                cell.place_ship(ship.clone());
            }
        }
        debug!("placed {} on {:?}", ship.name(), coordinates);
    }

    /// Validate and place in one step.
    pub fn try_place(&mut self, ship: &SharedShip, coordinates: &[&str]) -> Result<(), BoardError> {
        if !self.valid_placement(ship, coordinates) {
            return Err(BoardError::InvalidPlacement);
        }
        self.place(ship, coordinates);
        Ok(())
    }

    /// Pick a random free straight run of `length` cells.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Vec<String>, BoardError> {
        if length == 0 {
            return Err(BoardError::ZeroLengthShip);
        }
        if length > BOARD_SIZE {
            return Err(BoardError::UnableToPlaceShip);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - length),
                Orientation::Vertical => (BOARD_SIZE - length, BOARD_SIZE - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let coords: Vec<String> = (0..length)
                .filter_map(|i| match orient {
                    Orientation::Horizontal => Coordinate::new(r, c + i),
                    Orientation::Vertical => Coordinate::new(r + i, c),
                })
                .map(|c| c.to_string())
                .collect();
            let refs: Vec<&str> = coords.iter().map(String::as_str).collect();
            if !self.overlap(&refs) {
                return Ok(coords);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Fire on `coordinate` and report what was struck.
    pub fn fire(&mut self, coordinate: &str) -> Result<ShotResult, BoardError> {
        let cell = self
            .cell_mut(coordinate)
            .ok_or(BoardError::InvalidCoordinate)?;
        if cell.fired_upon() {
            return Err(BoardError::AlreadyFiredUpon);
        }
        cell.fire_upon();
        let result = match cell.ship() {
            None => ShotResult::Miss,
            Some(ship) if ship.sunk() => ShotResult::Sunk(ship.name()),
            Some(_) => ShotResult::Hit,
        };
        debug!("fire on {} -> {:?}", coordinate, result);
        Ok(result)
    }

    /// Distinct ships placed on the board, in order of first appearance.
    pub fn ships(&self) -> Vec<SharedShip> {
        let mut ships: Vec<SharedShip> = Vec::new();
        for ship in self.cells.iter().filter_map(Cell::ship) {
            if !ships.contains(ship) {
                ships.push(ship.clone());
            }
        }
        ships
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        let ships = self.ships();
        !ships.is_empty() && ships.iter().all(SharedShip::sunk)
    }

    /// Text grid with a column header and one line per row, for example
    /// `"  1 2 3 4 \nA . . . . \n..."`. Each row is its label followed by
    /// every cell's [`Cell::render`] char, each char trailed by a space.
    /// `reveal` is passed through to the cells and shows unhit ships as `S`.
    pub fn render(&self, reveal: bool) -> String {
        let mut out = String::from("  ");
        for col in 1..=BOARD_SIZE {
            let _ = write!(out, "{} ", col);
        }
        out.push('\n');
        for (label, row) in ROW_LABELS.iter().zip(self.cells.chunks(BOARD_SIZE)) {
            out.push(*label);
            out.push(' ');
            for cell in row {
                out.push(cell.render(reveal));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{\n{}\n  ships: {:?}\n}}", self.render(true), self.ships())
    }
}

fn parse_all(coordinates: &[&str]) -> Option<Vec<Coordinate>> {
    coordinates.iter().map(|c| Coordinate::parse(c)).collect()
}

/// Each point is one step further along `orientation` than the previous one.
fn is_run(points: &[Coordinate], orientation: Orientation) -> bool {
    points.windows(2).all(|w| match orientation {
        Orientation::Horizontal => w[0].row() == w[1].row() && w[1].col() == w[0].col() + 1,
        Orientation::Vertical => w[0].col() == w[1].col() && w[1].row() == w[0].row() + 1,
    })
}
