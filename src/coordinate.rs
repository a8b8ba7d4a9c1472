//! Parsing and formatting of two-character coordinate labels such as `B3`.

use core::fmt;

use crate::config::{BOARD_SIZE, ROW_LABELS};

/// Zero-based (row, column) position of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Returns `None` when the position is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Coordinate { row, col })
    }

    /// Parse a label: one row letter followed by one column digit.
    /// Labels of any other length are rejected, so `A22` is not `A2`.
    pub fn parse(label: &str) -> Option<Self> {
        let &[letter, digit] = label.as_bytes() else {
            return None;
        };
        let row = ROW_LABELS.iter().position(|&l| l as u8 == letter)?;
        let col = (digit as usize).checked_sub(b'1' as usize)?;
        Coordinate::new(row, col)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Position in row-major order.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// All board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LABELS[self.row], self.col + 1)
    }
}
