//! Common types for Battleship: board errors and shot results.

use alloc::string::String;

/// Result of firing on a single coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot landed on an empty cell.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sunk(String),
}

impl ShotResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ships must occupy at least one cell.
    ZeroLengthShip,
    /// Coordinate label is not on the board.
    InvalidCoordinate,
    /// Coordinates do not form a legal placement for the ship.
    InvalidPlacement,
    /// Cell was already fired upon.
    AlreadyFiredUpon,
    /// Random placement could not find free space.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ZeroLengthShip => write!(f, "Ship length must be positive"),
            BoardError::InvalidCoordinate => write!(f, "Coordinate is not on the board"),
            BoardError::InvalidPlacement => write!(f, "Coordinates are not a valid placement"),
            BoardError::AlreadyFiredUpon => write!(f, "Coordinate was already fired upon"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
