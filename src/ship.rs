//! Ship definitions and the shared handle cells use to reference them.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Build a fresh, undamaged ship of this type.
    pub fn build(&self) -> Result<Ship, BoardError> {
        Ship::new(self.name, self.length)
    }
}

/// A ship with its remaining health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    length: usize,
    health: usize,
}

impl Ship {
    /// Create a ship at full health. Zero-length ships are rejected.
    pub fn new(name: impl Into<String>, length: usize) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::ZeroLengthShip);
        }
        Ok(Ship {
            name: name.into(),
            length,
            health: length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn health(&self) -> usize {
        self.health
    }

    /// Take one point of damage. Hits on a sunk ship have no effect.
    pub fn hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn sunk(&self) -> bool {
        self.health == 0
    }
}

/// Reference-counted handle to a [`Ship`] shared by every cell it covers.
///
/// Equality is identity: two handles are equal only when they point at the
/// same ship, so two distinct ships with the same name never compare equal.
#[derive(Clone)]
pub struct SharedShip(Rc<RefCell<Ship>>);

impl SharedShip {
    pub fn new(ship: Ship) -> Self {
        SharedShip(Rc::new(RefCell::new(ship)))
    }

    pub fn hit(&self) {
        self.0.borrow_mut().hit();
    }

    pub fn sunk(&self) -> bool {
        self.0.borrow().sunk()
    }

    pub fn health(&self) -> usize {
        self.0.borrow().health()
    }

    pub fn length(&self) -> usize {
        self.0.borrow().length()
    }

    pub fn name(&self) -> String {
        String::from(self.0.borrow().name())
    }
}

impl From<Ship> for SharedShip {
    fn from(ship: Ship) -> Self {
        SharedShip::new(ship)
    }
}

impl PartialEq for SharedShip {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SharedShip {}

impl fmt::Debug for SharedShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ship = self.0.borrow();
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, health: {} }}",
            ship.name, ship.length, ship.health
        )
    }
}
