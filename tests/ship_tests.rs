use battleship::{Board, BoardError, SharedShip, Ship, ShotResult, SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_new_ship() -> Result<(), BoardError> {
    let ship = Ship::new("Cruiser", 3)?;
    assert_eq!(ship.name(), "Cruiser");
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.health(), 3);
    assert!(!ship.sunk());
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(Ship::new("Dinghy", 0).unwrap_err(), BoardError::ZeroLengthShip);
}

#[test]
fn test_hit_until_sunk() -> Result<(), BoardError> {
    let mut ship = Ship::new("Submarine", 2)?;
    ship.hit();
    assert_eq!(ship.health(), 1);
    assert!(!ship.sunk());
    ship.hit();
    assert!(ship.sunk());
    // further hits are harmless
    ship.hit();
    assert_eq!(ship.health(), 0);
    assert!(ship.sunk());
    Ok(())
}

#[test]
fn test_shared_handle_identity() -> Result<(), BoardError> {
    let a = SharedShip::new(Ship::new("Cruiser", 3)?);
    let b = a.clone();
    let c = SharedShip::new(Ship::new("Cruiser", 3)?);
    assert_eq!(a, b);
    assert_ne!(a, c);

    b.hit();
    assert_eq!(a.health(), 2);
    assert_eq!(c.health(), 3);
    assert_eq!(a.name(), "Cruiser");
    Ok(())
}

#[test]
fn test_fleet_builds() -> Result<(), BoardError> {
    for def in SHIPS.iter() {
        let ship = def.build()?;
        assert_eq!(ship.name(), def.name());
        assert_eq!(ship.health(), def.length());
    }
    Ok(())
}

#[test]
fn test_total_ship_cells_covers_fleet() {
    let sum: usize = SHIPS.iter().map(|s| s.length()).sum();
    assert_eq!(TOTAL_SHIP_CELLS, sum);
}

#[test]
fn test_caller_handle_survives_firing() -> Result<(), BoardError> {
    let mut board = Board::new();
    let sub = SharedShip::new(Ship::new("Submarine", 2)?);
    board.try_place(&sub, &["B1", "C1"])?;

    // the caller's handle can be queried between shots on the board
    assert_eq!(sub.name(), "Submarine");
    assert_eq!(board.fire("B1")?, ShotResult::Hit);
    assert_eq!(sub.health(), 1);
    assert_eq!(board.fire("C1")?, ShotResult::Sunk(String::from("Submarine")));
    assert!(sub.sunk());
    Ok(())
}
