use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::{
    board::Board,
    common::ShotResult,
    config::SHIPS,
    coordinate::Coordinate,
    ship::SharedShip,
    BoardError,
};

use crate::player::Player;

/// Computer player: random placement, random fire at cells not yet targeted.
#[derive(Debug, Default)]
pub struct ComputerPlayer;

impl ComputerPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Place every ship of the standard fleet at random free positions.
pub fn place_fleet_randomly(rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
    for def in SHIPS.iter() {
        let ship = SharedShip::new(def.build()?);
        let coords = board.random_placement(rng, def.length())?;
        let refs: Vec<&str> = coords.iter().map(String::as_str).collect();
        board.try_place(&ship, &refs)?;
    }
    Ok(())
}

impl Player for ComputerPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        place_fleet_randomly(rng, board)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        shots: &[(String, ShotResult)],
    ) -> Option<String> {
        let open: Vec<String> = Coordinate::all()
            .map(|c| c.to_string())
            .filter(|c| !shots.iter().any(|(s, _)| s == c))
            .collect();
        open.choose(rng).cloned()
    }
}
