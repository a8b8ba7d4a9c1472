use alloc::string::String;

use rand::rngs::SmallRng;

use crate::{board::Board, common::ShotResult, BoardError};

/// Interface implemented by different player types.
pub trait Player {
    /// Place the whole fleet onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next coordinate to fire on given the shots made so far.
    /// Returning `None` ends the match without a winner.
    fn select_target(&mut self, rng: &mut SmallRng, shots: &[(String, ShotResult)])
        -> Option<String>;

    /// Called before each of the player's turns with both boards.
    fn show_boards(&mut self, _own: &Board, _opponent: &Board) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coordinate: &str, _result: &ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coordinate: &str, _result: &ShotResult) {}
}
