use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    config::TOTAL_SHIP_CELLS,
    coordinate::Coordinate,
    player::Player,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic holding the player's board and the shots it has made.
pub struct GameEngine {
    board: Board,
    shots: Vec<(String, ShotResult)>,
    enemy_remaining: usize,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create a new engine with an empty board and no shots recorded.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            shots: Vec::new(),
            enemy_remaining: TOTAL_SHIP_CELLS,
        }
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Immutable reference to the player's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shots made against the opponent, oldest first.
    pub fn shots(&self) -> &[(String, ShotResult)] {
        &self.shots
    }

    /// Handle an opponent shot on the player's board.
    pub fn opponent_fire(&mut self, coordinate: &str) -> Result<ShotResult, BoardError> {
        self.board.fire(coordinate)
    }

    /// Record the result of a shot made against the opponent.
    pub fn record_shot(&mut self, coordinate: &str, result: ShotResult) -> Result<(), BoardError> {
        if Coordinate::parse(coordinate).is_none() {
            return Err(BoardError::InvalidCoordinate);
        }
        if self.shots.iter().any(|(c, _)| c == coordinate) {
            return Err(BoardError::AlreadyFiredUpon);
        }
        if result.is_hit() {
            self.enemy_remaining = self.enemy_remaining.saturating_sub(1);
        }
        self.shots.push((String::from(coordinate), result));
        Ok(())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Lost
        } else if self.enemy_remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    /// Index of the winning player, `None` if a player stopped early.
    pub winner: Option<usize>,
    /// Final status of each player.
    pub status: [GameStatus; 2],
    /// Shots taken by each player.
    pub shots: [usize; 2],
}

/// Run a full match. Player 0 fires first; players alternate until one has
/// sunk the other's fleet or a player returns no target.
pub fn play_match(
    mut players: [&mut dyn Player; 2],
    mut rngs: [&mut SmallRng; 2],
) -> Result<MatchSummary, BoardError> {
    let mut engines = [GameEngine::new(), GameEngine::new()];

    for i in 0..2 {
        players[i].place_ships(&mut *rngs[i], engines[i].board_mut())?;
    }

    let mut turn = 0;
    let winner = loop {
        let me = turn % 2;
        let them = 1 - me;
        players[me].show_boards(engines[me].board(), engines[them].board());
        let Some(target) = players[me].select_target(&mut *rngs[me], engines[me].shots()) else {
            info!("player {} stopped after {} shots", me, engines[me].shots().len());
            break None;
        };
        let result = engines[them].opponent_fire(&target)?;
        debug!("player {} fired on {} -> {:?}", me, target, result);
        engines[me].record_shot(&target, result.clone())?;
        players[me].handle_shot_result(&target, &result);
        players[them].handle_opponent_shot(&target, &result);
        if engines[them].status() == GameStatus::Lost {
            break Some(me);
        }
        turn += 1;
    };

    if let Some(w) = winner {
        info!("player {} won after {} turns", w, turn + 1);
    }
    for i in 0..2 {
        players[i].show_boards(engines[i].board(), engines[1 - i].board());
    }

    Ok(MatchSummary {
        winner,
        status: [engines[0].status(), engines[1].status()],
        shots: [engines[0].shots().len(), engines[1].shots().len()],
    })
}
