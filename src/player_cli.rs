#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    board::Board,
    common::ShotResult,
    config::SHIPS,
    coordinate::Coordinate,
    ship::SharedShip,
    BoardError,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading coordinates from `input` and writing prompts and
/// boards to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    reveal_opponent: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the terminal.
    pub fn stdio(reveal_opponent: bool) -> Self {
        CliPlayer::new(io::stdin().lock(), io::stdout(), reveal_opponent)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W, reveal_opponent: bool) -> Self {
        Self {
            input,
            output,
            reveal_opponent,
        }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, message: &str) {
        // Display is best effort; a closed terminal shows up on the next read.
        let _ = writeln!(self.output, "{}", message);
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{} ", prompt);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_ascii_uppercase()),
        }
    }
}

fn describe(result: &ShotResult) -> String {
    match result {
        ShotResult::Hit => String::from("a hit"),
        ShotResult::Miss => String::from("a miss"),
        ShotResult::Sunk(name) => format!("a hit, and the {} is sunk", name),
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        self.say("Lay out your ships. Press enter for a random placement.");
        for def in SHIPS.iter() {
            let ship = SharedShip::new(def.build()?);
            self.say(&board.render(true));
            let prompt = format!(
                "Enter the squares for the {} ({} spaces):",
                def.name(),
                def.length()
            );
            let mut line = self.ask(&prompt);
            loop {
                match line.as_deref() {
                    None | Some("") => {
                        let coords = board.random_placement(rng, def.length())?;
                        let refs: Vec<&str> = coords.iter().map(String::as_str).collect();
                        board.try_place(&ship, &refs)?;
                        self.say(&format!("Placed the {} on {}", def.name(), refs.join(" ")));
                        break;
                    }
                    Some(text) => {
                        let coords: Vec<&str> = text.split_whitespace().collect();
                        if board.valid_placement(&ship, &coords) {
                            board.place(&ship, &coords);
                            break;
                        }
                    }
                }
                line = self.ask("Those are invalid coordinates. Please try again:");
            }
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        shots: &[(String, ShotResult)],
    ) -> Option<String> {
        let mut line = self.ask("Enter the coordinate for your shot:")?;
        loop {
            if Coordinate::parse(&line).is_none() {
                line = self.ask("Please enter a valid coordinate:")?;
            } else if shots.iter().any(|(c, _)| *c == line) {
                line = self.ask("You already fired on that coordinate. Pick another:")?;
            } else {
                return Some(line);
            }
        }
    }

    fn show_boards(&mut self, own: &Board, opponent: &Board) {
        let opponent = opponent.render(self.reveal_opponent);
        self.say("=============COMPUTER BOARD=============");
        self.say(&opponent);
        self.say("==============PLAYER BOARD==============");
        self.say(&own.render(true));
    }

    fn handle_shot_result(&mut self, coordinate: &str, result: &ShotResult) {
        self.say(&format!("Your shot on {} was {}.", coordinate, describe(result)));
    }

    fn handle_opponent_shot(&mut self, coordinate: &str, result: &ShotResult) {
        self.say(&format!("My shot on {} was {}.", coordinate, describe(result)));
    }
}
