use std::io::{self, BufRead, Write};

use battleship::{init_logging, play_match, CliPlayer, ComputerPlayer};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Play Battleship against the computer on a 4x4 board")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show the computer's ships while playing")]
    reveal: bool,
    #[arg(long, help = "Log level (error, warn, info, debug, trace); overrides BATTLESHIP_LOG")]
    log_level: Option<String>,
}

fn seeded(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    if let Some(s) = cli.seed {
        info!("using fixed seed {}", s);
    }

    let mut games = 0u64;
    loop {
        println!("Welcome to BATTLESHIP");
        print!("Enter p to play. Enter q to quit. ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "p" => {}
            "q" => return Ok(()),
            _ => continue,
        }

        let mut human_rng = seeded(cli.seed, games * 2);
        let mut computer_rng = seeded(cli.seed, games * 2 + 1);
        let mut human = CliPlayer::stdio(cli.reveal);
        let mut computer = ComputerPlayer::new();
        let summary = play_match(
            [&mut human, &mut computer],
            [&mut human_rng, &mut computer_rng],
        )
        .map_err(|e| anyhow::anyhow!(e))?;

        match summary.winner {
            Some(0) => println!("You won!"),
            Some(_) => println!("I won!"),
            None => return Ok(()),
        }
        games += 1;
    }
}
