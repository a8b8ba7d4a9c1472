use battleship::{init_logging, play_match, ComputerPlayer};
use log::info;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    init_logging(None);
    info!("simulating seeds {} and {}", seed1, seed2);

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = ComputerPlayer::new();
    let mut p2 = ComputerPlayer::new();

    let summary = play_match([&mut p1, &mut p2], [&mut rng1, &mut rng2])
        .map_err(|e| anyhow::anyhow!(e))?;

    let winner = match summary.winner {
        Some(0) => Some("player1"),
        Some(_) => Some("player2"),
        None => None,
    };

    let result = json!({
        "player1": {"status": summary.status[0], "shots": summary.shots[0]},
        "player2": {"status": summary.status[1], "shots": summary.shots[1]},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
