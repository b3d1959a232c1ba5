//! Headless simulator: plays one full game with both sides firing at
//! random, printing a JSON summary line.

use broadside::{select_random_target, GameSession, Phase};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(&mut rng)?;
    session.place_player_fleet_randomly(&mut rng)?;

    let mut player_shots = 0usize;
    let mut computer_shots = 0usize;
    while !session.phase().is_terminal() {
        match session.phase() {
            Phase::PlayerTurn => {
                let (row, col) = select_random_target(session.computer_board().grid(), &mut rng)
                    .ok_or_else(|| anyhow::anyhow!("no targets left"))?;
                session.player_shot(row, col)?;
                player_shots += 1;
            }
            Phase::ComputerTurn => {
                computer_shots += session.computer_turn(&mut rng)?.len();
            }
            _ => break,
        }
    }

    let winner = match session.phase() {
        Phase::PlayerWon => Some("player"),
        Phase::ComputerWon => Some("computer"),
        _ => None,
    };

    let result = json!({
        "seed": seed,
        "winner": winner,
        "player_shots": player_shots,
        "computer_shots": computer_shots,
        "player_hits": session.player_hits(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
