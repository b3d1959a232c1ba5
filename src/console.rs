//! Interactive console front end: coordinate entry, board rendering, and
//! the game loop against the computer.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::BOARD_SIZE;
use crate::grid::Grid;
use crate::session::{GameSession, Phase};
use crate::ship::Orientation;

fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse `"B4"`-style input into zero-based (row, col).
fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

fn print_board(grid: &Grid) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            match grid.get(r, c) {
                Ok(cell) => print!(" {}", cell.symbol()),
                Err(_) => print!(" ?"),
            }
        }
        println!();
    }
}

fn read_line() -> io::Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn place_fleet(session: &mut GameSession, rng: &mut SmallRng) -> anyhow::Result<()> {
    println!("Place your ships (e.g. A5 H). Press enter for random placement.");
    while let Some(class) = session.pending_ship() {
        print_board(&session.player_board().own_view());
        print!("Place {} (length {}): ", class.name(), class.length());
        let line = read_line()?;
        if line.is_empty() {
            session.place_next_ship_randomly(rng)?;
            continue;
        }
        let mut parts = line.split_whitespace();
        let coord = parts.next().and_then(parse_coord);
        let orientation = match parts.next().map(|p| p.to_ascii_uppercase()) {
            Some(ref p) if p.starts_with('V') => Orientation::Vertical,
            _ => Orientation::Horizontal,
        };
        match coord {
            Some((row, col)) => {
                if let Err(e) = session.place_player_ship(row, col, orientation) {
                    println!("Error: {}", e);
                }
            }
            None => println!("Invalid input"),
        }
    }
    Ok(())
}

/// Run a full interactive game against the computer.
pub fn run_interactive(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    };
    let mut session = GameSession::new(&mut rng)?;
    place_fleet(&mut session, &mut rng)?;

    loop {
        match session.phase() {
            Phase::PlayerTurn => {
                println!("\nOpponent board:");
                print_board(&session.computer_board().tracking_view());
                println!("\nYour board:");
                print_board(&session.player_board().own_view());
                print!("Enter guess (e.g. B4): ");
                let line = read_line()?;
                let (row, col) = match parse_coord(&line) {
                    Some(coord) => coord,
                    None => {
                        println!("Invalid coordinate");
                        continue;
                    }
                };
                match session.player_shot(row, col) {
                    Ok(outcome) => {
                        println!("You fired at {} -> {}", coord_to_string(row, col), outcome)
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            Phase::ComputerTurn => {
                for shot in session.computer_turn(&mut rng)? {
                    println!(
                        "Computer fired at {} -> {}",
                        coord_to_string(shot.row, shot.col),
                        shot.outcome
                    );
                }
            }
            Phase::PlayerWon => {
                println!("\nYou sank the entire enemy fleet. Victory!");
                break;
            }
            Phase::ComputerWon => {
                println!("\nYour board:");
                print_board(&session.player_board().own_view());
                println!("The computer sank your fleet. Defeat.");
                break;
            }
            Phase::Placement => break,
        }
    }
    Ok(())
}
