use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use connect4_engine::{
    solver::win_ply, BitBoard, GameState, Player, Position, Solver, HEIGHT, WIDTH,
};

mod display;
use display::display;

/// Play Connect 4 against a fixed-depth negamax engine
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of plies the engine searches for every move
    #[arg(value_parser = clap::value_parser!(u32).range(1..=(WIDTH * HEIGHT) as i64))]
    depth: u32,

    /// Starting position as a string of 1-indexed columns, e.g. "4453"
    #[arg(long, default_value = "")]
    moves: String,

    /// Let the human place the first chip
    #[arg(long)]
    human_first: bool,

    /// Let the engine play both sides
    #[arg(long)]
    self_play: bool,

    /// Print the score of every column before each engine move
    #[arg(long)]
    analyse: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let depth = args.depth as usize;
    let mut board = BitBoard::from_moves(&args.moves)?;
    let engine_player = if args.human_first {
        Player::Two
    } else {
        Player::One
    };

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display(&board)?;

        match board.state() {
            GameState::Playing => {
                let player = board.side_to_move();
                let player_number = if player == Player::One { 1 } else { 2 };

                // AI player
                if args.self_play || player == engine_player {
                    let mut solver = Solver::new(board);

                    if args.analyse {
                        let scores = solver.analyse(depth)?;
                        let line: Vec<String> = scores
                            .iter()
                            .map(|score| match score {
                                Some(score) => score.to_string(),
                                None => "-".to_string(),
                            })
                            .collect();
                        println!("Column scores: {}", line.join(" "));
                    }

                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("AI is thinking...");
                    spinner.enable_steady_tick(100);
                    let (score, best_move) = solver.search(depth)?;
                    spinner.finish_and_clear();

                    match (score.cmp(&0), win_ply(score)) {
                        (Ordering::Greater, Some(ply)) => println!(
                            "Player {} can force a win by move {}.",
                            player_number, ply
                        ),
                        (Ordering::Less, Some(ply)) => println!(
                            "Player {} can force a win by move {}.",
                            3 - player_number,
                            ply
                        ),
                        _ => println!("No forced result within {} plies", depth),
                    }

                    println!("Best move: {}", best_move + 1);
                    board.play(best_move)?;

                // human player
                } else {
                    print!("Player {} move input > ", player_number);
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        // end of input
                        break;
                    }

                    let column = match input_str.trim().parse::<usize>() {
                        Ok(column @ 1..=WIDTH) => column - 1,
                        _ => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                    };

                    if !board.is_valid_move(column) {
                        println!("Invalid move, column {} full", column + 1);
                        // try the move again
                        continue;
                    }
                    board.play(column)?;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
