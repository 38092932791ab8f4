//! A fixed-depth agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited negamax search with alpha-beta pruning
//! to find the best move for any position within a given number of plies.
//! Positions at the depth horizon are scored as draws, so only forced
//! wins and losses inside the search window ever score away from 0.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{bitboard::BitBoard, position::Position, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut solver = Solver::new(BitBoard::from_moves("414246")?);
//! let (score, best_move) = solver.search(4)?;
//!
//! assert!((score, best_move) == (36, 3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod position;

pub mod bitboard;

pub mod arrayboard;

pub mod move_order;

pub mod solver;


pub use bitboard::BitBoard;
pub use error::EngineError;
pub use position::{Cell, GameState, Player, Position};
pub use solver::{find_best_move, Solver};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that the given dimensions fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) < 64);
// a line of four has to fit somewhere
const_assert!(WIDTH >= 4 || HEIGHT >= 4);
