//! A fixed-depth agent for Connect 4

use tracing::{debug, trace};

use crate::{
    bitboard::BitBoard, error::EngineError, move_order::MoveOrder, position::Position, HEIGHT,
    WIDTH,
};

/// Bound on the magnitude of every score, used as infinity for the root window
pub const SCORE_BOUND: i32 = (WIDTH * HEIGHT + 1) as i32;

/// The score of a win with the tile placed at ply `ply` (1-indexed)
pub const fn win_score(ply: usize) -> i32 {
    SCORE_BOUND - ply as i32
}

/// The ply at which the game ends for a non-zero score
pub fn win_ply(score: i32) -> Option<usize> {
    match score {
        0 => None,
        _ => Some((SCORE_BOUND - score.abs()) as usize),
    }
}

/// Finds the best move for the side to move, searching `depth` plies
///
/// Convenience wrapper that runs a [`Solver`] with the default move order on a copy
/// of `board`.
pub fn find_best_move<P: Position>(board: &P, depth: usize) -> Result<usize, EngineError> {
    Solver::new(board.clone()).find_best_move(depth)
}

/// A depth-limited agent for Connect 4 positions
///
/// # Notes
/// This agent uses negamax with alpha-beta pruning down to a fixed depth. There is no
/// heuristic evaluation: a position at the depth horizon scores as a draw, so the
/// search only finds wins and losses that can be forced inside the horizon.
///
/// The solver owns its board and walks the game tree by playing a move and taking it
/// back again, so no board is copied during a search.
///
/// # Position Scoring
/// A win with the tile placed at ply `p` (counting from 1 on the empty board) scores
/// `WIDTH * HEIGHT + 1 - p` for the winner and the negation for the loser, so faster wins
/// score higher and slower losses score higher. Draws and positions at the depth horizon
/// score 0. Scores are always from the point of view of the side to move.
#[derive(Clone, Debug)]
pub struct Solver<P: Position = BitBoard> {
    board: P,
    move_order: MoveOrder,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl<P: Position> Solver<P> {
    /// Creates a new `Solver` from a board, visiting columns from the center outwards
    pub fn new(board: P) -> Self {
        Self {
            board,
            move_order: MoveOrder::default(),
            node_count: 0,
        }
    }

    /// Replaces the column order of an existing `Solver`
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }

    pub fn into_board(self) -> P {
        self.board
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position (see [Position Scoring]) when searched `depth`
    /// plies deep within the window `alpha..beta`
    ///
    /// [Position Scoring]: #position-scoring
    pub fn negamax(&mut self, depth: usize, mut alpha: i32, beta: i32) -> i32 {
        self.node_count += 1;

        // the previous player completed a line with their last tile
        if self.board.opponent_has_won() {
            return -win_score(self.board.num_moves());
        }
        // check for draw, or the depth horizon
        if self.board.is_full() || depth == 0 {
            return 0;
        }

        // check for next-move win for current player
        for column in 0..WIDTH {
            if self.board.is_valid_move(column) && self.board.is_winning_move(column) {
                return win_score(self.board.num_moves() + 1);
            }
        }

        let mut best = None;
        let move_order = self.move_order;
        for &column in move_order.columns() {
            if !self.board.is_valid_move(column) {
                continue;
            }
            self.board.make_move(column);
            // the search window is flipped for the other player
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.board.undo_move(column);

            best = Some(best.map_or(score, |best: i32| best.max(score)));
            if score > alpha {
                alpha = score;
            }
            // a perfect opponent will not let the game reach this node, prune the siblings
            if alpha >= beta {
                break;
            }
        }

        // full boards were scored above, so there is always a legal move here
        debug_assert!(best.is_some(), "no legal move in a non-terminal position");
        best.unwrap_or(0)
    }

    /// Calculate the score and best move of the current position, searching `depth` plies
    ///
    /// The best move is the first column in move order that reaches the best score. A
    /// depth of 0 is treated as 1, as the root always plays a move.
    pub fn search(&mut self, depth: usize) -> Result<(i32, usize), EngineError> {
        if self.board.is_terminal() {
            return Err(EngineError::DecidedBoard);
        }
        self.node_count += 1;

        // check for win for current player on this move
        for column in 0..WIDTH {
            if self.board.is_valid_move(column) && self.board.is_winning_move(column) {
                let score = win_score(self.board.num_moves() + 1);
                debug!(depth, column, score, "immediate win");
                return Ok((score, column));
            }
        }

        let mut alpha = -SCORE_BOUND;
        let beta = SCORE_BOUND;
        let mut best: Option<(i32, usize)> = None;

        let move_order = self.move_order;
        for &column in move_order.columns() {
            if !self.board.is_valid_move(column) {
                continue;
            }
            self.board.make_move(column);
            let score = -self.negamax(depth.saturating_sub(1), -beta, -alpha);
            self.board.undo_move(column);

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, column));
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        // the board isn't full, so some column was searched
        let (score, column) = best.ok_or(EngineError::DecidedBoard)?;
        debug!(depth, column, score, nodes = self.node_count, "search finished");
        Ok((score, column))
    }

    /// Calculate the best move of the current position, searching `depth` plies
    pub fn find_best_move(&mut self, depth: usize) -> Result<usize, EngineError> {
        self.search(depth).map(|(_, column)| column)
    }

    /// Calculates the exact score of every column, searching `depth` plies
    ///
    /// Each column is searched with a full window, so scores of moves worse than the
    /// best one are exact rather than bounds. Full columns are `None`.
    pub fn analyse(&mut self, depth: usize) -> Result<[Option<i32>; WIDTH], EngineError> {
        if self.board.is_terminal() {
            return Err(EngineError::DecidedBoard);
        }
        let mut scores = [None; WIDTH];

        for column in 0..WIDTH {
            if !self.board.is_valid_move(column) {
                continue;
            }
            let score = if self.board.is_winning_move(column) {
                win_score(self.board.num_moves() + 1)
            } else {
                self.board.make_move(column);
                let score = -self.negamax(depth.saturating_sub(1), -SCORE_BOUND, SCORE_BOUND);
                self.board.undo_move(column);
                score
            };
            trace!(depth, column, score, "analysed column");
            scores[column] = Some(score);
        }
        Ok(scores)
    }
}

impl<P: Position> std::ops::Deref for Solver<P> {
    type Target = P;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
