//! The board contract shared by every board encoding

use crate::{error::EngineError, HEIGHT, WIDTH};

/// One of the two sides. `One` always places the first chip.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// The side to move after `num_moves` chips have been placed on an empty board
    pub fn to_move_after(num_moves: usize) -> Self {
        if num_moves % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A Connect 4 position
///
/// Columns are 0-indexed from the left, rows 0-indexed from the bottom.
///
/// # Preconditions
/// `is_winning_move`, `make_move` and `undo_move` are on the search hot path and
/// only check their preconditions with `debug_assert!`. Drivers should go through
/// [`Position::play`], which validates the move and reports an [`EngineError`].
pub trait Position: Clone + Default {
    /// Number of chips placed since the empty board
    fn num_moves(&self) -> usize;

    fn side_to_move(&self) -> Player;

    /// Whether a chip can be dropped into `column`
    fn is_valid_move(&self, column: usize) -> bool;

    /// Whether dropping a chip for the side to move into `column` completes a
    /// line of four. The position is not modified.
    fn is_winning_move(&self, column: usize) -> bool;

    /// Drops a chip for the side to move into `column` and passes the turn
    fn make_move(&mut self, column: usize);

    /// Takes back the last chip dropped into `column` and gives the turn back
    fn undo_move(&mut self, column: usize);

    /// Whether `player` has four chips in a row anywhere on the board
    fn has_won(&self, player: Player) -> bool;

    /// The owner of a single tile, for display
    fn cell(&self, column: usize, row: usize) -> Cell;

    fn is_full(&self) -> bool {
        self.num_moves() == WIDTH * HEIGHT
    }

    /// Whether the side that played the last chip has completed a line
    fn opponent_has_won(&self) -> bool {
        self.has_won(self.side_to_move().other())
    }

    fn is_terminal(&self) -> bool {
        self.is_full() || self.has_won(Player::One) || self.has_won(Player::Two)
    }

    fn state(&self) -> GameState {
        if self.has_won(Player::One) {
            GameState::PlayerOneWin
        } else if self.has_won(Player::Two) {
            GameState::PlayerTwoWin
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }

    /// Plays a move after checking it against the rules
    fn play(&mut self, column: usize) -> Result<(), EngineError> {
        if column >= WIDTH {
            return Err(EngineError::ColumnOutOfRange(column));
        }
        if self.is_terminal() {
            return Err(EngineError::DecidedBoard);
        }
        if !self.is_valid_move(column) {
            return Err(EngineError::ColumnFull(column));
        }
        self.make_move(column);
        Ok(())
    }

    /// Builds a position from a sequence of 1-indexed column digits, e.g. "4453"
    fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, EngineError> {
        let mut board = Self::default();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => board.play(column - 1)?,
                _ => return Err(EngineError::InvalidMoveChar(column_char)),
            }
        }
        Ok(board)
    }
}
