use crate::{
    position::{Cell, Player, Position},
    HEIGHT, WIDTH,
};

mod static_masks {
    use crate::{HEIGHT, WIDTH};

    pub const fn bottom_mask() -> u64 {
        let mut mask = 0;
        let mut column = 0;
        while column < WIDTH {
            mask |= 1 << (column * (HEIGHT + 1));
            column += 1;
        }
        mask
    }
    pub const fn full_board_mask() -> u64 {
        bottom_mask() * ((1 << HEIGHT as u64) - 1)
    }
}

/// The compact board encoding
///
/// Each column takes `HEIGHT + 1` bits, bottom tile first. The extra bit on top
/// of every column is never set, so runs of tiles can't wrap from the top of one
/// column into the bottom of the next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitBoard {
    // mask of the current player's tiles
    player_mask: u64,
    // mask of all tiles
    board_mask: u64,
    num_moves: usize,
}
impl BitBoard {
    pub fn new() -> Self {
        Self {
            player_mask: 0,
            board_mask: 0,
            num_moves: 0,
        }
    }

    pub fn from_masks(player_mask: u64, board_mask: u64, num_moves: usize) -> Self {
        debug_assert!(player_mask & !board_mask == 0, "player tiles must be on the board");
        debug_assert!(board_mask & !static_masks::full_board_mask() == 0, "tile in a guard row");
        Self {
            player_mask,
            board_mask,
            num_moves,
        }
    }

    pub fn player_mask(&self) -> u64 {
        self.player_mask
    }

    pub fn board_mask(&self) -> u64 {
        self.board_mask
    }

    /// Tiles of the player who made the last move
    pub fn opponent_mask(&self) -> u64 {
        self.player_mask ^ self.board_mask
    }

    pub fn top_mask(column: usize) -> u64 {
        1 << (column * (HEIGHT + 1) + (HEIGHT - 1))
    }

    pub fn bottom_mask(column: usize) -> u64 {
        1 << (column * (HEIGHT + 1))
    }

    pub fn column_mask(column: usize) -> u64 {
        ((1 << HEIGHT) - 1) << (column * (HEIGHT + 1))
    }

    pub fn cell_mask(column: usize, row: usize) -> u64 {
        1 << (column * (HEIGHT + 1) + row)
    }

    /// Checks a set of tiles for four in a row in any direction
    pub fn check_win(pos: u64) -> bool {
        // check horizontal alignment
        // mark all horizontal runs of 2
        let mut m = pos & (pos >> (HEIGHT + 1));
        // check for runs of 2 * (runs of 2)
        if m & (m >> (2 * (HEIGHT + 1))) != 0 {
            return true;
        }

        // check diagonal alignment \
        m = pos & (pos >> HEIGHT);
        if m & (m >> (2 * HEIGHT)) != 0 {
            return true;
        }

        // check diagonal alignment /
        m = pos & (pos >> (HEIGHT + 2));
        if m & (m >> (2 * (HEIGHT + 2))) != 0 {
            return true;
        }

        // check vertical alignment
        m = pos & (pos >> 1);
        if m & (m >> 2) != 0 {
            return true;
        }

        // no alignments
        false
    }

    // the lowest free tile of a column, or 0 if the column is full
    fn move_bitmap(&self, column: usize) -> u64 {
        (self.board_mask + Self::bottom_mask(column)) & Self::column_mask(column)
    }
}

impl Position for BitBoard {
    fn num_moves(&self) -> usize {
        self.num_moves
    }

    fn side_to_move(&self) -> Player {
        Player::to_move_after(self.num_moves)
    }

    fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && Self::top_mask(column) & self.board_mask == 0
    }

    fn is_winning_move(&self, column: usize) -> bool {
        debug_assert!(self.is_valid_move(column), "column {} is not playable", column);
        // play the move on a copy of the tiles, keeping the current player
        Self::check_win(self.player_mask | self.move_bitmap(column))
    }

    fn make_move(&mut self, column: usize) {
        debug_assert!(self.is_valid_move(column), "column {} is not playable", column);
        let move_bitmap = self.move_bitmap(column);
        // switch the current player
        self.player_mask ^= self.board_mask;
        // add a cell of the previous player to the correct column
        self.board_mask |= move_bitmap;
        self.num_moves += 1;
    }

    fn undo_move(&mut self, column: usize) {
        let column_tiles = self.board_mask & Self::column_mask(column);
        debug_assert!(column_tiles != 0, "no tile to take back in column {}", column);
        // the highest tile of the column was the last one played there
        let top_tile = 1 << (63 - column_tiles.leading_zeros());
        debug_assert!(self.opponent_mask() & top_tile != 0, "column {} was not played last", column);
        self.board_mask ^= top_tile;
        // switch back to the previous player
        self.player_mask ^= self.board_mask;
        self.num_moves -= 1;
    }

    fn has_won(&self, player: Player) -> bool {
        if player == self.side_to_move() {
            Self::check_win(self.player_mask)
        } else {
            Self::check_win(self.opponent_mask())
        }
    }

    fn opponent_has_won(&self) -> bool {
        Self::check_win(self.opponent_mask())
    }

    fn cell(&self, column: usize, row: usize) -> Cell {
        let tile_mask = Self::cell_mask(column, row);
        if self.board_mask & tile_mask == 0 {
            Cell::Empty
        } else if self.player_mask & tile_mask != 0 {
            self.side_to_move().cell()
        } else {
            self.side_to_move().other().cell()
        }
    }
}

impl Default for BitBoard {
    fn default() -> Self {
        Self::new()
    }
}
