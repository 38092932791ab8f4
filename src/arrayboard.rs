use crate::{
    position::{Cell, Player, Position},
    HEIGHT, WIDTH,
};

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// The grid board encoding, with an owner label for every tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBoard {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    player: Player,
    num_moves: usize,
}
impl ArrayBoard {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            player: Player::One,
            num_moves: 0,
        }
    }

    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            None
        } else {
            Some(self.cells[x as usize + WIDTH * y as usize])
        }
    }
}

impl Position for ArrayBoard {
    fn num_moves(&self) -> usize {
        self.num_moves
    }

    fn side_to_move(&self) -> Player {
        self.player
    }

    fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    fn is_winning_move(&self, column: usize) -> bool {
        debug_assert!(self.is_valid_move(column), "column {} is not playable", column);
        let player = self.player.cell();
        let height = self.heights[column];

        // check vertical alignment
        if height >= 3
            && self.cells[column + WIDTH * (height - 1)] == player
            && self.cells[column + WIDTH * (height - 2)] == player
            && self.cells[column + WIDTH * (height - 3)] == player
        {
            return true;
        }

        // check horizontal and diagonal alignment
        for dy_dx in -1i32..=1 {
            let mut run = 0;
            for dx in [-1i32, 1].iter() {
                let mut x = column as i32 + dx;
                let mut y = height as i32 + dx * dy_dx;
                while self.get(x, y) == Some(player) {
                    x += dx;
                    y += dx * dy_dx;
                    run += 1;
                }
            }
            if run >= 3 {
                return true;
            }
        }

        false
    }

    fn make_move(&mut self, column: usize) {
        debug_assert!(self.is_valid_move(column), "column {} is not playable", column);
        self.cells[column + WIDTH * self.heights[column]] = self.player.cell();
        self.heights[column] += 1;
        self.num_moves += 1;
        self.player = self.player.other();
    }

    fn undo_move(&mut self, column: usize) {
        debug_assert!(self.heights[column] > 0, "no tile to take back in column {}", column);
        self.heights[column] -= 1;
        let index = column + WIDTH * self.heights[column];
        debug_assert!(
            self.cells[index] == self.player.other().cell(),
            "column {} was not played last",
            column
        );
        self.cells[index] = Cell::Empty;
        self.num_moves -= 1;
        self.player = self.player.other();
    }

    fn has_won(&self, player: Player) -> bool {
        let player = player.cell();
        // every tile is tried as the start of a line in all four directions
        (0..WIDTH as i32).any(|x| {
            (0..HEIGHT as i32).any(|y| {
                DIRECTIONS.iter().any(|&(dx, dy)| {
                    (0..4).all(|i| self.get(x + i * dx, y + i * dy) == Some(player))
                })
            })
        })
    }

    fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::new()
    }
}
