use crate::{error::EngineError, WIDTH};

/// Returns the columns ordered from the middle outwards, left before right, as
/// the middle columns take part in more lines and are often better moves
pub const fn center_out() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// The order in which the solver visits the columns of every node
///
/// Ordering only affects how much of the tree is pruned, never the score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOrder([usize; WIDTH]);

impl MoveOrder {
    pub const CENTER_OUT: MoveOrder = MoveOrder(center_out());

    /// Creates a custom order, which must contain every column exactly once
    pub fn new(columns: [usize; WIDTH]) -> Result<Self, EngineError> {
        let mut seen = [false; WIDTH];
        for &column in columns.iter() {
            if column >= WIDTH || seen[column] {
                return Err(EngineError::InvalidMoveOrder(columns));
            }
            seen[column] = true;
        }
        Ok(Self(columns))
    }

    pub fn columns(&self) -> &[usize; WIDTH] {
        &self.0
    }
}

impl Default for MoveOrder {
    fn default() -> Self {
        Self::CENTER_OUT
    }
}
