//! Snapshot module - plain-data export of the observable game state
//!
//! Observers that re-render on change consume snapshots instead of walking
//! the board cell by cell. [`crate::game_state::Model::snapshot_into`] fills
//! a reusable snapshot without reallocating the row vectors it already owns.

/// Full observable state of a [`crate::game_state::Model`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ModelSnapshot {
    /// Side length of the board
    pub size: usize,
    /// Tile values, `board[row][col]`, row 0 = bottom, 0 = empty
    pub board: Vec<Vec<u32>>,
    pub score: u32,
    pub max_score: u32,
    pub game_over: bool,
}

impl ModelSnapshot {
    /// Value at (col, row), 0 when empty or out of range
    pub fn value_at(&self, col: usize, row: usize) -> u32 {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// True iff a further move could change the board state
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
