//! Board module - the size x size grid of tiles
//!
//! Cells are stored in a flat vector for cache locality, row-major in the
//! absolute frame (col 0 = left, row 0 = bottom). The board also carries the
//! active viewing perspective and the running score: every merge performed by
//! [`Board::move_tile`] adds the merged value to the score, so the board is
//! the single owner of the score counter.
//!
//! # Perspective discipline
//!
//! Position-taking calls ([`Board::tile`], [`Board::move_tile`]) reinterpret
//! their (col, row) through the active [`Side`] before touching the absolute
//! grid. The perspective is only ever non-North inside
//! [`Board::with_perspective`], which restores North on every exit path;
//! external callers always observe absolute coordinates.

use arrayvec::ArrayVec;

use crate::tile::Tile;
use twenty48_types::{Side, MAX_BOARD_SIZE};

/// Capacity bound for position scratch buffers
const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// The game board - a square grid of optional tiles plus the running score
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col), absolute frame
    cells: Vec<Option<Tile>>,
    /// Active viewing perspective; North outside `with_perspective`
    perspective: Side,
    /// Cumulative sum of merge values
    score: u32,
}

impl Board {
    /// Create a new empty board with the given side length
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in `2..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (2..=MAX_BOARD_SIZE).contains(&size),
            "board size must be in 2..={}, got {}",
            MAX_BOARD_SIZE,
            size
        );
        Self {
            size,
            cells: vec![None; size * size],
            perspective: Side::North,
            score: 0,
        }
    }

    /// Reconstruct a board from raw tile values plus a score
    ///
    /// `values[row][col]` with row 0 = bottom row; 0 means empty. This is the
    /// testing/deserialization entry point.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square, the size is out of range, or any
    /// nonzero value is not a power of two >= 2.
    pub fn from_raw_values(values: &[&[u32]], score: u32) -> Self {
        let size = values.len();
        let mut board = Board::new(size);
        for (row, row_values) in values.iter().enumerate() {
            assert_eq!(
                row_values.len(),
                size,
                "raw value matrix must be square ({} columns in row {})",
                row_values.len(),
                row
            );
            for (col, &value) in row_values.iter().enumerate() {
                if value != 0 {
                    board.cells[row * size + col] = Some(Tile::new(value, col, row));
                }
            }
        }
        board.score = score;
        board
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Running score: the cumulative sum of merge values
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Flat index for perspective-relative (col, row)
    ///
    /// # Panics
    ///
    /// Panics when the position is out of range; out-of-range coordinates are
    /// a programming error, never silently corrected.
    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.size && row < self.size,
            "position ({}, {}) out of range for board of size {}",
            col,
            row,
            self.size
        );
        let abs_col = self.perspective.abs_col(col, row, self.size);
        let abs_row = self.perspective.abs_row(col, row, self.size);
        abs_row * self.size + abs_col
    }

    /// The tile at perspective-relative (col, row), if any
    ///
    /// Identity-frame (absolute) read whenever the perspective is North,
    /// which is always the case outside [`Board::with_perspective`].
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells[self.index(col, row)]
    }

    /// Run `f` with the viewing perspective set to `side`
    ///
    /// North is restored before returning, on every exit path, so no caller
    /// can observe a rotated board after this returns.
    pub fn with_perspective<F, R>(&mut self, side: Side, f: F) -> R
    where
        F: FnOnce(&mut Board) -> R,
    {
        self.perspective = side;
        let out = f(self);
        self.perspective = Side::North;
        out
    }

    /// Place `tile` at its own (absolute) position
    ///
    /// # Panics
    ///
    /// Panics if the target cell is already occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        debug_assert_eq!(self.perspective, Side::North);
        let idx = self.index(tile.col(), tile.row());
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already occupied",
            tile.col(),
            tile.row()
        );
        self.cells[idx] = Some(tile);
    }

    /// Relocate `tile` to perspective-relative (col, row), merging on contact
    ///
    /// If the destination holds a tile (of equal value; the tilt scan only
    /// moves onto equal neighbors), the two merge into a doubled tile at the
    /// destination and the merge value is added to the score. Returns whether
    /// a merge happened. Moving a tile onto its own cell is a legal no-op.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        let dst = self.index(col, row);
        let src = tile.row() * self.size + tile.col();
        debug_assert_eq!(
            self.cells[src],
            Some(tile),
            "moved tile is not on the board at its recorded position"
        );
        if src == dst {
            return false;
        }

        let abs_col = dst % self.size;
        let abs_row = dst / self.size;
        let merged = match self.cells[dst] {
            Some(occupant) => {
                let survivor = tile.merged_into(occupant);
                self.score += survivor.value();
                self.cells[dst] = Some(survivor);
                true
            }
            None => {
                self.cells[dst] = Some(tile.moved_to(abs_col, abs_row));
                false
            }
        };
        self.cells[src] = None;
        merged
    }

    /// Empty all cells and reset the score to 0
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.score = 0;
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Absolute (col, row) of every empty cell, row-major, zero-allocation
    pub fn empty_positions(&self) -> ArrayVec<(u8, u8), MAX_CELLS> {
        let mut positions = ArrayVec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col].is_none() {
                    positions.push((col as u8, row as u8));
                }
            }
        }
        positions
    }
}
