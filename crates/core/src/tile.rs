//! Tile module - the immutable value object stored in board cells
//!
//! A tile is a value (always a positive power of two) plus the (col, row)
//! position it occupied when it was created or last moved. Relocation
//! produces the same value at a new position; a merge produces a *new* tile
//! of doubled value at the destination, and the two merged-away tiles cease
//! to exist on the board.

/// A numbered tile at a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: u8,
    row: u8,
}

impl Tile {
    /// Create a tile with `value` at (col, row)
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a power of two >= 2. The engine never creates
    /// tile values itself; this guards the domain invariant on inputs.
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        assert!(
            value >= 2 && value.is_power_of_two(),
            "tile value must be a power of two >= 2, got {}",
            value
        );
        Self {
            value,
            col: col as u8,
            row: row as u8,
        }
    }

    /// The tile's value (2, 4, 8, ...)
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Absolute column of the cell holding this tile
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Absolute row of the cell holding this tile
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// The same tile relocated to (col, row)
    pub(crate) fn moved_to(self, col: usize, row: usize) -> Self {
        Self {
            value: self.value,
            col: col as u8,
            row: row as u8,
        }
    }

    /// The doubled tile produced by merging this tile into `other`'s cell
    ///
    /// Caller guarantees equal values; both inputs are consumed.
    pub(crate) fn merged_into(self, other: Tile) -> Self {
        debug_assert_eq!(self.value, other.value, "merging unequal tiles");
        Self {
            value: self.value * 2,
            col: other.col,
            row: other.row,
        }
    }
}
