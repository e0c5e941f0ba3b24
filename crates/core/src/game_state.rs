//! Game state module - the model wrapping a board with game lifecycle
//!
//! [`Model`] ties the core components together: it owns the [`Board`], runs
//! the tilt scan, tracks the max score ever reached, caches the game-over
//! flag, and raises a dirty flag for observers after every mutating call that
//! altered the board.
//!
//! The game-over flag is recomputed eagerly after each mutation, so queries
//! take `&self`. The max score is raised to the running score exactly when a
//! recomputation finds the game over.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::board::Board;
use crate::rules::{at_least_one_move_exists, max_tile_exists};
use crate::snapshot::ModelSnapshot;
use crate::tile::Tile;
use crate::tilt::tilt_board;
use twenty48_types::{Side, FOUR_TILE_PROBABILITY};

/// The complete state of a game
#[derive(Debug, Clone)]
pub struct Model {
    board: Board,
    /// Maximum score ever reached; updated when the game ends
    max_score: u32,
    /// Cached terminal-state flag, kept current after every mutation
    game_over: bool,
    /// Dirty flag for observers, consumed by [`Model::take_changed`]
    changed: bool,
}

impl Model {
    /// Create a new game on an empty board of the given side length
    ///
    /// # Panics
    ///
    /// Panics if `size` is out of range (see [`Board::new`]).
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            max_score: 0,
            game_over: false,
            changed: false,
        }
    }

    /// Reconstruct a game from raw tile values and bookkeeping flags
    ///
    /// `values[row][col]` with row 0 = bottom row, 0 meaning empty. The
    /// `game_over` seed is immediately re-verified against the board, so a
    /// winning tile in the matrix ends the game no matter what was passed;
    /// consistent inputs read back exactly as given.
    pub fn from_raw_values(values: &[&[u32]], score: u32, max_score: u32, game_over: bool) -> Self {
        let mut model = Self {
            board: Board::from_raw_values(values, score),
            max_score,
            game_over,
            changed: false,
        };
        model.check_game_over();
        model
    }

    /// The tile at absolute (col, row), if any
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// Maximum score ever reached (updated when a game ends)
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// True iff the game is over: the winning tile exists or no move remains
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Read-only view of the underlying board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Clear the board to empty and reset the score
    pub fn clear(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.changed = true;
    }

    /// Add `tile` to the board
    ///
    /// # Panics
    ///
    /// Panics if the tile's cell is already occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.check_game_over();
        self.changed = true;
    }

    /// Spawn a 2 (90%) or 4 (10%) on a uniformly chosen empty cell
    ///
    /// Returns the placed tile, or `None` when the board is full. Pass a
    /// seeded RNG for deterministic behavior.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        let empty = self.board.empty_positions();
        if empty.is_empty() {
            return None;
        }
        let (col, row) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_bool(FOUR_TILE_PROBABILITY) {
            4
        } else {
            2
        };
        let tile = Tile::new(value, col as usize, row as usize);
        self.add_tile(tile);
        Some(tile)
    }

    /// Tilt the board toward `side`; true iff this changed the board
    ///
    /// Slides every tile as far as possible toward `side` and merges adjacent
    /// equal pairs, each tile participating in at most one merge. Merged
    /// values accumulate into the score.
    pub fn tilt(&mut self, side: Side) -> bool {
        let changed = tilt_board(&mut self.board, side);
        self.check_game_over();
        if changed {
            self.changed = true;
        }
        changed
    }

    /// Consume the dirty flag: true iff the board changed since the last call
    ///
    /// Observer contract: any mutating call that altered the board sets the
    /// flag; reading it resets it.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Export the full observable state for an observer
    pub fn snapshot(&self) -> ModelSnapshot {
        let mut snapshot = ModelSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    /// Write the full observable state into a reusable snapshot
    ///
    /// Row buffers are resized in place, so repeated calls on a same-size
    /// board do not reallocate.
    pub fn snapshot_into(&self, out: &mut ModelSnapshot) {
        let size = self.size();
        out.size = size;
        out.board.resize(size, Vec::new());
        for (row, row_values) in out.board.iter_mut().enumerate() {
            row_values.resize(size, 0);
            for (col, slot) in row_values.iter_mut().enumerate() {
                *slot = self.tile(col, row).map_or(0, |t| t.value());
            }
        }
        out.score = self.score();
        out.max_score = self.max_score;
        out.game_over = self.game_over;
    }

    /// Recompute the cached game-over flag from the board
    fn check_game_over(&mut self) {
        self.game_over = max_tile_exists(&self.board) || !at_least_one_move_exists(&self.board);
        if self.game_over {
            self.max_score = self.max_score.max(self.board.score());
        }
    }
}

/// Structural equality over the observable state; the dirty flag is excluded
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.max_score == other.max_score
            && self.game_over == other.game_over
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.max_score.hash(state);
        self.game_over.hash(state);
    }
}

/// Fixed-width debug rendering, top row to bottom row
///
/// Each cell is a 4-character right-aligned field (blank when empty), rows
/// are bracketed, and the trailer reports score, max score, and over-status.
/// Harnesses compare and log this form.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..self.size()).rev() {
            for col in 0..self.size() {
                match self.tile(col, row) {
                    Some(tile) => write!(f, "|{:>4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score(),
            self.max_score,
            over
        )
    }
}
