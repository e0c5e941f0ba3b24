//! Tilt module - the directional slide-and-merge scan
//!
//! One column scan, written against perspective coordinates, handles all four
//! directions: [`Board::with_perspective`] rotates the board so the tilt
//! direction is "up", the scan runs, and North is restored before returning.
//! Columns never interact, so each is processed independently.
//!
//! Merge policy: adjacent equal tiles merge pairwise toward the leading edge;
//! a destination row that has absorbed a merge is marked and cannot absorb a
//! second one this tilt, which both limits every tile to one merge per call
//! and resolves the three-in-a-row tie-break (the two tiles nearer the
//! leading edge merge, the trailing tile stays).

use crate::board::Board;
use crate::tile::Tile;
use twenty48_types::{Side, MAX_BOARD_SIZE};

/// Slide and merge every column toward `side`; true iff the board changed
///
/// Score bookkeeping happens inside [`Board::move_tile`], which adds each
/// merged value to the board's running score.
pub fn tilt_board(board: &mut Board, side: Side) -> bool {
    board.with_perspective(side, |board| {
        let mut changed = false;
        for col in 0..board.size() {
            changed |= tilt_column(board, col);
        }
        changed
    })
}

/// Process one perspective column, top (leading edge) to bottom
fn tilt_column(board: &mut Board, col: usize) -> bool {
    let size = board.size();
    let mut changed = false;
    // Destination rows that already absorbed a merge this tilt.
    let mut just_merged = [false; MAX_BOARD_SIZE];
    let mut highest_empty = highest_empty_row(board, col);
    // Nearest occupied row at or above the scan position, and its tile.
    let mut closest_occupied = 0;
    let mut upper: Option<Tile> = None;

    for row in (0..size).rev() {
        let current = match board.tile(col, row) {
            Some(tile) => tile,
            None => continue,
        };

        let mergeable = matches!(upper, Some(u) if u.value() == current.value())
            && !just_merged[closest_occupied];
        if mergeable {
            board.move_tile(col, closest_occupied, current);
            just_merged[closest_occupied] = true;
            highest_empty = highest_empty_row(board, col);
            changed = true;
        } else if row < highest_empty {
            board.move_tile(col, highest_empty, current);
            highest_empty = highest_empty_row(board, col);
            changed = true;
        }

        closest_occupied = closest_occupied_row(board, col, row);
        upper = board.tile(col, closest_occupied);
    }

    changed
}

/// Topmost unoccupied row in `col`, 0 when the column is full
///
/// A full column makes the slide case unreachable (no row is strictly below
/// row 0), so the fallback is never acted on.
fn highest_empty_row(board: &Board, col: usize) -> usize {
    let mut highest = 0;
    for row in 0..board.size() {
        if board.tile(col, row).is_none() {
            highest = row;
        }
    }
    highest
}

/// Nearest occupied row at or above `from` in `col`, size-1 when none
fn closest_occupied_row(board: &Board, col: usize, from: usize) -> usize {
    let mut row = from;
    while row < board.size() {
        if board.tile(col, row).is_some() {
            return row;
        }
        row += 1;
    }
    board.size() - 1
}
