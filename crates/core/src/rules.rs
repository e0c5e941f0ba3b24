//! Rules module - board-wide predicates for game-over detection
//!
//! Two predicates decide the terminal state: the winning tile exists, or no
//! move remains. A move remains while any cell is empty or any tile has an
//! orthogonally-adjacent tile of equal value (absolute frame, 4-neighborhood).
//!
//! The adjacency scan visits every cell and bounds-checks the *neighbor*
//! coordinate, so adjacent-equal pairs touching the border count like any
//! other (see DESIGN.md for the deliberate boundary-handling decision).

use crate::board::Board;
use crate::tile::Tile;
use twenty48_types::{Side, MAX_PIECE};

/// True iff any cell on the board is unoccupied
pub fn empty_space_exists(board: &Board) -> bool {
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.tile(col, row).is_none() {
                return true;
            }
        }
    }
    false
}

/// True iff any tile has reached the winning value [`MAX_PIECE`]
pub fn max_tile_exists(board: &Board) -> bool {
    for row in 0..board.size() {
        for col in 0..board.size() {
            if let Some(tile) = board.tile(col, row) {
                if tile.value() == MAX_PIECE {
                    return true;
                }
            }
        }
    }
    false
}

/// True iff at least one tilt would change the board
///
/// Either an empty cell exists, or two orthogonally-adjacent tiles share a
/// value and could merge.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    for row in 0..board.size() {
        for col in 0..board.size() {
            let Some(tile) = board.tile(col, row) else {
                continue;
            };
            for side in Side::ALL {
                if let Some(neighbor) = adjacent_tile(board, col, row, side) {
                    if neighbor.value() == tile.value() {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// The tile adjacent to (col, row) toward `side`, None when off the board
fn adjacent_tile(board: &Board, col: usize, row: usize, side: Side) -> Option<Tile> {
    let (dcol, drow) = side.offset();
    let ncol = col as i32 + dcol;
    let nrow = row as i32 + drow;
    let size = board.size() as i32;
    if ncol < 0 || ncol >= size || nrow < 0 || nrow >= size {
        return None;
    }
    board.tile(ncol as usize, nrow as usize)
}
