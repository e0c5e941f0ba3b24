//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the tilt engine, and the game-over rules
//! of a 2048-style sliding-tile merge game. It has **zero dependencies** on
//! UI, networking, or I/O, making it:
//!
//! - **Deterministic**: tile spawning takes a caller-supplied RNG, so a
//!   seeded game replays identically
//! - **Testable**: every rule is covered by unit tests beside the code
//! - **Portable**: can run under any driver (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: the immutable numbered tile value object
//! - [`board`]: the size x size grid, perspective transform, and score
//! - [`tilt`]: the directional slide-and-merge column scan
//! - [`rules`]: the board-wide game-over predicates
//! - [`game_state`]: the [`Model`] wrapping a board with game lifecycle
//! - [`snapshot`]: plain-data state export for observers
//!
//! # Game Rules
//!
//! - A tilt slides every tile as far as possible toward one side; adjacent
//!   equal tiles merge pairwise into a doubled tile
//! - Each tile participates in at most one merge per tilt; when three equal
//!   tiles line up, the two nearer the leading edge merge and the trailing
//!   tile stays
//! - Every merge adds the merged value to the score
//! - The game ends when a 2048 tile exists or no tilt can change the board
//!
//! # Example
//!
//! ```
//! use twenty48_core::{Model, Tile};
//! use twenty48_types::Side;
//!
//! let mut game = Model::new(4);
//! game.add_tile(Tile::new(2, 0, 0));
//! game.add_tile(Tile::new(2, 1, 0));
//!
//! // Both tiles slide west and merge into a 4.
//! assert!(game.tilt(Side::West));
//! assert_eq!(game.tile(0, 0).unwrap().value(), 4);
//! assert_eq!(game.score(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod snapshot;
pub mod tile;
pub mod tilt;

// Re-export commonly used types
pub use board::Board;
pub use game_state::Model;
pub use rules::{at_least_one_move_exists, empty_space_exists, max_tile_exists};
pub use snapshot::ModelSnapshot;
pub use tile::Tile;
pub use tilt::tilt_board;
