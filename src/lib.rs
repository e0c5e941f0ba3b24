//! 2048 board-tilt engine (workspace facade crate).
//!
//! This package keeps a stable `twenty48::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use twenty48_core as core;
pub use twenty48_types as types;
