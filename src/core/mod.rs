//! Low-level, allocation-free primitives.
//!
//! - [`color`]: the two sides and their rank geometry (home, en passant, far rank).
//! - [`coord`]: signed file/rank steps.
//! - [`square`]: a board square packed into a single `u8`, with off-board-aware offsets.

pub mod color;
pub mod coord;
pub mod square;
