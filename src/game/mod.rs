//! Pawn-only rules on the standard 8x8 board.

pub mod board;
pub mod engine;
pub mod error;
pub mod mv;
