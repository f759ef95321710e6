use std::fmt;

use crate::core::color::Color;
use crate::core::square::Square;

/// Why a move string was rejected. The `Display` text is what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Not of the form `[a-h][1-8][a-h][1-8]`.
    Malformed,
    /// Well-formed, but the origin square does not hold a pawn of the moving side.
    NoPawnAt { color: Color, square: Square },
    /// Well-formed with an own pawn at the origin, but no pawn rule allows it.
    Illegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Malformed | MoveError::Illegal => f.write_str("Invalid Input"),
            MoveError::NoPawnAt { color, square } => write!(f, "No {color} pawn at {square}"),
        }
    }
}

impl std::error::Error for MoveError {}
