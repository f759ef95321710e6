use std::fmt;

use serde::Serialize;

use crate::core::coord::Coord;

/// The two sides. White moves first and walks towards rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// 0 for White, 1 for Black.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// One step towards the far rank.
    #[inline]
    pub fn forward(self) -> Coord {
        match self {
            Color::White => Coord::new(0, 1),
            Color::Black => Coord::new(0, -1),
        }
    }

    /// The only rank a two-square advance may start from.
    #[inline]
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank on which a pawn of this side may capture en passant.
    #[inline]
    pub fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 5,
            Color::Black => 4,
        }
    }

    #[inline]
    pub fn far_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Board marker used by the renderer.
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Capitalised name, as used in result lines ("White Wins!").
    pub fn title(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Lower-case name, as used in rejection messages ("No white pawn at e2").
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}
