use std::fmt;

use crate::core::color::Color;
use crate::core::square::{Square, FILES, RANKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Pawn(Color),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn holds(self, color: Color) -> bool {
        self == Cell::Pawn(color)
    }

    #[inline]
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Pawn(c) => c.marker(),
        }
    }
}

/// The 8x8 grid, stored flat and addressed by [`Square::index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; Square::COUNT],
}

const EDGE: &str = "  +---+---+---+---+---+---+---+---+";
const FILE_LABELS: &str = "    a   b   c   d   e   f   g   h";

impl Board {
    /// A board with no pawns at all.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; Square::COUNT],
        }
    }

    /// Full ranks of pawns on each side's home rank.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            for file in 0..FILES {
                if let Some(sq) = Square::new(file, color.home_rank()) {
                    board.set(sq, Cell::Pawn(color));
                }
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, Cell::Empty);
    }

    /// Squares holding a pawn of `color`, a1 first.
    pub fn pawns(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq).holds(color))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| c.holds(color)).count()
    }

    /// Bordered text grid, rank 8 on top, file letters underneath.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(700);
        out.push_str(EDGE);
        out.push('\n');
        for rank in (1..=RANKS).rev() {
            out.push_str(&format!("{rank} "));
            for file in 0..FILES {
                let cell = Square::new(file, rank).map_or(Cell::Empty, |sq| self.get(sq));
                out.push_str(&format!("| {} ", cell.marker()));
            }
            out.push_str("|\n");
            out.push_str(EDGE);
            out.push('\n');
        }
        out.push_str(FILE_LABELS);
        out.push('\n');
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
