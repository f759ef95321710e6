use std::fmt;

use crate::core::coord::Coord;

pub const FILES: u8 = 8;
pub const RANKS: u8 = 8;

/// A board square packed into a single `u8`: `(rank - 1) * 8 + file`.
///
/// Files are stored 0-based (`a` = 0), ranks are exposed 1-based as printed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = (FILES * RANKS) as usize;

    /// `file` is 0-based, `rank` is 1-based. Returns `None` off the board.
    #[inline]
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < FILES && (1..=RANKS).contains(&rank) {
            Some(Square((rank - 1) * FILES + file))
        } else {
            None
        }
    }

    /// Parse a two-byte `[a-h][1-8]` square name.
    pub fn from_name(name: &[u8]) -> Option<Square> {
        match *name {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Square::new(f - b'a', r - b'0'),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 % FILES
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / FILES + 1
    }

    #[inline]
    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// The square `delta` away, or `None` if that falls off the board.
    ///
    /// This is the one place edge files are handled: a step left from the a-file or right from
    /// the h-file simply has no square.
    pub fn offset(self, delta: Coord) -> Option<Square> {
        let file = self.file() as i8 + delta.file;
        let rank = self.rank() as i8 + delta.rank;
        if file < 0 || rank < 1 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// All 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}
