use std::fmt;
use std::str::FromStr;

use crate::core::coord::Coord;
use crate::core::square::Square;
use crate::game::error::MoveError;

/// An origin/destination pair parsed from `[a-h][1-8][a-h][1-8]`, e.g. `e2e4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Strict parse: exactly four bytes, lower-case files, ranks 1-8, nothing else.
    pub fn parse(raw: &str) -> Result<Move, MoveError> {
        match raw.as_bytes() {
            [a, b, c, d] => {
                let from = Square::from_name(&[*a, *b]).ok_or(MoveError::Malformed)?;
                let to = Square::from_name(&[*c, *d]).ok_or(MoveError::Malformed)?;
                Ok(Move { from, to })
            }
            _ => Err(MoveError::Malformed),
        }
    }

    /// Destination minus origin.
    #[inline]
    pub fn delta(self) -> Coord {
        Coord::new(
            self.to.file() as i8 - self.from.file() as i8,
            self.to.rank() as i8 - self.from.rank() as i8,
        )
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        let m: Move = "e2e4".parse().unwrap();
        assert_eq!(m.from.to_string(), "e2");
        assert_eq!(m.to.to_string(), "e4");
        assert_eq!(m.delta(), Coord::new(0, 2));
        assert_eq!(m.to_string(), "e2e4");

        let m = Move::parse("h7g6").unwrap();
        assert_eq!(m.delta(), Coord::new(-1, -1));
    }

    #[test]
    fn rejects_everything_else() {
        for bad in [
            "", "exit", "e2e", "e2e4 ", " e2e4", "e2e45", "E2E4", "e2E4", "i2i4", "e0e1", "e9e8",
            "e2-e4", "2e4e", "ééé",
        ] {
            assert_eq!(Move::parse(bad), Err(MoveError::Malformed), "{bad:?}");
        }
    }
}
