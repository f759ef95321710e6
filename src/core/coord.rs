use std::ops::{Add, Mul, Neg};

/// A board step: `file` grows towards the h-file, `rank` grows towards rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.file, -self.rank)
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i8) -> Coord {
        Coord {
            file: self.file * rhs,
            rank: self.rank * rhs,
        }
    }
}

/// Sideways steps towards the neighbouring files.
pub const SIDE_STEPS: [Coord; 2] = [Coord { file: -1, rank: 0 }, Coord { file: 1, rank: 0 }];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_composes_steps() {
        let up = Coord::new(0, 1);
        assert_eq!(up * 2, Coord::new(0, 2));
        assert_eq!(up + SIDE_STEPS[1], Coord::new(1, 1));
        assert_eq!(-(up + SIDE_STEPS[0]), Coord::new(1, -1));
    }
}
