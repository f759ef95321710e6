use log::{debug, trace};

use crate::core::color::Color;
use crate::core::coord::SIDE_STEPS;
use crate::core::square::Square;
use crate::game::board::{Board, Cell};
use crate::game::error::MoveError;
use crate::game::mv::Move;

/// What a move does. At most one pawn rule matches any given move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Straight ahead into an empty square, one step or two from the home rank.
    Advance,
    /// One step diagonally onto an enemy pawn.
    Capture,
    /// One step diagonally behind an enemy pawn that just advanced two squares past.
    EnPassant,
    Illegal,
}

impl MoveKind {
    #[inline]
    pub fn is_legal(self) -> bool {
        self != MoveKind::Illegal
    }
}

/// The rules engine: grid plus the single remembered move en passant depends on.
///
/// The side to move is owned by the caller and passed into every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    last_move: Option<Move>,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine {
    /// Standard starting layout, no move played yet.
    pub fn new() -> Self {
        Self::from_position(Board::initial(), None)
    }

    /// An arbitrary position. `last_move` is what en passant is checked against.
    pub fn from_position(board: Board, last_move: Option<Move>) -> Self {
        Self { board, last_move }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn pawn_count(&self, color: Color) -> usize {
        self.board.count(color)
    }

    pub fn render(&self) -> String {
        self.board.render()
    }

    pub fn parse_move(&self, raw: &str) -> Result<Move, MoveError> {
        Move::parse(raw)
    }

    pub fn check_origin_occupancy(&self, mv: Move, color: Color) -> Result<(), MoveError> {
        if self.board.get(mv.from).holds(color) {
            Ok(())
        } else {
            Err(MoveError::NoPawnAt {
                color,
                square: mv.from,
            })
        }
    }

    pub fn is_forward_advance(&self, mv: Move, color: Color) -> bool {
        if mv.to.file() != mv.from.file() || !self.board.get(mv.to).is_empty() {
            return false;
        }
        let forward = color.forward();
        let Some(one) = mv.from.offset(forward) else {
            return false;
        };
        if mv.to == one {
            return true;
        }
        mv.from.rank() == color.home_rank()
            && mv.from.offset(forward * 2) == Some(mv.to)
            && self.board.get(one).is_empty()
    }

    pub fn is_diagonal_capture(&self, mv: Move, color: Color) -> bool {
        self.board.get(mv.to).holds(color.other()) && is_forward_diagonal(mv, color)
    }

    pub fn is_en_passant_capture(&self, mv: Move, color: Color) -> bool {
        if mv.from.rank() != color.en_passant_rank()
            || !is_forward_diagonal(mv, color)
            || !self.board.get(mv.to).is_empty()
        {
            return false;
        }
        let Some(last) = self.last_move else {
            return false;
        };
        let enemy = color.other();
        last.from.file() == mv.to.file()
            && last.from.rank() == enemy.home_rank()
            && last.to.file() == mv.to.file()
            && last.to.rank() == color.en_passant_rank()
            && self.board.get(last.to).holds(enemy)
    }

    /// Which pawn rule, if any, allows `mv` for `color`.
    ///
    /// A move whose origin is not an own pawn is `Illegal`.
    pub fn classify(&self, mv: Move, color: Color) -> MoveKind {
        let kind = if self.check_origin_occupancy(mv, color).is_err() {
            MoveKind::Illegal
        } else if self.is_forward_advance(mv, color) {
            MoveKind::Advance
        } else if self.is_diagonal_capture(mv, color) {
            MoveKind::Capture
        } else if self.is_en_passant_capture(mv, color) {
            MoveKind::EnPassant
        } else {
            MoveKind::Illegal
        };
        trace!("classify {mv} for {color}: {kind:?}");
        kind
    }

    pub fn is_legal_move(&self, mv: Move, color: Color) -> bool {
        self.classify(mv, color).is_legal()
    }

    /// Apply a move the caller has already found legal.
    ///
    /// An illegal move leaves the engine untouched (and trips a debug assertion).
    pub fn apply_move(&mut self, mv: Move, color: Color) -> MoveKind {
        let kind = self.classify(mv, color);
        self.apply_classified(mv, color, kind);
        kind
    }

    /// Occupancy check, classification and application in one call.
    pub fn try_move(&mut self, mv: Move, color: Color) -> Result<MoveKind, MoveError> {
        self.check_origin_occupancy(mv, color)?;
        let kind = self.classify(mv, color);
        if !kind.is_legal() {
            return Err(MoveError::Illegal);
        }
        self.apply_classified(mv, color, kind);
        Ok(kind)
    }

    fn apply_classified(&mut self, mv: Move, color: Color, kind: MoveKind) {
        debug_assert!(kind.is_legal(), "applying illegal move {mv} for {color}");
        if !kind.is_legal() {
            return;
        }
        self.board.clear(mv.from);
        self.board.set(mv.to, Cell::Pawn(color));
        if kind == MoveKind::EnPassant {
            // The passed pawn sits beside the origin, on the destination file.
            if let Some(passed) = Square::new(mv.to.file(), mv.from.rank()) {
                self.board.clear(passed);
            }
        }
        self.last_move = Some(mv);
        debug!("{color} played {mv} ({kind:?})");
    }

    /// True once the last move reached a far rank or either side has no pawns left.
    pub fn is_win(&self) -> bool {
        self.last_move.is_some_and(|m| is_far_rank(m.to))
            || self.pawn_count(Color::White) == 0
            || self.pawn_count(Color::Black) == 0
    }

    /// The side that has won, if any.
    pub fn winner(&self) -> Option<Color> {
        if let Some(m) = self.last_move.filter(|m| is_far_rank(m.to)) {
            if let Cell::Pawn(c) = self.board.get(m.to) {
                return Some(c);
            }
        }
        match (self.pawn_count(Color::White), self.pawn_count(Color::Black)) {
            (0, 0) => None,
            (0, _) => Some(Color::Black),
            (_, 0) => Some(Color::White),
            _ => None,
        }
    }

    /// `color` has pawns but none can step forward or capture diagonally.
    ///
    /// En passant is not consulted.
    pub fn is_stalemate(&self, color: Color) -> bool {
        let mut pawns = self.board.pawns(color).peekable();
        if pawns.peek().is_none() {
            return false;
        }
        let enemy = color.other();
        !pawns.any(|from| {
            let can_step = from
                .offset(color.forward())
                .is_some_and(|sq| self.board.get(sq).is_empty());
            can_step || forward_diagonals(from, color).any(|sq| self.board.get(sq).holds(enemy))
        })
    }
}

/// The (up to two) squares diagonally ahead of `from`. Edge files yield only one.
fn forward_diagonals(from: Square, color: Color) -> impl Iterator<Item = Square> {
    SIDE_STEPS
        .into_iter()
        .filter_map(move |side| from.offset(color.forward() + side))
}

#[inline]
fn is_far_rank(sq: Square) -> bool {
    Color::ALL.iter().any(|c| c.far_rank() == sq.rank())
}

#[inline]
fn is_forward_diagonal(mv: Move, color: Color) -> bool {
    forward_diagonals(mv.from, color).any(|sq| sq == mv.to)
}
