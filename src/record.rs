//! A serializable transcript of one session.

use serde::Serialize;

use crate::core::color::Color;
use crate::game::engine::MoveKind;
use crate::game::mv::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// The player typed `exit` (or the input ran dry) before the game was decided.
    Exited,
}

impl Outcome {
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordedKind {
    Advance,
    Capture,
    EnPassant,
}

impl RecordedKind {
    fn from_kind(kind: MoveKind) -> Option<Self> {
        match kind {
            MoveKind::Advance => Some(RecordedKind::Advance),
            MoveKind::Capture => Some(RecordedKind::Capture),
            MoveKind::EnPassant => Some(RecordedKind::EnPassant),
            MoveKind::Illegal => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedMove {
    pub color: Color,
    #[serde(rename = "move")]
    pub notation: String,
    pub kind: RecordedKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<RecordedMove>,
    pub outcome: Outcome,
}

impl GameRecord {
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            white: white.into(),
            black: black.into(),
            moves: Vec::new(),
            outcome: Outcome::Exited,
        }
    }

    /// Append an applied move. Illegal moves are never recorded.
    pub fn push(&mut self, color: Color, mv: Move, kind: MoveKind) {
        if let Some(kind) = RecordedKind::from_kind(kind) {
            self.moves.push(RecordedMove {
                color,
                notation: mv.to_string(),
                kind,
            });
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
