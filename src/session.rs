//! The text turn loop: names in, one move per line, board and verdicts out.
//!
//! The loop owns the side to move and drives a [`BoardEngine`] one call at a time. It never
//! decides legality itself.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::core::color::Color;
use crate::game::engine::BoardEngine;
use crate::game::mv::Move;
use crate::record::{GameRecord, Outcome};

/// Typed by a player to leave the game at once.
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// White's name; prompted for when `None`.
    pub white: Option<String>,
    /// Black's name; prompted for when `None`.
    pub black: Option<String>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_white(mut self, name: Option<String>) -> Self {
        self.white = name;
        self
    }

    pub fn with_black(mut self, name: Option<String>) -> Self {
        self.black = name;
        self
    }
}

#[derive(Debug)]
pub enum SessionError {
    Io { stage: &'static str, error: io::Error },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io { stage, error } => write!(f, "i/o error while {stage}: {error}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io { error, .. } => Some(error),
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Play until a win, a stalemate, `exit`, or end of input.
    pub fn run(mut self) -> Result<GameRecord, SessionError> {
        self.say("Pawns-Only Chess")?;
        let white = match self.config.white.take() {
            Some(name) => name,
            None => self.ask("First Player's name:")?,
        };
        let black = match self.config.black.take() {
            Some(name) => name,
            None => self.ask("Second Player's name:")?,
        };
        info!("new game: {white} (white) vs {black} (black)");

        let mut record = GameRecord::new(white, black);
        let mut engine = BoardEngine::new();
        self.show_board(&engine)?;

        let mut active = Color::White;
        loop {
            let name = match active {
                Color::White => &record.white,
                Color::Black => &record.black,
            };
            let prompt = format!("{name}'s turn:");
            let Some(line) = self.prompt(&prompt)? else {
                debug!("input exhausted, leaving");
                self.say("Bye!")?;
                break;
            };
            if line == EXIT_COMMAND {
                self.say("Bye!")?;
                break;
            }

            let applied = Move::parse(&line)
                .and_then(|mv| engine.try_move(mv, active).map(|kind| (mv, kind)));
            let (mv, kind) = match applied {
                Ok(x) => x,
                Err(e) => {
                    debug!("{active} rejected {line:?}: {e:?}");
                    self.say(&e.to_string())?;
                    continue;
                }
            };
            record.push(active, mv, kind);
            self.show_board(&engine)?;

            if engine.is_win() {
                let winner = engine.winner().unwrap_or(active);
                info!("{winner} wins after {} moves", record.moves.len());
                record.outcome = Outcome::win_for(winner);
                self.say(&format!("{} Wins!", winner.title()))?;
                self.say("Bye!")?;
                break;
            }

            active = active.other();
            if engine.is_stalemate(active) {
                info!("stalemate: {active} has no move");
                record.outcome = Outcome::Stalemate;
                self.say("Stalemate!")?;
                self.say("Bye!")?;
                break;
            }
        }

        self.output.flush().map_err(|error| SessionError::Io {
            stage: "flushing output",
            error,
        })?;
        Ok(record)
    }

    fn show_board(&mut self, engine: &BoardEngine) -> Result<(), SessionError> {
        let text = engine.render();
        self.say(&text)
    }

    fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}").map_err(|error| SessionError::Io {
            stage: "writing output",
            error,
        })
    }

    /// Like [`Self::prompt`], but a missing answer reads as an empty name.
    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        Ok(self.prompt(question)?.unwrap_or_default())
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>, SessionError> {
        self.say(question)?;
        self.output.flush().map_err(|error| SessionError::Io {
            stage: "flushing output",
            error,
        })?;
        self.read_line()
    }

    /// Next input line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(|error| SessionError::Io {
                stage: "reading input",
                error,
            })?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

/// Run a whole session over in-memory input, returning the record and everything printed.
pub fn play_script(
    script: &str,
    config: SessionConfig,
) -> Result<(GameRecord, String), SessionError> {
    let mut out = Vec::new();
    let record = Session::new(script.as_bytes(), &mut out, config).run()?;
    Ok((record, String::from_utf8_lossy(&out).into_owned()))
}
