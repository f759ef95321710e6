//! Pawns-only chess: two players, sixteen pawns, first to the far rank wins.
//!
//! [`game::engine::BoardEngine`] holds all the rules and is pure; [`session`] is the text turn
//! loop around it and [`record`] the transcript it produces.

pub mod core;
pub mod game;
pub mod record;
pub mod session;
