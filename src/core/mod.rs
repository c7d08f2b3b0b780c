//! Core engine types: coordinates, boards, history, errors.
//!
//! This module contains the game-agnostic building blocks. Games supply
//! their own `BoardEntry` type and rules on top of these.

pub mod board;
pub mod coord;
pub mod error;
pub mod history;

pub use board::{Board, BoardEntry};
pub use coord::Coord;
pub use error::{EngineError, EngineResult};
pub use history::HistoryEntry;
