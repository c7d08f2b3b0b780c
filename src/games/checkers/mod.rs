//! Checkers (English draughts) without forced captures.
//!
//! - 8x8 board, pieces on the dark squares (`row + col` odd)
//! - White starts on rows 0-2 and moves toward increasing row
//! - Black starts on rows 5-7 and moves toward decreasing row
//! - Men step or jump one diagonal forward; kings slide any distance and
//!   capture at most one piece per move
//! - Reaching the far row crowns a man
//! - The turn passes after every move

mod config;
mod game;
mod piece;

pub use config::{CheckersConfig, BOARD_SIZE, MAX_BOARD_SIZE};
pub use game::Checkers;
pub use piece::{Piece, Side};
