//! Game engine trait for game implementations.
//!
//! Games implement `GameEngine` to define:
//! - The starting layout
//! - Which moves are legal and how they change the board
//! - Move generation and piece influence
//! - Win/loss conditions
//!
//! Analytics and UI code call into `GameEngine` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{EngineState, GameEngine, GameResult, MoveList};
