//! # grid-games
//!
//! A two-player grid game engine with a checkers implementation and
//! heatmap analytics.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: Boards, history, and the `GameEngine` trait
//!    know nothing about checkers. Games supply pieces and rules.
//!
//! 2. **Legality Before Mutation**: `is_valid_move` is a pure predicate and
//!    the only gate `make_move` uses.
//!
//! 3. **Explicit Mover**: Move generation takes the side to move as an
//!    argument, so analytics can inspect the opponent without touching
//!    whose turn it is.
//!
//! ## Modules
//!
//! - `core`: Coordinates, boards, history entries, errors
//! - `rules`: `GameEngine` trait and shared `EngineState`
//! - `games`: Concrete games (checkers)
//! - `analytics`: Influence, movement, and threat heatmaps
//!
//! ## Example
//!
//! ```
//! use grid_games::{Checkers, Coord, GameEngine, HeatmapCalculator, Side};
//!
//! let mut game = Checkers::new();
//! assert!(game.make_move(Coord::new(2, 1), Coord::new(3, 0)));
//! assert_eq!(game.current_player(), Side::Black);
//!
//! let threat = HeatmapCalculator::calculate_threat_heatmap(&game);
//! assert_eq!(threat.size(), 8);
//! ```

pub mod analytics;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, BoardEntry, Coord, EngineError, EngineResult, HistoryEntry};

pub use crate::rules::{EngineState, GameEngine, GameResult, MoveList};

pub use crate::games::checkers::{Checkers, CheckersConfig, Piece, Side, BOARD_SIZE, MAX_BOARD_SIZE};

pub use crate::analytics::{Heatmap, HeatmapCalculator, HeatmapKind};
