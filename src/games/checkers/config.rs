//! Checkers configuration.

use serde::{Deserialize, Serialize};

use super::piece::Side;
use crate::core::{EngineError, EngineResult};

/// Standard board side length.
pub const BOARD_SIZE: usize = 8;

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 64;

/// Checkers configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersConfig {
    /// Board side length (default: 8).
    /// Must be even, between 4 and `MAX_BOARD_SIZE`.
    pub board_size: usize,

    /// Side that moves first, also restored on reset (default: White).
    pub first_player: Side,
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            first_player: Side::White,
        }
    }
}

impl CheckersConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_player(mut self, side: Side) -> Self {
        self.first_player = side;
        self
    }

    /// Rows of pieces each side starts with.
    ///
    /// Two middle rows are always left empty: 3 rows per side on 8x8.
    #[must_use]
    pub fn rows_per_side(&self) -> usize {
        self.board_size.saturating_sub(2) / 2
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> EngineResult<()> {
        if !(4..=MAX_BOARD_SIZE).contains(&self.board_size) || self.board_size % 2 != 0 {
            return Err(EngineError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        Ok(())
    }
}
