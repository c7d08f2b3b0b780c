//! Error types for engine construction and configuration.
//!
//! Gameplay never errors: an illegal move is `false`, an empty cell scores
//! `0`. Only configuration problems that would break the fixed-board
//! invariant surface as `EngineError`.

use thiserror::Error;

/// Errors raised while configuring or constructing an engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board size is not playable for the variant.
    #[error("Invalid board size: {size} (must be even, between 4 and 64)")]
    InvalidBoardSize { size: usize },

    /// A supplied board does not match the configured size.
    #[error("Board size mismatch: expected {expected}x{expected}, got {actual}x{actual}")]
    BoardSizeMismatch { expected: usize, actual: usize },

    /// Heatmap name not recognised.
    #[error("Unknown heatmap kind: {0:?}")]
    UnknownHeatmap(String),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
