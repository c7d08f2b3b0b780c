//! Checkers sides and pieces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::BoardEntry;

/// One of the two checkers sides.
///
/// White starts on the low rows and moves toward increasing row; Black
/// starts on the high rows and moves toward decreasing row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row step of a forward (non-king) move: `1` for White, `-1` for Black.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Row on which a man of this side is crowned.
    #[must_use]
    pub const fn promotion_row(self, board_size: usize) -> usize {
        match self {
            Side::White => board_size - 1,
            Side::Black => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "WHITE"),
            Side::Black => write!(f, "BLACK"),
        }
    }
}

/// A checkers piece: a man, or a king once crowned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

impl Piece {
    /// An uncrowned piece.
    #[must_use]
    pub const fn man(side: Side) -> Self {
        Self { side, king: false }
    }

    /// A crowned piece.
    #[must_use]
    pub const fn king(side: Side) -> Self {
        Self { side, king: true }
    }
}

impl BoardEntry for Piece {
    type Player = Side;

    fn player(&self) -> Side {
        self.side
    }
}

/// `w`/`b` for men, `W`/`B` for kings.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match (self.side, self.king) {
            (Side::White, false) => 'w',
            (Side::White, true) => 'W',
            (Side::Black, false) => 'b',
            (Side::Black, true) => 'B',
        };
        write!(f, "{c}")
    }
}
