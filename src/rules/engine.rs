//! Game engine trait and the shared engine state.
//!
//! Games implement `GameEngine` to define their rules:
//! - Starting layout
//! - What moves are legal
//! - How moves modify the board
//! - Win/loss conditions
//!
//! `EngineState` holds what every grid game has in common (board, side to
//! move, history) so that variants only implement the rules.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, BoardEntry, Coord, HistoryEntry};

/// Destination cells reachable by one piece.
///
/// Most pieces have at most a handful of moves, so these stay inline.
pub type MoveList = SmallVec<[Coord; 8]>;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult<P> {
    Winner(P),
    Draw,
}

impl<P: Copy> GameResult<P> {
    /// The winning player, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<P> {
        match *self {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

/// State shared by every engine: board, side to move, and history.
///
/// The board size is the board's own size, so it cannot drift from the
/// board. `moves()` is derived from the history length.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, T::Player: Serialize",
    deserialize = "T: Deserialize<'de>, T::Player: Deserialize<'de>"
))]
pub struct EngineState<T: BoardEntry> {
    /// Current board.
    pub board: Board<T>,

    /// Player whose turn it is.
    pub current_player: T::Player,

    /// Every executed move, oldest first.
    pub history: Vector<HistoryEntry>,
}

impl<T: BoardEntry> EngineState<T> {
    /// Create state for a fresh game.
    #[must_use]
    pub fn new(board: Board<T>, first_player: T::Player) -> Self {
        Self {
            board,
            current_player: first_player,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    /// Append a move to the history.
    pub fn record_move(&mut self, from: Coord, to: Coord) {
        self.history.push_back(HistoryEntry::new(from, to));
    }

    /// Replace the board, reset the side to move, and clear the history.
    pub fn reset(&mut self, board: Board<T>, first_player: T::Player) {
        self.board = board;
        self.current_player = first_player;
        self.history.clear();
    }
}

/// Game engine trait.
///
/// Variants implement the required methods; the provided methods cover
/// state access, history recording, and the "as the side to move"
/// shortcuts.
///
/// ## Implementation Notes
///
/// - `initialize_board`: must not read the current board
/// - `is_valid_move_as`: must not mutate anything; out-of-range input is `false`
/// - `make_move`: must gate on `is_valid_move` and leave state untouched on `false`
/// - `possible_moves_as`: takes the mover explicitly, so analytics can look
///   at the opponent without changing whose turn it is
pub trait GameEngine {
    /// Player identity.
    type Player: Copy + Eq + std::fmt::Debug;

    /// Piece type placed on the board.
    type Piece: BoardEntry<Player = Self::Player>;

    /// Shared engine state.
    fn state(&self) -> &EngineState<Self::Piece>;

    /// Mutable shared engine state.
    ///
    /// Used by variants while executing moves. Changing the board directly
    /// from outside bypasses the rules and the history.
    fn state_mut(&mut self) -> &mut EngineState<Self::Piece>;

    /// Produce the starting layout.
    fn initialize_board(&self) -> Board<Self::Piece>;

    /// Check whether moving `from -> to` is legal with `player` to move.
    fn is_valid_move_as(&self, from: Coord, to: Coord, player: Self::Player) -> bool;

    /// Execute a move for the side to move.
    ///
    /// Returns `false` with no side effect if the move is illegal.
    fn make_move(&mut self, from: Coord, to: Coord) -> bool;

    /// Heuristic strength of the piece at `at`; `0.0` for an empty cell.
    fn calculate_influence(&self, at: Coord) -> f64;

    /// Destination cells for the piece at `at` with `player` to move.
    ///
    /// Empty for an empty cell.
    fn possible_moves_as(&self, at: Coord, player: Self::Player) -> MoveList;

    /// Restore the starting position, starting player, and empty history.
    fn reset_game(&mut self);

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn outcome(&self) -> Option<GameResult<Self::Player>>;

    // === Provided Methods ===

    fn board_size(&self) -> usize {
        self.state().board_size()
    }

    fn board(&self) -> &Board<Self::Piece> {
        &self.state().board
    }

    fn current_player(&self) -> Self::Player {
        self.state().current_player
    }

    fn history(&self) -> &Vector<HistoryEntry> {
        &self.state().history
    }

    /// Number of moves played, always equal to the history length.
    fn moves(&self) -> usize {
        self.state().moves()
    }

    /// Check whether moving `from -> to` is legal for the side to move.
    fn is_valid_move(&self, from: Coord, to: Coord) -> bool {
        self.is_valid_move_as(from, to, self.current_player())
    }

    /// Destination cells for the piece at `at` with the current side to move.
    ///
    /// Any cell may be queried regardless of whose turn it is.
    fn possible_moves(&self, at: Coord) -> MoveList {
        self.possible_moves_as(at, self.current_player())
    }

    /// Append a `{from, to}` record. Variants should not need to override this.
    fn update_history(&mut self, from: Coord, to: Coord) {
        self.state_mut().record_move(from, to);
    }

    /// Enumerate every generated move for the side to move.
    fn legal_moves(&self) -> Vec<(Coord, Coord)> {
        let player = self.current_player();
        self.board()
            .occupied()
            .filter(|(_, piece)| piece.player() == player)
            .flat_map(|(from, _)| {
                self.possible_moves_as(from, player)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Token(bool);

    impl BoardEntry for Token {
        type Player = bool;

        fn player(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_game_result_winner() {
        assert_eq!(GameResult::Winner(true).winner(), Some(true));
        assert_eq!(GameResult::<bool>::Draw.winner(), None);
    }

    #[test]
    fn test_engine_state_records_moves() {
        let mut state = EngineState::new(Board::<Token>::new(4), true);
        assert_eq!(state.board_size(), 4);
        assert_eq!(state.moves(), 0);

        state.record_move(Coord::new(0, 1), Coord::new(1, 0));
        state.record_move(Coord::new(3, 2), Coord::new(2, 3));

        assert_eq!(state.moves(), 2);
        assert_eq!(state.history.len(), state.moves());
        assert_eq!(
            state.history[0],
            HistoryEntry::new(Coord::new(0, 1), Coord::new(1, 0))
        );
    }

    #[test]
    fn test_engine_state_reset() {
        let mut board = Board::new(4);
        board.place(Coord::new(0, 0), Token(false));
        let mut state = EngineState::new(board, false);
        state.current_player = true;
        state.record_move(Coord::new(0, 0), Coord::new(1, 1));

        state.reset(Board::new(4), false);

        assert_eq!(state.board.occupied().count(), 0);
        assert!(!state.current_player);
        assert!(state.history.is_empty());
    }
}
