//! Checkers game implementation.

use tracing::{debug, trace};

use super::config::CheckersConfig;
use super::piece::{Piece, Side};
use crate::core::{Board, Coord, EngineError, EngineResult};
use crate::rules::{EngineState, GameEngine, GameResult, MoveList};

/// All four diagonal directions, as `(d_row, d_col)`.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const BASE_INFLUENCE: f64 = 1.0;
const MOVE_INFLUENCE: f64 = 0.3;
const KING_INFLUENCE: f64 = 2.0;
const BACK_ROW_INFLUENCE: f64 = 0.5;
const EDGE_INFLUENCE: f64 = 0.3;
const MAX_INFLUENCE: f64 = 5.0;

/// Checkers engine.
///
/// No forced captures and no multi-jump continuation: every successful
/// move passes the turn.
#[derive(Clone, Debug)]
pub struct Checkers {
    config: CheckersConfig,
    state: EngineState<Piece>,
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkers {
    /// Standard 8x8 game, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::build(CheckersConfig::default())
    }

    /// Start a game with a custom configuration.
    pub fn with_config(config: CheckersConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Start from an arbitrary position with `to_move` to play.
    ///
    /// History starts empty. `reset_game` still returns to the configured
    /// starting layout.
    pub fn from_position(config: CheckersConfig, board: Board<Piece>, to_move: Side) -> EngineResult<Self> {
        config.validate()?;
        if board.size() != config.board_size {
            return Err(EngineError::BoardSizeMismatch {
                expected: config.board_size,
                actual: board.size(),
            });
        }
        Ok(Self {
            config,
            state: EngineState::new(board, to_move),
        })
    }

    fn build(config: CheckersConfig) -> Self {
        let board = Self::starting_board(&config);
        Self {
            config,
            state: EngineState::new(board, config.first_player),
        }
    }

    /// Starting layout for a configuration.
    ///
    /// White fills the first rows and Black the last rows, on cells where
    /// `row + col` is odd.
    #[must_use]
    pub fn starting_board(config: &CheckersConfig) -> Board<Piece> {
        let size = config.board_size;
        let rows = config.rows_per_side();
        let mut board = Board::new(size);

        for row in 0..size {
            let side = if row < rows {
                Side::White
            } else if row >= size - rows {
                Side::Black
            } else {
                continue;
            };
            for col in 0..size {
                if (row + col) % 2 == 1 {
                    board.place(Coord::new(row, col), Piece::man(side));
                }
            }
        }

        board
    }

    pub fn config(&self) -> &CheckersConfig {
        &self.config
    }

    /// Number of pieces `side` has left.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.state.board.count_for(side)
    }

    /// A king may slide along a diagonal, passing over at most one piece,
    /// which must belong to the opponent.
    fn king_path_is_open(&self, from: Coord, to: Coord, side: Side) -> bool {
        let (d_row, d_col) = from.delta(to);
        if d_row == 0 || d_row.abs() != d_col.abs() {
            return false;
        }

        let mut jumped = 0;
        for cell in path_between(from, to) {
            if let Some(piece) = self.state.board.get(cell) {
                if piece.side == side {
                    return false;
                }
                jumped += 1;
                if jumped > 1 {
                    return false;
                }
            }
        }

        true
    }

    fn king_moves(&self, at: Coord, side: Side) -> MoveList {
        let board = &self.state.board;
        let size = board.size();
        let mut moves = MoveList::new();

        for (d_row, d_col) in DIAGONALS {
            let mut cell = at;
            while let Some(next) = cell.offset(d_row, d_col, size) {
                cell = next;
                match board.get(cell) {
                    None => moves.push(cell),
                    Some(blocker) => {
                        if blocker.side != side {
                            if let Some(landing) = cell.offset(d_row, d_col, size) {
                                if !board.is_occupied(landing) {
                                    moves.push(landing);
                                }
                            }
                        }
                        break;
                    }
                }
            }
        }

        moves
    }

    fn man_moves(&self, at: Coord, side: Side, player: Side) -> MoveList {
        let size = self.state.board.size();
        let d_row = side.forward();
        let mut moves = MoveList::new();

        for d_col in [-1, 1] {
            let Some(step) = at.offset(d_row, d_col, size) else {
                continue;
            };
            if self.is_valid_move_as(at, step, player) {
                moves.push(step);
            }
            if let Some(jump) = at.offset(2 * d_row, 2 * d_col, size) {
                if self.is_valid_move_as(at, jump, player) {
                    moves.push(jump);
                }
            }
        }

        moves
    }
}

/// Cells strictly between two points on a diagonal.
fn path_between(from: Coord, to: Coord) -> impl Iterator<Item = Coord> {
    let (d_row, d_col) = from.delta(to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    (1..d_row.unsigned_abs()).map(move |step| {
        let step = step as isize;
        Coord::new(
            (from.row as isize + step_row * step) as usize,
            (from.col as isize + step_col * step) as usize,
        )
    })
}

impl GameEngine for Checkers {
    type Player = Side;
    type Piece = Piece;

    fn state(&self) -> &EngineState<Piece> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EngineState<Piece> {
        &mut self.state
    }

    fn initialize_board(&self) -> Board<Piece> {
        Self::starting_board(&self.config)
    }

    fn is_valid_move_as(&self, from: Coord, to: Coord, player: Side) -> bool {
        let board = &self.state.board;
        if !board.contains(from) || !board.contains(to) {
            return false;
        }
        let Some(piece) = board.get(from) else {
            return false;
        };
        if piece.side != player || board.is_occupied(to) {
            return false;
        }

        if piece.king {
            return self.king_path_is_open(from, to, piece.side);
        }

        let (d_row, d_col) = from.delta(to);
        let forward = d_row.signum() == piece.side.forward();

        match (d_row.abs(), d_col.abs()) {
            (1, 1) => forward,
            (2, 2) => {
                let mid = Coord::new(
                    (from.row + to.row) / 2,
                    (from.col + to.col) / 2,
                );
                let jumps_opponent = board.get(mid).is_some_and(|p| p.side != piece.side);
                jumps_opponent && forward
            }
            _ => false,
        }
    }

    fn make_move(&mut self, from: Coord, to: Coord) -> bool {
        if !self.is_valid_move(from, to) {
            debug!(%from, %to, player = %self.state.current_player, "move rejected");
            return false;
        }

        let state = &mut self.state;
        let Some(piece) = state.board.take(from) else {
            return false;
        };
        state.board.place(to, piece);

        let captured = if piece.king {
            // Only the first occupied cell: the path holds at most one piece.
            path_between(from, to).find(|&cell| state.board.is_occupied(cell))
        } else if from.row.abs_diff(to.row) == 2 {
            Some(Coord::new((from.row + to.row) / 2, (from.col + to.col) / 2))
        } else {
            None
        };
        if let Some(cell) = captured {
            state.board.take(cell);
            trace!(%cell, "piece captured");
        }

        if to.row == piece.side.promotion_row(state.board.size()) {
            if let Some(moved) = state.board.get_mut(to) {
                if !moved.king {
                    trace!(%to, side = %moved.side, "piece crowned");
                }
                moved.king = true;
            }
        }

        state.current_player = state.current_player.opponent();
        self.update_history(from, to);

        debug!(%from, %to, moves = self.state.moves(), "move played");
        true
    }

    fn calculate_influence(&self, at: Coord) -> f64 {
        let Some(piece) = self.state.board.get(at) else {
            return 0.0;
        };
        let last = self.state.board.size() - 1;

        let mut influence = BASE_INFLUENCE;
        influence += self.possible_moves(at).len() as f64 * MOVE_INFLUENCE;

        if piece.king {
            influence += KING_INFLUENCE;
        }
        if at.row == 0 || at.row == last {
            influence += BACK_ROW_INFLUENCE;
        }
        if at.col == 0 || at.col == last {
            influence += EDGE_INFLUENCE;
        }

        influence.min(MAX_INFLUENCE)
    }

    fn possible_moves_as(&self, at: Coord, player: Side) -> MoveList {
        match self.state.board.get(at) {
            None => MoveList::new(),
            Some(piece) if piece.king => self.king_moves(at, piece.side),
            Some(piece) => self.man_moves(at, piece.side, player),
        }
    }

    fn reset_game(&mut self) {
        let board = self.initialize_board();
        self.state.reset(board, self.config.first_player);
        debug!(first_player = %self.config.first_player, "game reset");
    }

    /// A side with no pieces loses, then a side to move with no moves loses.
    ///
    /// A board with no pieces at all is a draw.
    fn outcome(&self) -> Option<GameResult<Side>> {
        match (self.piece_count(Side::White), self.piece_count(Side::Black)) {
            (0, 0) => return Some(GameResult::Draw),
            (0, _) => return Some(GameResult::Winner(Side::Black)),
            (_, 0) => return Some(GameResult::Winner(Side::White)),
            _ => {}
        }

        if self.legal_moves().is_empty() {
            return Some(GameResult::Winner(self.state.current_player.opponent()));
        }

        None
    }
}
