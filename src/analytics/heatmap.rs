//! Heatmaps: per-cell numeric overlays derived from a board.
//!
//! Three kinds are supported:
//! - **Influence**: each piece's `calculate_influence` score on its own cell
//! - **Movement**: how many pieces can move to each cell
//! - **Threat**: where the opponents of the side to move can move, weighted
//!   up on cells holding the side to move's pieces
//!
//! All calculators only borrow the engine immutably.

use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoardEntry, Coord, EngineError};
use crate::rules::GameEngine;

/// Extra threat weight on a cell holding a piece of the side to move.
const CAPTURE_WEIGHT: f64 = 2.0;

/// Heatmap selector.
///
/// Callers that also need a "no overlay" choice use `Option<HeatmapKind>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapKind {
    Influence,
    Movement,
    Threat,
}

impl HeatmapKind {
    pub const ALL: [HeatmapKind; 3] = [HeatmapKind::Influence, HeatmapKind::Movement, HeatmapKind::Threat];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HeatmapKind::Influence => "influence",
            HeatmapKind::Movement => "movement",
            HeatmapKind::Threat => "threat",
        }
    }
}

impl std::fmt::Display for HeatmapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeatmapKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeatmapKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnknownHeatmap(s.to_string()))
    }
}

/// A `size × size` grid of values, one per board cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    size: usize,
    values: Vec<f64>,
}

impl Heatmap {
    /// Create a zero-filled heatmap.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at a cell, or `None` off the grid.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<f64> {
        at.is_within(self.size)
            .then(|| self.values[at.row * self.size + at.col])
    }

    fn add(&mut self, at: Coord, amount: f64) {
        self.values[at.row * self.size + at.col] += amount;
    }

    fn set(&mut self, at: Coord, value: f64) {
        self.values[at.row * self.size + at.col] = value;
    }

    /// Iterate over rows, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size.max(1))
    }

    /// Copy into nested row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Largest cell value; `0.0` for an all-zero or empty heatmap.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of all cell values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl Index<Coord> for Heatmap {
    type Output = f64;

    fn index(&self, at: Coord) -> &f64 {
        assert!(at.is_within(self.size), "{at} is outside a {0}x{0} heatmap", self.size);
        &self.values[at.row * self.size + at.col]
    }
}

/// Stateless heatmap calculator.
pub struct HeatmapCalculator;

impl HeatmapCalculator {
    /// Compute the heatmap of the given kind.
    pub fn calculate<E: GameEngine>(kind: HeatmapKind, engine: &E) -> Heatmap {
        match kind {
            HeatmapKind::Influence => Self::calculate_influence_heatmap(engine),
            HeatmapKind::Movement => Self::calculate_movement_heatmap(engine),
            HeatmapKind::Threat => Self::calculate_threat_heatmap(engine),
        }
    }

    /// Each occupied cell holds its piece's influence; empty cells are 0.
    pub fn calculate_influence_heatmap<E: GameEngine>(engine: &E) -> Heatmap {
        let mut heatmap = Heatmap::new(engine.board_size());

        for (at, _) in engine.board().occupied() {
            heatmap.set(at, engine.calculate_influence(at));
        }

        debug!(kind = "influence", total = heatmap.total(), "heatmap computed");
        heatmap
    }

    /// Each cell counts how many pieces can move there.
    pub fn calculate_movement_heatmap<E: GameEngine>(engine: &E) -> Heatmap {
        let mut heatmap = Heatmap::new(engine.board_size());

        for (at, _) in engine.board().occupied() {
            for target in engine.possible_moves(at) {
                heatmap.add(target, 1.0);
            }
        }

        debug!(kind = "movement", total = heatmap.total(), "heatmap computed");
        heatmap
    }

    /// Cells the opponents of the side to move can reach.
    ///
    /// Each reachable cell scores 1 per opponent piece that reaches it, and
    /// 2 more if it holds a piece of the side to move. Opponent moves are
    /// generated with the opponent as mover; whose turn it is never changes.
    pub fn calculate_threat_heatmap<E: GameEngine>(engine: &E) -> Heatmap {
        let board = engine.board();
        let current = engine.current_player();
        let mut heatmap = Heatmap::new(engine.board_size());

        for (at, piece) in board.occupied() {
            let owner = piece.player();
            if owner == current {
                continue;
            }

            for target in engine.possible_moves_as(at, owner) {
                heatmap.add(target, 1.0);
                if board.get(target).is_some_and(|p| p.player() == current) {
                    heatmap.add(target, CAPTURE_WEIGHT);
                }
            }
        }

        debug!(kind = "threat", total = heatmap.total(), "heatmap computed");
        heatmap
    }
}
