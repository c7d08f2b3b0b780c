//! Board analytics built on top of any `GameEngine`.
//!
//! Nothing here changes game progression; every calculator takes the
//! engine by shared reference.

pub mod heatmap;

pub use heatmap::{Heatmap, HeatmapCalculator, HeatmapKind};
