//! Square game boards and the entries placed on them.
//!
//! ## BoardEntry
//!
//! Anything that can occupy a cell. The only thing the engine layer needs
//! from an entry is who owns it; games add their own fields (checkers adds
//! a `king` flag).
//!
//! ## Board
//!
//! A `size × size` grid of `Option<T>`. An empty cell is always `None`,
//! never a missing slot. The size is fixed at construction.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A piece (or any other occupant) placed on a board cell.
pub trait BoardEntry: Clone {
    /// Player identity type. Compared for equality only.
    type Player: Copy + Eq + fmt::Debug;

    /// The player owning this entry.
    fn player(&self) -> Self::Player;
}

/// A square board with a fixed side length.
///
/// Reads outside the board return `None`. Writes outside the board are a
/// programming error and panic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board<T> {
    size: usize,
    cells: Vec<Option<T>>,
}

impl<T> Board<T> {
    /// Create an empty `size × size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        cells.resize_with(size * size, || None);
        Self { size, cells }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.is_within(self.size)
    }

    fn idx(&self, at: Coord) -> usize {
        at.row * self.size + at.col
    }

    /// Get the entry at a cell, or `None` if empty or off the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&T> {
        if !self.contains(at) {
            return None;
        }
        self.cells[self.idx(at)].as_ref()
    }

    /// Get a mutable reference to the entry at a cell.
    pub fn get_mut(&mut self, at: Coord) -> Option<&mut T> {
        if !self.contains(at) {
            return None;
        }
        let i = self.idx(at);
        self.cells[i].as_mut()
    }

    #[must_use]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.get(at).is_some()
    }

    /// Put an entry on a cell, returning whatever was there before.
    pub fn place(&mut self, at: Coord, entry: T) -> Option<T> {
        assert!(self.contains(at), "{at} is outside a {0}x{0} board", self.size);
        let i = self.idx(at);
        self.cells[i].replace(entry)
    }

    /// Remove and return the entry on a cell, leaving it empty.
    pub fn take(&mut self, at: Coord) -> Option<T> {
        if !self.contains(at) {
            return None;
        }
        let i = self.idx(at);
        self.cells[i].take()
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &T)> {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|entry| (Coord::new(i / size, i % size), entry))
        })
    }

    /// Iterate over rows, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        // chunks(0) panics, and a zero-sized board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

impl<T: BoardEntry> Board<T> {
    /// Count the entries owned by `player`.
    #[must_use]
    pub fn count_for(&self, player: T::Player) -> usize {
        self.occupied()
            .filter(|(_, entry)| entry.player() == player)
            .count()
    }
}

impl<T> Index<Coord> for Board<T> {
    type Output = Option<T>;

    fn index(&self, at: Coord) -> &Self::Output {
        assert!(self.contains(at), "{at} is outside a {0}x{0} board", self.size);
        &self.cells[self.idx(at)]
    }
}

/// Renders one character per cell, `.` for empty cells.
impl<T: fmt::Display> fmt::Display for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(entry) => write!(f, "{entry}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
