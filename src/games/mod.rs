//! Concrete game implementations.

pub mod checkers;
