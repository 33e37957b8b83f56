//! Voltlock Solver Engine
//!
//! This crate provides the exhaustive configuration solver:
//! - [`Solver`] sweeps all 256 switch combinations in ascending order
//! - [`SolveOutcome`] distinguishes a solved circuit from an exhausted search
//! - [`SolveError`] covers invalid targets and cooperative cancellation
//! - [`SolveStats`] reports how much of the space a sweep visited

pub mod outcome;
pub mod solver;

pub use outcome::{SolveError, SolveOutcome, SolveStats};
pub use solver::{evaluate_wires, Solver, DEFAULT_TOLERANCE};
