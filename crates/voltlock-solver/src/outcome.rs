//! Solve outcomes and errors.

use std::time::Duration;

use thiserror::Error;
use voltlock_core::Combination;

/// Error returned when a solve attempt cannot run to a normal outcome.
///
/// An exhausted search is not an error; see [`SolveOutcome::NoSolution`].
/// Callers are expected to react differently to the two: an invalid target
/// asks for target entry, an exhausted search suggests adjusting modifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// One or both target values missing or non-numeric at solve time.
    /// The search is not attempted and the configuration is unchanged.
    #[error("both target values must be set before solving")]
    InvalidTarget,

    /// The cooperative cancellation flag was raised between iterations.
    /// The configuration is unchanged.
    #[error("solve was cancelled")]
    Cancelled,
}

/// Counters for one solve sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolveStats {
    /// Candidate combinations evaluated before the sweep ended.
    pub combinations_tested: u32,
    /// Wall-clock time the sweep took.
    pub elapsed: Duration,
}

/// The result of a completed solve sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// The first matching combination in ascending order, already installed
    /// into the circuit's enabled flags.
    Solved {
        /// The winning switch pattern.
        combination: Combination,
        /// Left wire value under the winning combination.
        left: f64,
        /// Right wire value under the winning combination.
        right: f64,
        /// Sweep counters.
        stats: SolveStats,
    },

    /// All 256 combinations were tested without a match; the circuit's
    /// enabled flags are as they were before the call.
    NoSolution {
        /// Sweep counters.
        stats: SolveStats,
    },
}

impl SolveOutcome {
    /// Returns true if the sweep found a matching combination.
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved { .. })
    }

    /// Returns the sweep counters.
    pub fn stats(&self) -> &SolveStats {
        match self {
            SolveOutcome::Solved { stats, .. } => stats,
            SolveOutcome::NoSolution { stats } => stats,
        }
    }
}
