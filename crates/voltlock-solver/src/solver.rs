//! Solver implementation.
//!
//! Logging levels:
//! - **INFO**: solve start/end with targets and the winning combination
//! - **TRACE**: per-candidate wire values

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, trace};
use voltlock_config::SolverConfig;
use voltlock_core::{evaluate, CircuitConfig, Combination, Target, Wire};

use crate::outcome::{SolveError, SolveOutcome, SolveStats};

/// Default absolute match tolerance.
pub const DEFAULT_TOLERANCE: f64 = voltlock_config::DEFAULT_TOLERANCE;

/// Exhaustive solver over the 8-bit switch combination space.
///
/// Enumerates combinations 0 through 255 in ascending order (bit 0 = pair 0)
/// and evaluates both wires for each candidate. The first candidate whose two
/// results both land within `tolerance` of the targets wins; the search order
/// is part of the contract because it decides which solution is returned when
/// several exist. Correctness depends on exhaustiveness, not cleverness.
///
/// # Examples
///
/// ```
/// use voltlock_core::{CircuitConfig, Modifier, Operator, Target};
/// use voltlock_solver::Solver;
///
/// let mut config = CircuitConfig::new();
/// config.start_value = 10.0;
/// config.pairs[0].left = Modifier::new(Operator::Add, 5.0);
/// config.pairs[0].right = Modifier::new(Operator::Sub, 3.0);
///
/// let outcome = Solver::new()
///     .solve(&mut config, &Target::new(15.0, 7.0))
///     .unwrap();
/// assert!(outcome.is_solved());
/// assert!(config.pairs[0].enabled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    tolerance: Option<f64>,
    terminate_early_flag: Option<Arc<AtomicBool>>,
}

impl Solver {
    /// Creates a solver with the default tolerance.
    pub fn new() -> Self {
        Solver::default()
    }

    /// Creates a solver from a loaded configuration.
    pub fn from_config(config: &SolverConfig) -> Self {
        Solver::new().with_tolerance(config.solver.tolerance)
    }

    /// Sets the match tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Sets a cooperative cancellation flag, checked between iterations.
    ///
    /// This method is here for callers that run the sweep off the interactive
    /// thread; the fixed 256-candidate space does not need it for
    /// responsiveness.
    pub fn with_terminate(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = Some(flag);
        self
    }

    /// Returns the effective match tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(DEFAULT_TOLERANCE)
    }

    /// Searches for a switch combination that brings both wires within
    /// tolerance of the target.
    ///
    /// On success the winning combination is installed into `config`'s
    /// enabled flags; operators and operands are never touched. On
    /// [`SolveOutcome::NoSolution`] and on every error the configuration is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidTarget`] if either target side is missing or
    /// non-numeric; [`SolveError::Cancelled`] if the cancellation flag was
    /// raised mid-sweep.
    pub fn solve(
        &self,
        config: &mut CircuitConfig,
        target: &Target,
    ) -> Result<SolveOutcome, SolveError> {
        let (left_target, right_target) = match (target.left_value(), target.right_value()) {
            (Some(left), Some(right)) => (left, right),
            _ => return Err(SolveError::InvalidTarget),
        };

        let tolerance = self.tolerance();
        info!(
            event = "solve_start",
            start_value = config.start_value,
            target_left = left_target,
            target_right = right_target,
            tolerance,
        );

        let started = Instant::now();
        // The sweep works on a scratch copy of the pairs so the caller's
        // configuration never aliases a half-explored candidate.
        let mut candidate = config.pairs.clone();
        let mut tested: u32 = 0;

        for combination in Combination::enumerate() {
            if let Some(flag) = &self.terminate_early_flag {
                if flag.load(Ordering::SeqCst) {
                    info!(event = "solve_cancelled", combinations_tested = tested);
                    return Err(SolveError::Cancelled);
                }
            }

            for (index, pair) in candidate.iter_mut().enumerate() {
                pair.enabled = combination.pair_enabled(index);
            }
            tested += 1;

            let left = evaluate(config.start_value, &candidate, Wire::Left);
            let right = evaluate(config.start_value, &candidate, Wire::Right);
            trace!(combination = %combination, left, right);

            if (left - left_target).abs() < tolerance && (right - right_target).abs() < tolerance {
                config.apply_combination(combination);
                let stats = SolveStats {
                    combinations_tested: tested,
                    elapsed: started.elapsed(),
                };
                info!(
                    event = "solve_end",
                    combination = %combination,
                    left,
                    right,
                    combinations_tested = tested,
                );
                return Ok(SolveOutcome::Solved {
                    combination,
                    left,
                    right,
                    stats,
                });
            }
        }

        let stats = SolveStats {
            combinations_tested: tested,
            elapsed: started.elapsed(),
        };
        info!(event = "solve_failed", combinations_tested = tested);
        Ok(SolveOutcome::NoSolution { stats })
    }
}

/// Evaluates both wires of a circuit under its current enabled flags.
///
/// Convenience for presentation layers that re-render the outputs after
/// every edit.
pub fn evaluate_wires(config: &CircuitConfig) -> (f64, f64) {
    (
        evaluate(config.start_value, &config.pairs, Wire::Left),
        evaluate(config.start_value, &config.pairs, Wire::Right),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltlock_core::{Modifier, Operator};

    #[test]
    fn test_tolerance_default_and_override() {
        assert_eq!(Solver::new().tolerance(), 0.01);
        assert_eq!(Solver::new().with_tolerance(0.5).tolerance(), 0.5);

        let config = SolverConfig::new().with_tolerance(0.001);
        assert_eq!(Solver::from_config(&config).tolerance(), 0.001);
    }

    #[test]
    fn test_cancellation_between_iterations() {
        let mut config = CircuitConfig::new();
        config.start_value = 1.0;
        config.pairs[0].left = Modifier::new(Operator::Add, 1.0);
        config.pairs[0].right = Modifier::new(Operator::Add, 1.0);

        let flag = Arc::new(AtomicBool::new(true));
        let err = Solver::new()
            .with_terminate(flag)
            .solve(&mut config, &Target::new(2.0, 2.0))
            .unwrap_err();
        assert_eq!(err, SolveError::Cancelled);
        assert!(!config.pairs[0].enabled);
    }

    #[test]
    fn test_evaluate_wires_tracks_current_flags() {
        let mut config = CircuitConfig::new();
        config.start_value = 4.0;
        config.pairs[1].left = Modifier::new(Operator::Mul, 2.0);
        config.pairs[1].right = Modifier::new(Operator::Div, 4.0);

        assert_eq!(evaluate_wires(&config), (4.0, 4.0));
        config.pairs[1].enabled = true;
        assert_eq!(evaluate_wires(&config), (8.0, 1.0));
    }
}
