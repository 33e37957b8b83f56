//! Voltlock - A two-wire circuit puzzle solver
//!
//! Model a circuit as a start value plus eight switchable modifier pairs,
//! then search all 256 switch combinations for one that lands both wires on
//! their target values.
//!
//! # Example
//!
//! ```rust
//! use voltlock::prelude::*;
//!
//! let mut config = CircuitConfig::new();
//! config.start_value = 10.0;
//! config.pairs[0].left = Modifier::new(Operator::Add, 5.0);
//! config.pairs[0].right = Modifier::new(Operator::Sub, 3.0);
//!
//! let outcome = Solver::new()
//!     .solve(&mut config, &Target::new(15.0, 7.0))
//!     .unwrap();
//! assert!(outcome.is_solved());
//! ```

// Circuit model and evaluator
pub use voltlock_core::{
    evaluate, CircuitConfig, Combination, Modifier, ModifierPair, Operand, Operator, Target, Wire,
    PAIR_COUNT,
};

// Input normalization
pub use voltlock_core::{operator_from_key, parse_modifier_input, ParsedInput};

// Solver engine
pub use voltlock_solver::{evaluate_wires, SolveError, SolveOutcome, SolveStats, Solver};

// Configuration
pub use voltlock_config::{ConfigError, SolverConfig};

pub mod prelude {
    pub use super::{
        evaluate, evaluate_wires, parse_modifier_input, CircuitConfig, Combination, Modifier,
        ModifierPair, Operand, Operator, SolveError, SolveOutcome, Solver, SolverConfig, Target,
        Wire,
    };
}
