//! Voltlock Core - Circuit model and evaluator for the voltlock puzzle solver
//!
//! This crate provides the fundamental types for the two-wire circuit puzzle:
//! - Circuit types: operators, modifiers, pairs and the circuit configuration
//! - The accumulator evaluator that folds a start value through enabled pairs
//! - Input normalization for free-form modifier entry ("+5", "×2", ...)

pub mod circuit;
pub mod parse;

pub use circuit::{
    evaluate, CircuitConfig, Combination, Modifier, ModifierPair, Operand, Operator, Target, Wire,
    PAIR_COUNT,
};
pub use parse::{operator_from_key, parse_modifier_input, ParsedInput};
