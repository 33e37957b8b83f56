//! Accumulator evaluator.
//!
//! Folds a start value through a sequence of modifier pairs for one wire.
//! Total function: every anomaly (disabled pair, missing or pending operand,
//! division by zero) degrades to a skipped step, never an error.

use super::{ModifierPair, Wire};

/// Evaluates one wire of a circuit.
///
/// Walks `pairs` in index order. A pair is skipped entirely when its shared
/// enabled flag is off; an enabled pair's modifier is skipped individually
/// when its operand is not a finite number. The fold is strictly sequential,
/// so subtraction and division make the result order-sensitive.
///
/// Non-finite start values are treated as 0.
///
/// # Examples
///
/// ```
/// use voltlock_core::{evaluate, Modifier, ModifierPair, Operator, Wire, PAIR_COUNT};
///
/// let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
/// pairs[0].left = Modifier::new(Operator::Sub, 2.0);
/// pairs[0].enabled = true;
/// pairs[1].left = Modifier::new(Operator::Div, 2.0);
/// pairs[1].enabled = true;
///
/// assert_eq!(evaluate(10.0, &pairs, Wire::Left), 4.0); // (10 - 2) / 2
/// assert_eq!(evaluate(10.0, &pairs, Wire::Right), 10.0); // right side untouched
/// ```
pub fn evaluate(start_value: f64, pairs: &[ModifierPair], wire: Wire) -> f64 {
    let mut result = if start_value.is_finite() {
        start_value
    } else {
        0.0
    };
    for pair in pairs {
        if !pair.enabled {
            continue;
        }
        let modifier = pair.modifier(wire);
        let Some(operand) = modifier.operand.as_f64() else {
            continue;
        };
        result = modifier.operator.apply(result, operand);
    }
    result
}
