//! Input normalization for free-form modifier entry.
//!
//! Turns tokens like `+5`, `-3.2` or `×2` into an operator/operand pair. The
//! parse is permissive: anything unparseable is kept verbatim as a pending
//! operand and the evaluator later treats it as absent.

use crate::circuit::{Operand, Operator};

/// The result of normalizing one modifier entry token.
///
/// `operator` is `None` when the token carried no leading operator symbol; the
/// caller leaves the current operator unchanged in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// Operator selected by a leading symbol, if any.
    pub operator: Option<Operator>,
    /// The parsed operand, pending text if unparseable.
    pub operand: Operand,
}

/// Normalizes a free-form modifier entry token.
///
/// A leading character from `+ - * / × ÷` selects the operator (Unicode forms
/// normalize to ASCII) and the remainder is parsed as the operand. Without a
/// leading operator the whole token is parsed as a plain operand. Unparseable
/// text is stored verbatim as a pending operand; empty input clears the
/// operand.
///
/// # Examples
///
/// ```
/// use voltlock_core::{parse_modifier_input, Operand, Operator};
///
/// let parsed = parse_modifier_input("×2");
/// assert_eq!(parsed.operator, Some(Operator::Mul));
/// assert_eq!(parsed.operand, Operand::Value(2.0));
///
/// let parsed = parse_modifier_input("7");
/// assert_eq!(parsed.operator, None); // operator left unchanged by caller
/// assert_eq!(parsed.operand, Operand::Value(7.0));
/// ```
pub fn parse_modifier_input(input: &str) -> ParsedInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedInput {
            operator: None,
            operand: Operand::Empty,
        };
    }

    let mut chars = trimmed.chars();
    if let Some(first) = chars.next() {
        if let Some(operator) = Operator::from_symbol(first) {
            let rest = chars.as_str().trim();
            if let Ok(value) = rest.parse::<f64>() {
                if value.is_finite() {
                    return ParsedInput {
                        operator: Some(operator),
                        operand: Operand::Value(value),
                    };
                }
            }
        }
    }

    // No leading operator, or nothing numeric behind it: try the whole token
    // as a plain operand.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedInput {
            operator: None,
            operand: Operand::Value(value),
        },
        _ => ParsedInput {
            operator: None,
            operand: Operand::Pending(input.to_string()),
        },
    }
}

/// Maps a single keystroke to an operator for shortcut entry.
///
/// Accepts the parseable symbols plus `x`/`X` for multiplication.
pub fn operator_from_key(key: char) -> Option<Operator> {
    match key {
        'x' | 'X' => Some(Operator::Mul),
        other => Operator::from_symbol(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operator_prefixed_tokens() {
        let parsed = parse_modifier_input("+5");
        assert_eq!(parsed.operator, Some(Operator::Add));
        assert_eq!(parsed.operand, Operand::Value(5.0));

        let parsed = parse_modifier_input("-3.2");
        assert_eq!(parsed.operator, Some(Operator::Sub));
        assert_eq!(parsed.operand, Operand::Value(3.2));

        let parsed = parse_modifier_input("*3");
        assert_eq!(parsed.operator, Some(Operator::Mul));
        assert_eq!(parsed.operand, Operand::Value(3.0));

        let parsed = parse_modifier_input("÷4");
        assert_eq!(parsed.operator, Some(Operator::Div));
        assert_eq!(parsed.operand, Operand::Value(4.0));
    }

    #[test]
    fn test_parse_allows_space_after_operator() {
        let parsed = parse_modifier_input("+ 2.5");
        assert_eq!(parsed.operator, Some(Operator::Add));
        assert_eq!(parsed.operand, Operand::Value(2.5));
    }

    #[test]
    fn test_parse_plain_number_leaves_operator_unchanged() {
        let parsed = parse_modifier_input("7");
        assert_eq!(parsed.operator, None);
        assert_eq!(parsed.operand, Operand::Value(7.0));

        let parsed = parse_modifier_input("  -0.5  ");
        // Leading '-' is an operator symbol, so this is Sub 0.5, not -0.5.
        assert_eq!(parsed.operator, Some(Operator::Sub));
        assert_eq!(parsed.operand, Operand::Value(0.5));
    }

    #[test]
    fn test_parse_empty_clears_operand() {
        let parsed = parse_modifier_input("");
        assert_eq!(parsed.operator, None);
        assert_eq!(parsed.operand, Operand::Empty);

        let parsed = parse_modifier_input("   ");
        assert_eq!(parsed.operand, Operand::Empty);
    }

    #[test]
    fn test_parse_garbage_kept_verbatim() {
        let parsed = parse_modifier_input("abc");
        assert_eq!(parsed.operator, None);
        assert_eq!(parsed.operand, Operand::Pending("abc".to_string()));

        // Operator with garbage behind it is pending too, operator untouched.
        let parsed = parse_modifier_input("+abc");
        assert_eq!(parsed.operator, None);
        assert_eq!(parsed.operand, Operand::Pending("+abc".to_string()));

        // A bare operator symbol has no operand yet.
        let parsed = parse_modifier_input("*");
        assert_eq!(parsed.operand, Operand::Pending("*".to_string()));
    }

    #[test]
    fn test_operator_from_key() {
        assert_eq!(operator_from_key('x'), Some(Operator::Mul));
        assert_eq!(operator_from_key('X'), Some(Operator::Mul));
        assert_eq!(operator_from_key('+'), Some(Operator::Add));
        assert_eq!(operator_from_key('÷'), Some(Operator::Div));
        assert_eq!(operator_from_key('q'), None);
    }
}
