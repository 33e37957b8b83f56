//! Command-line grammar for the interactive session.
//!
//! One command per input line. Pair indices are 1-based at the prompt and
//! converted to 0-based here.

use thiserror::Error;
use voltlock::{Wire, PAIR_COUNT};

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set the circuit start value.
    Start(f64),
    /// Apply a free-form modifier token to one side of a pair.
    Modifier {
        /// 0-based pair index.
        index: usize,
        /// Which wire's modifier to edit.
        wire: Wire,
        /// Raw token, normalized later by the parser in core.
        token: String,
    },
    /// Enable, disable or flip a pair's shared switch.
    Switch {
        /// 0-based pair index.
        index: usize,
        /// `Some(state)` to force a state, `None` to flip.
        enabled: Option<bool>,
    },
    /// Set one target value.
    TargetSet {
        /// Which wire's target to set.
        wire: Wire,
        /// The desired value.
        value: f64,
    },
    /// Clear both targets.
    TargetClear,
    /// Run the solver against the current targets.
    Solve,
    /// Restore the canonical empty state.
    Reset,
    /// Print the circuit and both wire outputs.
    Show,
    /// Print command help.
    Help,
    /// Leave the session.
    Quit,
}

/// Command parse error, rendered verbatim at the prompt.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("pair index must be 1-{PAIR_COUNT}, got '{0}'")]
    BadIndex(String),

    #[error("expected a number, got '{0}'")]
    BadNumber(String),

    #[error("expected 'l' or 'r', got '{0}'")]
    BadWire(String),
}

fn parse_index(word: &str) -> Result<usize, CommandError> {
    match word.parse::<usize>() {
        Ok(n) if (1..=PAIR_COUNT).contains(&n) => Ok(n - 1),
        _ => Err(CommandError::BadIndex(word.to_string())),
    }
}

fn parse_wire(word: &str) -> Result<Wire, CommandError> {
    match word {
        "l" | "left" => Ok(Wire::Left),
        "r" | "right" => Ok(Wire::Right),
        other => Err(CommandError::BadWire(other.to_string())),
    }
}

fn parse_number(word: &str) -> Result<f64, CommandError> {
    match word.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::BadNumber(word.to_string())),
    }
}

/// Parses one input line into a [`Command`].
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match keyword {
        "start" => match rest.as_slice() {
            [value] => Command::Start(parse_number(value)?),
            _ => return Err(CommandError::Usage("start <value>")),
        },
        "mod" => match rest.as_slice() {
            [index, wire, token] => Command::Modifier {
                index: parse_index(index)?,
                wire: parse_wire(wire)?,
                token: (*token).to_string(),
            },
            _ => return Err(CommandError::Usage("mod <1-8> <l|r> <token>")),
        },
        "on" | "off" | "toggle" => match rest.as_slice() {
            [index] => Command::Switch {
                index: parse_index(index)?,
                enabled: match keyword {
                    "on" => Some(true),
                    "off" => Some(false),
                    _ => None,
                },
            },
            _ => return Err(CommandError::Usage("on|off|toggle <1-8>")),
        },
        "target" => match rest.as_slice() {
            ["clear"] => Command::TargetClear,
            [wire, value] => Command::TargetSet {
                wire: parse_wire(wire)?,
                value: parse_number(value)?,
            },
            _ => return Err(CommandError::Usage("target <l|r> <value> | target clear")),
        },
        "solve" => Command::Solve,
        "reset" => Command::Reset,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
