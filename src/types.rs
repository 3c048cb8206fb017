//! This module defines the core data structures shared by the simulator: head directions,
//! transition rules, step outcomes, run configuration and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Represents the possible directions the tape head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl Direction {
    /// Returns the change applied to the head position.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Stay => 0,
        }
    }
}

/// The right-hand side of a transition rule.
///
/// `write` is `None` when the transition leaves the cell under the head untouched. This keeps
/// the no-op out of the alphabet, so it can never collide with a real symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<Q, S> {
    /// The state the machine enters after the transition.
    pub next_state: Q,
    /// The symbol to write under the head, if any.
    pub write: Option<S>,
    /// Where the head moves after writing.
    pub direction: Direction,
}

impl<Q, S> Transition<Q, S> {
    /// Creates a transition that writes `write` before moving.
    pub fn new(next_state: Q, write: S, direction: Direction) -> Self {
        Self {
            next_state,
            write: Some(write),
            direction,
        }
    }

    /// Creates a transition that moves and changes state without touching the tape.
    pub fn keep(next_state: Q, direction: Direction) -> Self {
        Self {
            next_state,
            write: None,
            direction,
        }
    }
}

/// Transition function keyed by `(current state, symbol read)`.
pub type TransitionTable<Q, S> = HashMap<(Q, S), Transition<Q, S>>;

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<Q, S> {
    /// The machine performed a transition and may continue.
    Continue,
    /// The machine did not advance.
    Halt(Halt<Q, S>),
}

impl<Q, S> Step<Q, S> {
    /// Returns `true` if the step performed a transition.
    pub fn advanced(&self) -> bool {
        matches!(self, Step::Continue)
    }
}

/// Why a machine stopped. Both variants are normal termination, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Halt<Q, S> {
    /// The current state is one of the final states.
    FinalState(Q),
    /// No rule exists for the current state and the symbol under the head.
    NoTransition { state: Q, symbol: S },
}

/// Options controlling a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Upper bound on the number of transitions. `None` runs until the machine halts.
    pub max_steps: Option<usize>,
    /// Report the tape window before every step.
    pub trace: bool,
}

impl RunConfig {
    /// A configuration that stops after `max_steps` transitions.
    pub fn bounded(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::default()
        }
    }
}

/// Represents the errors that can occur while building or running a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The initial state is not a member of the state set.
    #[error("Invalid initial state: {0}")]
    InvalidInitialState(String),
    /// The blank symbol is not a member of the alphabet.
    #[error("Blank symbol {0} is not part of the alphabet")]
    InvalidBlankSymbol(String),
    /// A final state is not a member of the state set.
    #[error("Invalid final state: {0}")]
    InvalidFinalState(String),
    /// A transition refers to a state outside the state set.
    #[error("Transition references undefined state {0}")]
    UndefinedState(String),
    /// A transition reads or writes a symbol outside the alphabet.
    #[error("Transition references undefined symbol {0}")]
    UndefinedSymbol(String),
    /// The machine was still running when the step limit was reached.
    #[error("Machine did not halt within {0} steps")]
    StepLimitExceeded(usize),
    /// No built-in program matches the requested name or index.
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
    /// A run configuration could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Indicates an error related to file system operations, such as reading a configuration file.
    #[error("File error: {0}")]
    FileError(String),
}

impl MachineError {
    pub(crate) fn invalid_initial_state(state: &impl Debug) -> Self {
        MachineError::InvalidInitialState(format!("{:?}", state))
    }

    pub(crate) fn invalid_blank_symbol(symbol: &impl Debug) -> Self {
        MachineError::InvalidBlankSymbol(format!("{:?}", symbol))
    }

    pub(crate) fn invalid_final_state(state: &impl Debug) -> Self {
        MachineError::InvalidFinalState(format!("{:?}", state))
    }

    pub(crate) fn undefined_state(state: &impl Debug) -> Self {
        MachineError::UndefinedState(format!("{:?}", state))
    }

    pub(crate) fn undefined_symbol(symbol: &impl Debug) -> Self {
        MachineError::UndefinedSymbol(format!("{:?}", symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left_json = serde_json::to_string(&Direction::Left).unwrap();
        let stay_json = serde_json::to_string(&Direction::Stay).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(stay_json, "\"Stay\"");

        let deserialized: Direction = serde_json::from_str("\"Right\"").unwrap();
        assert_eq!(deserialized, Direction::Right);
    }

    #[test]
    fn test_direction_offset() {
        assert_eq!(Direction::Left.offset(), -1);
        assert_eq!(Direction::Right.offset(), 1);
        assert_eq!(Direction::Stay.offset(), 0);
    }

    #[test]
    fn test_transition_creation() {
        let write = Transition::new("B", '1', Direction::Right);
        assert_eq!(write.next_state, "B");
        assert_eq!(write.write, Some('1'));

        let keep: Transition<&str, char> = Transition::keep("C", Direction::Left);
        assert_eq!(keep.write, None);
        assert_eq!(keep.direction, Direction::Left);
    }

    #[test]
    fn test_step_advanced() {
        let step: Step<&str, char> = Step::Continue;
        assert!(step.advanced());

        let halt: Step<&str, char> = Step::Halt(Halt::FinalState("HALT"));
        assert!(!halt.advanced());
    }

    #[test]
    fn test_run_config_defaults_missing_fields() {
        let config: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.max_steps, None);

        let config: RunConfig = serde_json::from_str(r#"{"max_steps": 42}"#).unwrap();
        assert_eq!(config, RunConfig::bounded(42));
    }

    #[test]
    fn test_error_display() {
        let error = MachineError::invalid_initial_state(&"Z");
        let message = format!("{}", error);

        assert!(message.contains("Invalid initial state"));
        assert!(message.contains("\"Z\""));
        assert_eq!(
            MachineError::StepLimitExceeded(10).to_string(),
            "Machine did not halt within 10 steps"
        );
    }
}
