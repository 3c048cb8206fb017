//! This module defines the `TuringMachine` struct, which simulates a deterministic single-tape
//! Turing Machine. It owns the tape, the head position and the current state, and evaluates
//! the transition table one step at a time.

use crate::tape::Tape;
use crate::types::{Halt, MachineError, RunConfig, Step, Transition, TransitionTable};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// The static description of a machine: its alphabet, states and transition function.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition<Q, S>
where
    Q: Eq + Hash,
    S: Eq + Hash,
{
    pub states: HashSet<Q>,
    pub symbols: HashSet<S>,
    pub blank: S,
    pub initial_state: Q,
    pub final_states: HashSet<Q>,
    pub transitions: TransitionTable<Q, S>,
}

/// Represents a single-tape Turing Machine.
///
/// The transition table is fixed at construction. Only the current state, the head position
/// and the tape change while the machine runs.
#[derive(Debug, Clone)]
pub struct TuringMachine<Q, S>
where
    Q: Eq + Hash,
    S: Eq + Hash,
{
    states: HashSet<Q>,
    symbols: HashSet<S>,
    initial_state: Q,
    final_states: HashSet<Q>,
    transitions: TransitionTable<Q, S>,
    state: Q,
    head: i64,
    tape: Tape<S>,
    step_count: usize,
}

impl<Q, S> TuringMachine<Q, S>
where
    Q: Eq + Hash + Clone + Debug,
    S: Eq + Hash + Clone + Debug,
{
    /// Creates a new `TuringMachine` from a `Definition`.
    ///
    /// The machine starts in the initial state with the head at index 0 over an all-blank tape.
    ///
    /// # Returns
    ///
    /// * `Ok(TuringMachine)` if the definition is consistent.
    /// * `Err(MachineError)` if the blank symbol, the initial state, a final state or any
    ///   transition refers to something outside the declared alphabet and state set.
    pub fn new(definition: Definition<Q, S>) -> Result<Self, MachineError> {
        validate(&definition)?;

        let Definition {
            states,
            symbols,
            blank,
            initial_state,
            final_states,
            transitions,
        } = definition;

        log::debug!(
            "Machine created: {} states, {} symbols, {} transitions",
            states.len(),
            symbols.len(),
            transitions.len()
        );

        Ok(Self {
            state: initial_state.clone(),
            head: 0,
            tape: Tape::new(blank),
            step_count: 0,
            states,
            symbols,
            initial_state,
            final_states,
            transitions,
        })
    }

    /// Executes a single transition.
    ///
    /// The machine does not advance if the current state is final, or if no rule exists for
    /// the current state and the symbol under the head. Neither case mutates the machine.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if a transition was applied.
    /// * `Step::Halt(_)` with the reason the machine could not advance.
    pub fn step(&mut self) -> Step<Q, S> {
        if let Some(halt) = self.halt_reason() {
            return Step::Halt(halt);
        }

        // halt_reason returned None, so a rule exists
        let Some(Transition {
            next_state,
            write,
            direction,
        }) = self.transition().cloned()
        else {
            return Step::Halt(self.no_transition());
        };

        log::trace!(
            "{:?} reads {:?} at {} -> {:?}, write {:?}, move {:?}",
            self.state,
            self.symbol(),
            self.head,
            next_state,
            write,
            direction
        );

        if let Some(symbol) = write {
            self.tape.set(self.head, symbol);
        }
        self.head += direction.offset();
        self.state = next_state;
        self.step_count += 1;

        Step::Continue
    }

    /// Steps until the machine halts.
    ///
    /// There is no step limit: a machine whose rules never reach a halting condition runs
    /// forever. Use [`TuringMachine::run_with`] to bound the run.
    pub fn run(&mut self) -> Halt<Q, S> {
        loop {
            if let Step::Halt(halt) = self.step() {
                log::debug!("Halted after {} steps: {:?}", self.step_count, halt);
                return halt;
            }
        }
    }

    /// Steps until the machine halts or the configured step limit is reached.
    ///
    /// With `trace` enabled the tape window is logged before every step.
    pub fn run_with(&mut self, config: &RunConfig) -> Result<Halt<Q, S>, MachineError> {
        let trace = config.trace;
        self.run_observed(config, |machine| {
            if trace {
                log::info!(
                    "step {}: state {:?}, head {}, tape {:?}",
                    machine.step_count(),
                    machine.state(),
                    machine.head(),
                    machine.tape_window()
                );
            }
        })
    }

    /// Like [`TuringMachine::run_with`], calling `observer` once per iteration before stepping.
    ///
    /// The observer also sees the final configuration, right before the step that reports
    /// the halt.
    pub fn run_observed<F>(
        &mut self,
        config: &RunConfig,
        mut observer: F,
    ) -> Result<Halt<Q, S>, MachineError>
    where
        F: FnMut(&Self),
    {
        let mut taken = 0;
        loop {
            observer(self);

            if config.max_steps.is_some_and(|max| taken >= max) {
                return match self.halt_reason() {
                    Some(halt) => Ok(halt),
                    None => Err(MachineError::StepLimitExceeded(taken)),
                };
            }

            match self.step() {
                Step::Continue => taken += 1,
                Step::Halt(halt) => {
                    log::debug!("Halted after {} steps: {:?}", self.step_count, halt);
                    return Ok(halt);
                }
            }
        }
    }

    /// Returns why the machine cannot advance, or `None` if it can.
    pub fn halt_reason(&self) -> Option<Halt<Q, S>> {
        if self.final_states.contains(&self.state) {
            return Some(Halt::FinalState(self.state.clone()));
        }

        match self.transition() {
            Some(_) => None,
            None => Some(self.no_transition()),
        }
    }

    /// Checks if the machine is in a final state or has no rule for the symbol under the head.
    pub fn is_halted(&self) -> bool {
        self.halt_reason().is_some()
    }

    /// Finds the rule for the current state and the symbol under the head.
    ///
    /// Final states are never looked up, so this returns `None` for them even if the table
    /// happens to contain an entry.
    pub fn transition(&self) -> Option<&Transition<Q, S>> {
        if self.final_states.contains(&self.state) {
            return None;
        }

        self.transitions
            .get(&(self.state.clone(), self.symbol().clone()))
    }

    fn no_transition(&self) -> Halt<Q, S> {
        Halt::NoTransition {
            state: self.state.clone(),
            symbol: self.symbol().clone(),
        }
    }

    /// Returns the symbol under the head.
    pub fn symbol(&self) -> &S {
        self.tape.get(self.head)
    }

    /// Returns the symbols between the lowest and highest written cells.
    ///
    /// An untouched tape yields an empty window.
    pub fn tape_window(&self) -> Vec<S> {
        self.tape.window()
    }

    pub fn tape(&self) -> &Tape<S> {
        &self.tape
    }

    /// Gives direct access to the tape, e.g. to seed cells before running.
    pub fn tape_mut(&mut self) -> &mut Tape<S> {
        &mut self.tape
    }

    /// Returns the current state.
    pub fn state(&self) -> &Q {
        &self.state
    }

    /// Returns the initial state.
    pub fn initial_state(&self) -> &Q {
        &self.initial_state
    }

    /// Returns the head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Returns the number of transitions applied so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn blank(&self) -> &S {
        self.tape.blank()
    }

    pub fn states(&self) -> &HashSet<Q> {
        &self.states
    }

    pub fn symbols(&self) -> &HashSet<S> {
        &self.symbols
    }

    pub fn final_states(&self) -> &HashSet<Q> {
        &self.final_states
    }

    /// Resets the machine to its initial configuration: initial state, head at 0, blank tape.
    pub fn reset(&mut self) {
        self.state = self.initial_state.clone();
        self.head = 0;
        self.tape.clear();
        self.step_count = 0;
    }
}

/// Checks that every state and symbol a definition mentions is declared.
fn validate<Q, S>(definition: &Definition<Q, S>) -> Result<(), MachineError>
where
    Q: Eq + Hash + Debug,
    S: Eq + Hash + Debug,
{
    if !definition.symbols.contains(&definition.blank) {
        return Err(MachineError::invalid_blank_symbol(&definition.blank));
    }

    if !definition.states.contains(&definition.initial_state) {
        return Err(MachineError::invalid_initial_state(
            &definition.initial_state,
        ));
    }

    if let Some(state) = definition
        .final_states
        .iter()
        .find(|state| !definition.states.contains(*state))
    {
        return Err(MachineError::invalid_final_state(state));
    }

    for ((state, read), transition) in &definition.transitions {
        for state in [state, &transition.next_state] {
            if !definition.states.contains(state) {
                return Err(MachineError::undefined_state(state));
            }
        }

        for symbol in std::iter::once(read).chain(transition.write.as_ref()) {
            if !definition.symbols.contains(symbol) {
                return Err(MachineError::undefined_symbol(symbol));
            }
        }
    }

    Ok(())
}
