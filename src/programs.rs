//! Built-in demonstration machines.

use crate::machine::{Definition, TuringMachine};
use crate::types::{Direction, MachineError, Transition, TransitionTable};
use std::collections::HashSet;

use Direction::{Left, Right, Stay};

/// A machine shipped with the crate.
#[derive(Debug, Clone)]
pub struct Program {
    /// Display name, also used for lookups.
    pub name: &'static str,
    pub description: &'static str,
    pub definition: Definition<&'static str, char>,
    /// Cells written onto the tape before the first step.
    pub seed: Vec<(i64, char)>,
}

impl Program {
    /// Builds a fresh machine with the seed cells written.
    pub fn machine(&self) -> Result<TuringMachine<&'static str, char>, MachineError> {
        let mut machine = TuringMachine::new(self.definition.clone())?;
        for &(index, symbol) in &self.seed {
            machine.tape_mut().set(index, symbol);
        }
        Ok(machine)
    }
}

lazy_static::lazy_static! {
    pub static ref PROGRAMS: Vec<Program> = vec![busy_beaver_3(), two_state_toy()];
}

/// Builds a transition table from `(state, read, next, write, direction)` rows.
fn table(
    rows: &[(&'static str, char, &'static str, char, Direction)],
) -> TransitionTable<&'static str, char> {
    rows.iter()
        .map(|&(state, read, next, write, direction)| {
            ((state, read), Transition::new(next, write, direction))
        })
        .collect()
}

/// The 3-state, 2-symbol busy beaver. Halts with six 1s on the tape.
pub fn busy_beaver_3() -> Program {
    Program {
        name: "Busy Beaver 3",
        description: "3-state busy beaver, halts after writing six 1s",
        definition: Definition {
            states: HashSet::from(["A", "B", "C", "HALT"]),
            symbols: HashSet::from(['0', '1']),
            blank: '0',
            initial_state: "A",
            final_states: HashSet::from(["HALT"]),
            transitions: table(&[
                ("A", '0', "B", '1', Right),
                ("A", '1', "C", '1', Left),
                ("B", '0', "A", '1', Left),
                ("B", '1', "B", '1', Right),
                ("C", '0', "B", '1', Left),
                ("C", '1', "HALT", '1', Stay),
            ]),
        },
        seed: Vec::new(),
    }
}

/// A 2-state toy machine over a tape seeded with `0` at the origin.
pub fn two_state_toy() -> Program {
    Program {
        name: "Two State Toy",
        description: "2-state demo machine starting on a seeded 0",
        definition: Definition {
            states: HashSet::from(["A", "B", "HALT"]),
            symbols: HashSet::from(['0', '1']),
            blank: '0',
            initial_state: "A",
            final_states: HashSet::from(["HALT"]),
            transitions: table(&[
                ("A", '0', "B", '0', Right),
                ("A", '1', "B", '1', Left),
                ("B", '0', "A", '1', Left),
                ("B", '1', "HALT", '0', Right),
            ]),
        },
        seed: vec![(0, '0')],
    }
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<&'static Program, MachineError> {
        PROGRAMS
            .get(index)
            .ok_or_else(|| MachineError::UnknownProgram(format!("index {}", index)))
    }

    /// Get a program by its name, ignoring case
    pub fn get_program_by_name(name: &str) -> Result<&'static Program, MachineError> {
        PROGRAMS
            .iter()
            .find(|program| program.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MachineError::UnknownProgram(name.to_string()))
    }

    /// List all program names
    pub fn list_program_names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Halt;

    #[test]
    fn test_all_programs_are_valid() {
        for program in PROGRAMS.iter() {
            assert!(
                program.machine().is_ok(),
                "Program '{}' is invalid",
                program.name
            );
        }
    }

    #[test]
    fn test_program_names() {
        let names = ProgramManager::list_program_names();

        assert_eq!(names, vec!["Busy Beaver 3", "Two State Toy"]);
        assert_eq!(ProgramManager::get_program_count(), 2);
    }

    #[test]
    fn test_get_program_by_name() {
        let program = ProgramManager::get_program_by_name("busy beaver 3").unwrap();
        assert_eq!(program.name, "Busy Beaver 3");

        let result = ProgramManager::get_program_by_name("Nonexistent");
        assert_eq!(
            result.unwrap_err(),
            MachineError::UnknownProgram("Nonexistent".to_string())
        );
    }

    #[test]
    fn test_get_program_by_index() {
        assert!(ProgramManager::get_program_by_index(1).is_ok());
        assert!(ProgramManager::get_program_by_index(999).is_err());
    }

    #[test]
    fn test_seed_is_applied() {
        let machine = two_state_toy().machine().unwrap();

        assert_eq!(machine.tape().len(), 1);
        assert_eq!(machine.tape_window(), vec!['0']);
    }

    #[test]
    fn test_busy_beaver_halts_in_final_state() {
        let mut machine = busy_beaver_3().machine().unwrap();

        assert_eq!(machine.run(), Halt::FinalState("HALT"));
        assert_eq!(machine.step_count(), 13);
    }
}
