//! This crate provides a deterministic single-tape Turing Machine simulator.
//! It includes a sparse bi-infinite tape, the stepping engine, and a small collection of
//! predefined demonstration machines.

pub mod config;
pub mod machine;
pub mod programs;
pub mod tape;
pub mod types;

/// Re-exports the `ConfigLoader` struct from the config module.
pub use config::ConfigLoader;
/// Re-exports the `TuringMachine` struct and its `Definition` from the machine module.
pub use machine::{Definition, TuringMachine};
/// Re-exports `Program`, `ProgramManager`, and `PROGRAMS` from the programs module.
pub use programs::{Program, ProgramManager, PROGRAMS};
/// Re-exports the sparse `Tape`.
pub use tape::Tape;
/// Re-exports the types used to describe and drive a machine.
pub use types::{Direction, Halt, MachineError, RunConfig, Step, Transition, TransitionTable};
