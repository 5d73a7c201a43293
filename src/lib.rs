//! # Colonia
//!
//! Bacterial colony growth on a harshness field, with each colony's
//! morphology driven by a table-driven automaton fed by cooperate/defect
//! decisions.
//!
//! The simulation lives in `colonia_core`, plain data in `colonia_data` and
//! file handling in `colonia_io`. This crate adds the headless driver used
//! by the `colonia` binary.

pub mod driver;

pub use colonia_core::{
    Automaton, GrowthField, SimConfig, SimError, Simulator, StepSummary, TransitionTable,
};
pub use colonia_data::{Morphology, PopulationReport, State, Strategy, Symbol};
