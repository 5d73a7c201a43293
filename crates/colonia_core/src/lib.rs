//! # Colonia Core
//!
//! Simulation engine for bacterial colony morphology on a harshness field.
//!
//! Two engines are coupled here:
//! - a table-driven DFA ([`automaton`]) that advances each colony's
//!   morphological phase given an input symbol, and
//! - a growth/payoff model ([`field`], [`payoff`], [`growth`]) that turns
//!   field intensity and an evolutionary-game decision into a growth update
//!   and the next automaton input.
//!
//! The [`Simulator`] owns the population and a seeded random source so
//! that runs are reproducible.
//!
//! ## Example
//!
//! ```
//! use colonia_core::{Automaton, GrowthField, Simulator, TransitionTable};
//! use colonia_data::{State, Strategy};
//! use std::sync::Arc;
//!
//! let table = TransitionTable::from_rows([
//!     (State(0), [State(1), State(0), State(0), State(0), State(-1)]),
//!     (State(1), [State(1), State(1), State(1), State(1), State(-1)]),
//! ])
//! .unwrap();
//! let automaton = Automaton::from_table(Arc::new(table), State(0), State(1)).unwrap();
//! let field = GrowthField::uniform(15, 1.0, 15.0).unwrap();
//!
//! let mut sim = Simulator::new(field, Strategy::A, automaton, Some(42));
//! sim.spawn_colonies(3);
//! sim.step().unwrap();
//! assert!(sim.is_settled());
//! ```

/// Transition tables and the morphology automaton
pub mod automaton;
/// Colony entity and birth vectors
pub mod colony;
/// Configuration management for simulation parameters
pub mod config;
/// Error types and result alias
pub mod error;
/// Square harshness field lookups
pub mod field;
/// Pluggable growth vector update rules
pub mod growth;
/// Run metrics collection and logging setup
pub mod metrics;
/// Cooperate/defect payoffs and decisions
pub mod payoff;
/// Population orchestration
pub mod simulator;

pub use automaton::{Automaton, TransitionTable};
pub use colony::Colony;
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use field::GrowthField;
pub use growth::{GrowthContext, GrowthRule, GrowthRuleKind, PayoffGrowth, StaticGrowth};
pub use metrics::{init_logging, Metrics};
pub use payoff::parse_strategy;
pub use simulator::{Simulator, StepSummary};
